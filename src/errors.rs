use crate::data::{CodePoints, TokenPosition};

/// The grammar rule a number literal broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NumberErrorKind {
    /// The literal does not start with `-` or a digit, or the `-` is not followed by a digit.
    #[error("a number must start with '-' or a digit, and '-' must be followed by a digit")]
    InvalidStart,

    /// A leading `0` in the integer part is followed by another digit.
    #[error("numbers cannot have leading zeroes")]
    LeadingZero,

    /// A decimal point is not followed by a digit.
    #[error("at least a digit is expected after a fraction dot")]
    MalformedFraction,

    /// An exponent marker (and optional sign) is not followed by a digit.
    #[error("at least a digit is expected after an exponent")]
    MalformedExponent,

    /// The scan started or ended outside of the input.
    #[error("the number runs past the end of the input")]
    UnterminatedNumber,
}

/// A rejected number literal, with the code-point offset of the offending character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct NumberError {
    pub kind: NumberErrorKind,
    pub offset: usize,
}

impl NumberError {
    pub fn new(kind: NumberErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Resolves the offset to a line and column in `source`.
    pub fn position(&self, source: &CodePoints) -> TokenPosition {
        source.position(self.offset)
    }
}
