//! A strict scanner for JSON number literals.
//!
//! Given the input as [CodePoints] and the index where a number starts, [scan]
//! checks the literal against the JSON number grammar (optional minus, no leading
//! zeroes, optional fraction, optional exponent) and returns the index one past
//! its last character. Converting the literal into a numeric value is left to
//! the caller.
//!
//! ```
//! use json_number_scan::{scan, CodePoints, NumberErrorKind};
//!
//! let source = CodePoints::new(r#"{"π": -3.14e0, "n": 01}"#);
//! assert_eq!(scan(&source, 6), Ok(13));
//!
//! let err = scan(&source, 20).unwrap_err();
//! assert_eq!(err.kind, NumberErrorKind::LeadingZero);
//! assert_eq!(err.offset, 21);
//! ```
mod config;
mod data;
mod errors;
mod scanner;

pub use config::ScanConfig;
pub use data::{CodePoints, Span, TokenPosition};
pub use errors::{NumberError, NumberErrorKind};
pub use scanner::NumberScanner;

/// Scans the JSON number starting at `start` with the strict grammar, and
/// returns its exclusive end index, or a [NumberError].
pub fn scan(source: &CodePoints, start: usize) -> Result<usize, NumberError> {
    NumberScanner::default().scan(source, start)
}
