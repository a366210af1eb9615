/// Knobs for the two places where older scanners were laxer than the JSON grammar.
///
/// The default is the strict grammar. [`ScanConfig::legacy`] switches both
/// knobs, for callers that must delimit numbers exactly like those scanners did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Only look for an exponent after a fractional part. With this set,
    /// `1e5` is scanned as `1` and the scan stops before the `e`.
    pub exponent_requires_fraction: bool,
    /// Demand at least one digit after `e`/`E` and its optional sign.
    /// With this unset, `1.0e` and `1.0e+` are accepted as they are.
    pub require_exponent_digits: bool,
}

impl ScanConfig {
    pub const fn strict() -> Self {
        Self {
            exponent_requires_fraction: false,
            require_exponent_digits: true,
        }
    }

    pub const fn legacy() -> Self {
        Self {
            exponent_requires_fraction: true,
            require_exponent_digits: false,
        }
    }

    pub const fn exponent_requires_fraction(mut self, value: bool) -> Self {
        self.exponent_requires_fraction = value;
        self
    }

    pub const fn require_exponent_digits(mut self, value: bool) -> Self {
        self.require_exponent_digits = value;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::strict()
    }
}
