use crate::config::ScanConfig;
use crate::data::{CodePoints, Span};
use crate::errors::{NumberError, NumberErrorKind};

/// Delimits and validates JSON number literals.
///
/// The scanner itself holds only its configuration, so one instance can be
/// shared freely and reused for every number of every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberScanner {
    config: ScanConfig,
}

impl NumberScanner {
    pub const fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> ScanConfig {
        self.config
    }

    /// Scans the number starting at `start` and returns the index one past its
    /// last character. The character at the returned index, if any, is not part
    /// of the number.
    pub fn scan(&self, source: &CodePoints, start: usize) -> Result<usize, NumberError> {
        self.scan_span(source, start).map(|span| span.end)
    }

    /// Like [`NumberScanner::scan`], but returns the whole `[start, end)` span.
    #[tracing::instrument(level = "trace", skip(self, source), fields(len = source.len()))]
    pub fn scan_span(&self, source: &CodePoints, start: usize) -> Result<Span, NumberError> {
        let result = Cursor::new(source, start, self.config).make_number();
        match &result {
            Ok(span) => tracing::trace!(start = span.start, end = span.end, "scanned number"),
            Err(e) => tracing::debug!(kind = ?e.kind, offset = e.offset, "rejected number"),
        }
        result
    }
}

// Per-scan state. Lives for a single call, so nothing leaks between scans.
struct Cursor<'a> {
    source: &'a CodePoints,
    config: ScanConfig,
    // Both are code point indices into `source`. `current` only ever moves forward.
    start: usize,
    current: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a CodePoints, start: usize, config: ScanConfig) -> Self {
        Self {
            source,
            config,
            start,
            current: start,
        }
    }

    fn make_number(mut self) -> Result<Span, NumberError> {
        if self.is_at_end() {
            return self.make_error_here(NumberErrorKind::UnterminatedNumber);
        }

        self.scan_sign()?;
        self.scan_integer()?;
        let has_fraction = self.scan_fraction()?;
        if has_fraction || !self.config.exponent_requires_fraction {
            self.scan_exponent()?;
        }

        if self.current > self.source.len() {
            return self.make_error_here(NumberErrorKind::UnterminatedNumber);
        }
        Ok(Span::new(self.start, self.current))
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Grammar

    fn scan_sign(&mut self) -> Result<(), NumberError> {
        /* Skips an optional minus sign, and demands that a digit comes next either way. */
        self.matches('-');
        if !is_digit(self.peek()) {
            return self.make_error_here(NumberErrorKind::InvalidStart);
        }
        Ok(())
    }

    fn scan_integer(&mut self) -> Result<(), NumberError> {
        // A zero is a complete integer part on its own. Anything may follow it
        // except another digit.
        if self.matches('0') {
            if is_digit(self.peek()) {
                return self.make_error_here(NumberErrorKind::LeadingZero);
            }
            return Ok(());
        }

        self.skip_digits();
        Ok(())
    }

    fn scan_fraction(&mut self) -> Result<bool, NumberError> {
        /* Scans an optional fraction part, consisting of a dot and at least one digit.
         * Returns whether a fraction was found. */
        if !self.matches('.') {
            return Ok(false);
        }

        if !is_digit(self.peek()) {
            return self.make_error_here(NumberErrorKind::MalformedFraction);
        }
        self.skip_digits();
        Ok(true)
    }

    fn scan_exponent(&mut self) -> Result<(), NumberError> {
        /* Scans an optional exponent part, consisting of 'e|E', an optional sign,
         * and at least one digit. */
        if !matches!(self.peek(), Some('e' | 'E')) {
            return Ok(());
        }
        self.advance();

        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }

        if self.config.require_exponent_digits && !is_digit(self.peek()) {
            return self.make_error_here(NumberErrorKind::MalformedExponent);
        }
        self.skip_digits();
        Ok(())
    }

    fn make_error_here<T>(&self, kind: NumberErrorKind) -> Result<T, NumberError> {
        /* Creates a NumberError at the character the scanner is looking at */
        Err(NumberError::new(kind, self.current))
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Scanning control

    fn advance(&mut self) {
        self.current += 1;
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current)
    }

    fn matches(&mut self, expected: char) -> bool {
        let matched = self.peek() == Some(expected);
        if matched {
            self.advance();
        }
        matched
    }

    fn skip_digits(&mut self) {
        /* Advances the scanner forward until a non-digit is found */
        while is_digit(self.peek()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_digit(ch: Option<char>) -> bool {
    matches!(ch, Some('0'..='9'))
}
