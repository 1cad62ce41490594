/// Policy knobs for rules the language leaves open.
///
/// The defaults follow the strict reading: no leading zeros, case-sensitive
/// keywords and letters-only identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Accept `017` as the number 17 instead of reporting it.
    pub allow_leading_zeros: bool,
    /// Match keywords regardless of letter case (`While` is `while`).
    pub case_insensitive_keywords: bool,
    /// Allow `_` to start and continue identifiers.
    pub allow_underscores: bool,
}

impl ScannerConfig {
    pub fn is_ident_start(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || (self.allow_underscores && c == '_')
    }

    pub fn is_ident_continue(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || (self.allow_underscores && c == '_')
    }
}
