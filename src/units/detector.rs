use crate::units::grammar::Grammar;

/// Prefix checks against the individual grammar levels.
/// Each is true when the pattern matches at the start of `text`; trailing text is ignored.
impl Grammar {
    pub fn is_compile_string(&self, text: &str) -> bool {
        self.compile_string_start.is_match(text)
    }

    pub fn is_dim_exp(&self, text: &str) -> bool {
        self.dim_exp_start.is_match(text)
    }

    pub fn is_unit(&self, text: &str) -> bool {
        self.unit_start.is_match(text)
    }
}
