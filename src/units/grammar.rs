use crate::units::builder::{at_start, capture, comma, comma_list, slot, template, template_param};
use crate::units::error::UnitsError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Grammar for the libc++ spelling of the unit library's type names.
    pub static ref DEFAULT_GRAMMAR: Grammar =
        Grammar::new(&Tokens::default()).expect("default unit grammar must compile");
}

/// Literal template names of the encoding, innermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// Wrapper of a single character constant
    pub integral_constant: String,
    /// First argument of a character constant
    pub char_type: String,
    pub compile_string: String,
    pub dimension: String,
    pub dim_exp: String,
    pub unit: String,
    pub unit_number: String,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            integral_constant: "std::__1::integral_constant".to_string(),
            char_type: "char".to_string(),
            compile_string: "units::compile_string".to_string(),
            dimension: "units::dimension".to_string(),
            dim_exp: "units::unit_detail::dim_exp".to_string(),
            unit: "units::unit".to_string(),
            unit_number: "units::unit_number".to_string(),
        }
    }
}

impl Tokens {
    /// `char, 'c'`
    fn char_constant_args(&self, named: bool) -> String {
        format!(
            "{}{}'{}'",
            regex::escape(&self.char_type),
            comma(),
            slot(named, "char", r"\w")
        )
    }

    /// `std::__1::integral_constant<char, 'c'>`
    pub fn char_constant(&self, named: bool) -> String {
        template(&self.integral_constant, &self.char_constant_args(named))
    }

    /// `units::compile_string<c, c, ...>`
    pub fn compile_string(&self) -> String {
        template(&self.compile_string, &comma_list(&self.char_constant(false)))
    }

    /// `units::dimension<name, base>`
    pub fn dimension(&self, named: bool) -> String {
        let cstring = self.compile_string();
        template(
            &self.dimension,
            &format!(
                "{}{}{}",
                slot(named, "name", &cstring),
                comma(),
                slot(named, "base", &cstring)
            ),
        )
    }

    /// `units::unit_detail::dim_exp<dimension, exp>`
    pub fn dim_exp(&self, named: bool) -> String {
        template(
            &self.dim_exp,
            &format!(
                "{}{}{}",
                self.dimension(named),
                comma(),
                slot(named, "exp", r"-?\d+")
            ),
        )
    }

    /// `units::unit<dim_exp, dim_exp, ...>`
    pub fn unit(&self) -> String {
        template(&self.unit, &comma_list(&self.dim_exp(false)))
    }

    /// `units::unit_number<value, unit>`, capturing `value` and `unit`.
    pub fn unit_number(&self) -> String {
        template(
            &self.unit_number,
            &format!(
                "{}{}{}",
                capture("value", r"[\w.]+"),
                comma(),
                capture("unit", &self.unit())
            ),
        )
    }
}

/// The compiled patterns for one token set.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub(crate) tokens: Tokens,
    /// Top-level `unit_number` pattern, captures `value` and `unit`
    pub(crate) number: Regex,
    /// Same pattern over raw bytes, for input that is not valid UTF-8 throughout
    pub(crate) number_bytes: regex::bytes::Regex,
    /// `dim_exp` pattern, captures `name`, `base` and `exp`
    pub(crate) dim_exp: Regex,
    /// Argument list of one character constant at the start of a fragment, captures `char`
    pub(crate) char_args: Regex,
    pub(crate) compile_string_start: Regex,
    pub(crate) dim_exp_start: Regex,
    pub(crate) unit_start: Regex,
}

impl Grammar {
    /// Compile every pattern of the grammar for `tokens`.
    pub fn new(tokens: &Tokens) -> Result<Self, UnitsError> {
        Ok(Self {
            tokens: tokens.clone(),
            number: compile(&tokens.unit_number())?,
            number_bytes: regex::bytes::Regex::new(&tokens.unit_number())
                .map_err(UnitsError::Pattern)?,
            dim_exp: compile(&tokens.dim_exp(true))?,
            char_args: compile(&at_start(&template_param(&tokens.char_constant_args(true))))?,
            compile_string_start: compile(&at_start(&tokens.compile_string()))?,
            dim_exp_start: compile(&at_start(&tokens.dim_exp(false)))?,
            unit_start: compile(&at_start(&tokens.unit()))?,
        })
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }
}

impl Default for Grammar {
    fn default() -> Self {
        DEFAULT_GRAMMAR.clone()
    }
}

fn compile(pattern: &str) -> Result<Regex, UnitsError> {
    Regex::new(pattern).map_err(UnitsError::Pattern)
}
