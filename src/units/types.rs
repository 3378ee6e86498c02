use crate::units::formatter::{format_dim_exp, render_unit_number};
use std::fmt;
use std::ops::Range;

/// One dimension of a unit raised to an integer power
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimExp {
    /// Dimension name (e.g., "length")
    pub name: String,
    /// Base unit symbol (e.g., "m")
    pub base_unit: String,
    pub exponent: i32,
}

impl DimExp {
    pub fn new(name: impl Into<String>, base_unit: impl Into<String>, exponent: i32) -> Self {
        Self {
            name: name.into(),
            base_unit: base_unit.into(),
            exponent,
        }
    }

    pub fn symbol(&self, kind: SymbolKind) -> &str {
        match kind {
            SymbolKind::Name => &self.name,
            SymbolKind::BaseUnit => &self.base_unit,
        }
    }
}

impl fmt::Display for DimExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_dim_exp(&self.base_unit, i64::from(self.exponent)))
    }
}

/// Which field of a [`DimExp`] gets printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolKind {
    Name,
    #[default]
    BaseUnit,
}

/// One top-level match found in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMatch {
    /// Byte range of the whole match in the input
    pub span: Range<usize>,
    /// Runtime value representation (e.g., "double")
    pub value: String,
    pub unit: Vec<DimExp>,
}

impl UnitMatch {
    /// The text that replaces this match in the rewritten output
    pub fn render(&self) -> String {
        render_unit_number(&self.value, &self.unit)
    }
}
