use crate::units::types::{DimExp, SymbolKind};

/// Rendering of a unit with no dimensions
pub const SCALAR: &str = "[scalar]";

/// `symbol` alone for an exponent of 1, `symbol^exponent` otherwise
pub fn format_dim_exp(symbol: &str, exponent: i64) -> String {
    if exponent == 1 {
        symbol.to_string()
    } else {
        format!("{}^{}", symbol, exponent)
    }
}

/// Join one side of the fraction with `*`, parenthesized when it has several members.
/// Exponents are printed as magnitudes; the side carries the sign.
fn format_side(dims: &[&DimExp], symbol: SymbolKind) -> String {
    let joined = dims
        .iter()
        .map(|dim| format_dim_exp(dim.symbol(symbol), i64::from(dim.exponent).abs()))
        .collect::<Vec<_>>()
        .join("*");

    if dims.len() > 1 {
        format!("({})", joined)
    } else {
        joined
    }
}

/// Format a unit as `numerator` or `numerator/denominator`.
///
/// Positive exponents go in the numerator, negative ones in the denominator, each side
/// keeping the input order. Zero exponents are not printed. An empty numerator is `1`;
/// an empty unit is [`SCALAR`].
pub fn format_unit(units: &[DimExp], symbol: SymbolKind) -> String {
    if units.is_empty() {
        return SCALAR.to_string();
    }

    let positive: Vec<&DimExp> = units.iter().filter(|dim| dim.exponent > 0).collect();
    let negative: Vec<&DimExp> = units.iter().filter(|dim| dim.exponent < 0).collect();

    let mut result = if positive.is_empty() {
        "1".to_string()
    } else {
        format_side(&positive, symbol)
    };

    if !negative.is_empty() {
        result.push('/');
        result.push_str(&format_side(&negative, symbol));
    }

    result
}

/// `value(unit)`, with the unit printed by base-unit symbol
pub fn render_unit_number(value: &str, unit: &[DimExp]) -> String {
    format!("{}({})", value, format_unit(unit, SymbolKind::BaseUnit))
}
