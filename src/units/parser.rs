use crate::units::formatter::render_unit_number;
use crate::units::grammar::Grammar;
use crate::units::types::DimExp;
use log::{trace, warn};
use regex::Captures;

impl Grammar {
    /// Decode a compile-time string into its characters.
    ///
    /// The text is split on the character-constant token and each fragment contributes the
    /// character it starts with. Fragments without one (the leading `compile_string<`, stray
    /// wrapper text) add nothing.
    pub fn parse_compile_string(&self, text: &str) -> String {
        let mut value = String::new();

        for fragment in text.split(self.tokens.integral_constant.as_str()) {
            match self.char_args.captures(fragment.trim()) {
                Some(caps) => value.push_str(&caps["char"]),
                None => trace!("No character constant in fragment {:?}", fragment),
            }
        }

        value
    }

    /// Decode every `dim_exp` found in a unit, in text order.
    ///
    /// Best effort: a unit body that doesn't conform yields fewer entries, never an error.
    pub fn parse_unit(&self, text: &str) -> Vec<DimExp> {
        self.dim_exp
            .captures_iter(text)
            .filter_map(|caps| {
                debug_assert!(self.is_dim_exp(&caps[0]));

                let exponent = match caps["exp"].parse::<i32>() {
                    Ok(exponent) => exponent,
                    Err(e) => {
                        warn!("Dropping dimension with exponent {:?}: {}", &caps["exp"], e);
                        return None;
                    }
                };

                Some(DimExp::new(
                    self.parse_compile_string(&caps["name"]),
                    self.parse_compile_string(&caps["base"]),
                    exponent,
                ))
            })
            .collect()
    }

    /// Replacement text for one top-level match: `value(unit)`.
    pub fn parse_unit_number(&self, caps: &Captures<'_>) -> String {
        let value = caps.name("value").map_or("", |m| m.as_str());
        let unit = caps
            .name("unit")
            .map(|m| self.parse_unit(m.as_str()))
            .unwrap_or_default();

        render_unit_number(value, &unit)
    }
}

#[cfg(test)]
mod tests {
    use crate::units::grammar::DEFAULT_GRAMMAR;
    use crate::units::tests::{compile_string, dim_exp, number, unit};
    use crate::units::types::DimExp;

    #[test]
    fn test_parse_compile_string() {
        assert_eq!(DEFAULT_GRAMMAR.parse_compile_string(&compile_string("length")), "length");
        assert_eq!(DEFAULT_GRAMMAR.parse_compile_string(&compile_string("m")), "m");
    }

    #[test]
    fn test_parse_compile_string_skips_junk() {
        let text = "units::compile_string<std::__1::integral_constant<char, 'k'>, \
                    std::__1::integral_constant<junk>, std::__1::integral_constant<char,\n 'g'>>";
        assert_eq!(DEFAULT_GRAMMAR.parse_compile_string(text), "kg");
        assert_eq!(DEFAULT_GRAMMAR.parse_compile_string("no constants here"), "");
    }

    #[test]
    fn test_parse_unit() {
        let text = unit(&[("length", "m", 1), ("time", "s", -2)]);
        assert_eq!(
            DEFAULT_GRAMMAR.parse_unit(&text),
            vec![DimExp::new("length", "m", 1), DimExp::new("time", "s", -2)]
        );
    }

    #[test]
    fn test_parse_unit_without_dimensions() {
        assert!(DEFAULT_GRAMMAR.parse_unit("units::unit<>").is_empty());
        assert!(DEFAULT_GRAMMAR.parse_unit("").is_empty());
    }

    #[test]
    fn test_parse_unit_drops_oversized_exponent() {
        let text = format!(
            "units::unit<{}, {}>",
            dim_exp("length", "m", 1),
            dim_exp("time", "s", 1).replace(">, 1>", ">, 99999999999>")
        );
        assert_eq!(
            DEFAULT_GRAMMAR.parse_unit(&text),
            vec![DimExp::new("length", "m", 1)]
        );
    }

    #[test]
    fn test_parse_unit_number() {
        let text = number("double", &[("time", "s", -1)]);
        let caps = DEFAULT_GRAMMAR.number.captures(&text).unwrap();
        assert_eq!(DEFAULT_GRAMMAR.parse_unit_number(&caps), "double(1/s)");
    }
}
