use crate::units::formatter::render_unit_number;
use crate::units::grammar::Grammar;
use crate::units::types::UnitMatch;
use log::{debug, warn};
use regex::Captures;
use std::borrow::Cow;

impl Grammar {
    /// Replace every top-level match in `text` with its readable form.
    ///
    /// Matches are found left to right and never overlap; everything between them is
    /// copied unchanged. Returns the input borrowed when nothing matched.
    pub fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.number.replace_all(text, |caps: &Captures<'_>| {
            let rendered = self.parse_unit_number(caps);
            debug!(
                "Rewrote {} bytes at offset {} as {}",
                caps[0].len(),
                caps.get(0).map_or(0, |m| m.start()),
                rendered
            );
            rendered
        })
    }

    /// [`Grammar::rewrite`] over raw bytes.
    ///
    /// Only the captured spans are decoded, so bytes outside a match pass through as they
    /// are, whatever their encoding.
    pub fn rewrite_bytes<'t>(&self, text: &'t [u8]) -> Cow<'t, [u8]> {
        self.number_bytes
            .replace_all(text, |caps: &regex::bytes::Captures<'_>| {
                let whole = caps.get(0).map_or(&[][..], |m| m.as_bytes());
                let value = caps.name("value").map(|m| std::str::from_utf8(m.as_bytes()));
                let unit = caps.name("unit").map(|m| std::str::from_utf8(m.as_bytes()));

                match (value, unit) {
                    (Some(Ok(value)), Some(Ok(unit))) => {
                        let rendered = render_unit_number(value, &self.parse_unit(unit));
                        debug!("Rewrote {} bytes as {}", whole.len(), rendered);
                        rendered.into_bytes()
                    }
                    _ => {
                        warn!("Leaving match of {} bytes unchanged: not UTF-8", whole.len());
                        whole.to_vec()
                    }
                }
            })
    }

    /// Every top-level match in `text`, parsed but not rewritten.
    pub fn matches(&self, text: &str) -> Vec<UnitMatch> {
        self.number
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(UnitMatch {
                    span: whole.range(),
                    value: caps["value"].to_string(),
                    unit: self.parse_unit(&caps["unit"]),
                })
            })
            .collect()
    }
}
