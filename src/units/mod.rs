// Rewriting of the unit library's mangled template names into readable units.
// The grammar is assembled from small pattern builders, compiled once per token set,
// and used both to find matches and to take them apart again.

pub mod builder;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod grammar;
pub mod parser;
pub mod processor;
pub mod types;


use std::borrow::Cow;

pub use error::UnitsError;
pub use formatter::{format_unit, SCALAR};
pub use grammar::{Grammar, Tokens, DEFAULT_GRAMMAR};
pub use types::{DimExp, SymbolKind, UnitMatch};

/// Rewrite `text` with the default grammar
pub fn rewrite(text: &str) -> Cow<'_, str> {
    DEFAULT_GRAMMAR.rewrite(text)
}

/// Rewrite raw bytes with the default grammar
pub fn rewrite_bytes(text: &[u8]) -> Cow<'_, [u8]> {
    DEFAULT_GRAMMAR.rewrite_bytes(text)
}

/// Top-level matches in `text` under the default grammar
pub fn matches(text: &str) -> Vec<UnitMatch> {
    DEFAULT_GRAMMAR.matches(text)
}
