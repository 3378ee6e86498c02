//! Pattern fragment builders.
//!
//! Every function here is a pure string builder. Fragments nest freely and are only
//! compiled once the whole pattern has been assembled in [`crate::units::grammar`].

/// Optional whitespace between two tokens. `\s` covers newlines, so a template name
/// the compiler wrapped over several lines still matches.
pub const SPACE: &str = r"\s*";

/// Non-capturing group.
pub fn group(pattern: &str) -> String {
    format!("(?:{})", pattern)
}

/// Named capture group.
pub fn capture(name: &str, pattern: &str) -> String {
    format!("(?P<{}>{})", name, pattern)
}

/// Named capture when `named` is set, plain group otherwise.
///
/// A name may only appear once per compiled pattern, so fragments that get embedded
/// (and possibly repeated) inside a larger pattern are built unnamed.
pub fn slot(named: bool, name: &str, pattern: &str) -> String {
    if named {
        capture(name, pattern)
    } else {
        group(pattern)
    }
}

/// A comma with optional whitespace on either side.
pub fn comma() -> String {
    format!("{SPACE},{SPACE}")
}

/// One or more repetitions of `pattern` separated by commas.
///
/// `pattern` is written out twice, so it must not contain named captures.
pub fn comma_list(pattern: &str) -> String {
    format!("{}{}*", group(pattern), group(&format!("{}{}", comma(), pattern)))
}

/// Template argument list: `<`, the arguments, `>`, whitespace tolerated inside the brackets.
pub fn template_param(pattern: &str) -> String {
    format!("<{SPACE}{}{SPACE}>", pattern)
}

/// A literal template name followed by its argument list.
pub fn template(token: &str, args: &str) -> String {
    format!("{}{}", regex::escape(token), template_param(args))
}

/// Anchor `pattern` at the start of the haystack.
pub fn at_start(pattern: &str) -> String {
    format!(r"\A{}", group(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_comma_list_accepts_one_or_more() {
        let re = Regex::new(&format!("^{}$", comma_list("a"))).unwrap();
        assert!(re.is_match("a"));
        assert!(re.is_match("a,a"));
        assert!(re.is_match("a ,\n   a,a"));
        assert!(!re.is_match(""));
        assert!(!re.is_match("a,"));
    }

    #[test]
    fn test_template_escapes_token() {
        let re = Regex::new(&template("ns::f.g", "x")).unwrap();
        assert!(re.is_match("ns::f.g< x >"));
        assert!(!re.is_match("ns::fXg<x>"));
    }

    #[test]
    fn test_template_param_tolerates_line_breaks() {
        let re = Regex::new(&template_param("x")).unwrap();
        assert!(re.is_match("<\n    x\n>"));
    }

    #[test]
    fn test_slot_naming() {
        assert_eq!(slot(true, "exp", r"\d+"), r"(?P<exp>\d+)");
        assert_eq!(slot(false, "exp", r"\d+"), r"(?:\d+)");
    }

    #[test]
    fn test_at_start_is_prefix_match() {
        let re = Regex::new(&at_start("ab")).unwrap();
        assert!(re.is_match("abc"));
        assert!(!re.is_match("cab"));
    }
}
