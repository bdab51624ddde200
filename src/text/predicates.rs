//! Line-classification predicates.
//!
//! The normalizer and the layout engine share two fragile business rules:
//! what counts as a numbered section title, and what counts as a placeholder
//! value ("no data captured"). Both live here as named predicates so locale
//! or template changes stay in one place.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for numbered section titles: digits, a period, at least one space
    static ref RE_SECTION_HEADER: Regex = Regex::new(r"^\d+\.\s").unwrap();
}

/// Check whether a line is a numbered section title ("3. Plan de traitement").
///
/// Purely syntactic: any line starting with `<digits>. ` qualifies, whether or
/// not it came out of the normalizer.
pub fn is_section_header_line(line: &str) -> bool {
    RE_SECTION_HEADER.is_match(line)
}

/// Split a `label : value` line at its first colon.
///
/// Returns `None` when the line contains no colon. Both halves are returned
/// untrimmed; callers decide how much whitespace matters.
pub fn split_label_value(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
}

/// Check whether a colon-line value means "no data captured".
///
/// A value is a placeholder when, after trimming, it is empty, a literal
/// ellipsis character, a run of two or more dots, or one of the caller's
/// extra tokens. The extra tokens exist because generative output never
/// settled on a single convention.
pub fn is_placeholder_value(value: &str, extra_tokens: &[String]) -> bool {
    let value = value.trim();
    if value.is_empty() || value == "…" {
        return true;
    }
    if value.len() >= 2 && value.chars().all(|c| c == '.') {
        return true;
    }
    extra_tokens.iter().any(|token| token == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_header_detection() {
        assert!(is_section_header_line("1. Informations patient"));
        assert!(is_section_header_line("12. Suivi"));
        assert!(!is_section_header_line("Informations patient"));
        assert!(!is_section_header_line("1.Informations")); // no space
        assert!(!is_section_header_line(" 1. Informations")); // leading space
        assert!(!is_section_header_line("a. Informations"));
    }

    #[test]
    fn test_split_label_value() {
        assert_eq!(split_label_value("Âge : 54 ans"), Some(("Âge ", " 54 ans")));
        assert_eq!(split_label_value("Durée : 10h : 30"), Some(("Durée ", " 10h : 30")));
        assert_eq!(split_label_value("pas de colonne"), None);
    }

    #[test]
    fn test_placeholder_values() {
        assert!(is_placeholder_value("", &[]));
        assert!(is_placeholder_value("   ", &[]));
        assert!(is_placeholder_value("…", &[]));
        assert!(is_placeholder_value("...", &[]));
        assert!(is_placeholder_value("..", &[]));
        assert!(is_placeholder_value(".....", &[]));
        assert!(!is_placeholder_value("54 ans", &[]));
        assert!(!is_placeholder_value(".", &[])); // a single dot is content
    }

    #[test]
    fn test_extra_placeholder_tokens() {
        let tokens = vec!["N/A".to_string()];
        assert!(is_placeholder_value("N/A", &tokens));
        assert!(!is_placeholder_value("N/A", &[]));
    }
}
