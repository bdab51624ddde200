//! Markdown emphasis stripping.
//!
//! Generative models wrap report text in Markdown even when asked not to.
//! This pass removes heading markers, bold/italic asterisks, and backtick
//! code syntax before the text reaches the normalizer or the layout engine.
//! It makes no judgment about content: a line without markup syntax passes
//! through unchanged.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for ATX heading markers at line start ("# ", "## ", ...)
    static ref RE_HEADING: Regex = Regex::new(r"(?m)^\s{0,3}#{1,6}\s+").unwrap();

    /// Regex for code fence lines (``` or ```lang), removed wholesale
    static ref RE_FENCE: Regex = Regex::new(r"(?m)^\s*`{3,}[^\n]*$").unwrap();

    /// Regex for **bold** spans
    static ref RE_BOLD: Regex = Regex::new(r"\*\*([^*]*)\*\*").unwrap();

    /// Regex for __bold__ spans
    static ref RE_BOLD_UNDERSCORE: Regex = Regex::new(r"__([^_]*)__").unwrap();

    /// Regex for *italic* spans (single asterisk, no inner asterisk)
    static ref RE_ITALIC: Regex = Regex::new(r"\*([^*\n]+)\*").unwrap();

    /// Regex for `inline code` spans
    static ref RE_CODE: Regex = Regex::new(r"`([^`\n]*)`").unwrap();
}

/// Remove common Markdown emphasis markup and normalize line endings.
///
/// Strips heading markers, `**bold**`/`__bold__`/`*italic*` emphasis, inline
/// backtick spans, and code fence lines. CRLF and bare CR line endings become
/// LF. Text containing no markup syntax is returned unchanged.
///
/// # Examples
///
/// ```
/// use bilan_pdf::strip_markup;
///
/// let cleaned = strip_markup("## 1. Informations patient\n**Nom** : Dupont");
/// assert_eq!(cleaned, "1. Informations patient\nNom : Dupont");
/// ```
pub fn strip_markup(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let text = RE_FENCE.replace_all(&text, "");
    let text = RE_HEADING.replace_all(&text, "");
    let text = RE_BOLD.replace_all(&text, "$1");
    let text = RE_BOLD_UNDERSCORE.replace_all(&text, "$1");
    let text = RE_ITALIC.replace_all(&text, "$1");
    let text = RE_CODE.replace_all(&text, "$1");

    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        let text = "1. Informations patient\nNom et prénom : Jean Dupont";
        assert_eq!(strip_markup(text), text);
    }

    #[test]
    fn test_heading_markers_removed() {
        assert_eq!(strip_markup("# Bilan kinésithérapique"), "Bilan kinésithérapique");
        assert_eq!(strip_markup("### 2. Motif de consultation"), "2. Motif de consultation");
    }

    #[test]
    fn test_bold_and_italic_removed() {
        assert_eq!(strip_markup("**Douleur** : *modérée*"), "Douleur : modérée");
        assert_eq!(strip_markup("__Âge__ : 54 ans"), "Âge : 54 ans");
    }

    #[test]
    fn test_code_fences_removed() {
        let text = "```json\n{\"a\": 1}\n```\nTexte";
        assert_eq!(strip_markup(text), "\n{\"a\": 1}\n\nTexte");
    }

    #[test]
    fn test_inline_code_unwrapped() {
        assert_eq!(strip_markup("valeur `EVA 6/10` mesurée"), "valeur EVA 6/10 mesurée");
    }

    #[test]
    fn test_line_endings_normalized() {
        assert_eq!(strip_markup("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_hash_inside_line_kept() {
        // Only line-leading heading markers are markup
        assert_eq!(strip_markup("référence #42"), "référence #42");
    }
}
