//! Report text normalization.
//!
//! The generative service nominally follows a fixed numbered-section
//! template, but sections arrive incomplete, lines carry placeholder values,
//! and numbering has gaps once the model skips a section. This pass turns
//! that raw text into a minimal well-formed report: placeholder lines and
//! empty sections are dropped, survivors are renumbered contiguously from 1.
//!
//! Normalization is pure and idempotent; a well-formed report passes through
//! unchanged.

use lazy_static::lazy_static;
use regex::Regex;

use crate::text::{is_placeholder_value, is_section_header_line, split_label_value};

/// Fixed report title recognized as the optional header line.
pub const REPORT_TITLE: &str = "Bilan kinésithérapique";

lazy_static! {
    /// Regex for the numeric prefix replaced during renumbering
    static ref RE_SECTION_NUMBER: Regex = Regex::new(r"^\d+\.\s+").unwrap();
}

/// Configuration for [`normalize_report_with`].
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Header line captured when it is the first non-empty line,
    /// compared case-insensitively
    pub header_token: String,
    /// Extra placeholder tokens beyond the built-in empty/ellipsis/dot-run
    /// detection (the source template never settled on one convention)
    pub placeholder_tokens: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            header_token: REPORT_TITLE.to_string(),
            placeholder_tokens: Vec::new(),
        }
    }
}

/// A titled group of report lines, complete once at least one item survived.
#[derive(Debug, Clone)]
struct Section {
    title: String,
    items: Vec<String>,
}

/// Accumulator for the section currently being scanned.
///
/// Exactly one builder is open at a time; it is finished on every title
/// transition and at end of input, and yields a [`Section`] only when at
/// least one item was attributed to it.
#[derive(Debug)]
struct SectionBuilder {
    title: String,
    items: Vec<String>,
}

impl SectionBuilder {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    fn push_item(&mut self, line: &str) {
        self.items.push(line.to_string());
    }

    fn finish(self) -> Option<Section> {
        if self.items.is_empty() {
            log::trace!("dropping empty section {:?}", self.title);
            return None;
        }
        Some(Section {
            title: self.title,
            items: self.items,
        })
    }
}

/// Normalize a raw report with the default configuration.
///
/// See [`normalize_report_with`] for the algorithm. This is the entry point
/// used by the standard pipeline.
///
/// # Examples
///
/// ```
/// use bilan_pdf::normalize_report;
///
/// let raw = "Bilan kinésithérapique\n\n3. Motif de consultation\nRaison : lombalgie\nExamens : …";
/// let clean = normalize_report(raw);
/// assert_eq!(clean, "Bilan kinésithérapique\n\n1. Motif de consultation\nRaison : lombalgie");
/// ```
pub fn normalize_report(raw: &str) -> String {
    normalize_report_with(raw, &NormalizerConfig::default())
}

/// Normalize a raw report string into a contiguous, gap-free section layout.
///
/// The scan works line by line:
/// - the first non-empty line is captured as the header when it equals the
///   configured title token (case-insensitive),
/// - a `<digits>. ` line opens a new section, closing the previous one,
/// - other non-blank lines become items of the open section, unless their
///   colon value is a placeholder,
/// - lines outside any section are discarded silently.
///
/// Sections that end up with zero items are removed, and the survivors are
/// renumbered `1..=N` in their original order. Malformed input degrades to
/// fewer sections; no error is ever raised.
pub fn normalize_report_with(raw: &str, config: &NormalizerConfig) -> String {
    let mut header: Option<String> = None;
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<SectionBuilder> = None;
    let mut header_checked = false;
    let mut dropped_lines = 0usize;

    for line in raw.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Only the first non-empty line can be the header.
        if !header_checked {
            header_checked = true;
            if line.to_lowercase() == config.header_token.to_lowercase() {
                header = Some(line.to_string());
                continue;
            }
        }

        if is_section_header_line(line) {
            if let Some(builder) = current.take() {
                sections.extend(builder.finish());
            }
            current = Some(SectionBuilder::new(line));
            continue;
        }

        match current.as_mut() {
            Some(builder) => {
                let placeholder = match split_label_value(line) {
                    Some((_, value)) => is_placeholder_value(value, &config.placeholder_tokens),
                    None => false,
                };
                if placeholder {
                    log::trace!("dropping placeholder line {:?}", line);
                    dropped_lines += 1;
                } else {
                    builder.push_item(line);
                }
            }
            // No section open: the line belongs to nothing.
            None => dropped_lines += 1,
        }
    }

    if let Some(builder) = current.take() {
        sections.extend(builder.finish());
    }

    log::debug!(
        "normalized report: {} sections kept, {} lines dropped",
        sections.len(),
        dropped_lines
    );

    assemble(header, &sections)
}

/// Reassemble the output text: header, then renumbered sections separated by
/// exactly one blank line, with no trailing blank.
fn assemble(header: Option<String>, sections: &[Section]) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(header) = header {
        lines.push(header);
        if !sections.is_empty() {
            lines.push(String::new());
        }
    }

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(renumber_title(&section.title, index + 1));
        lines.extend(section.items.iter().cloned());
    }

    lines.join("\n")
}

/// Replace a title's leading `<digits>. ` with the given section number.
fn renumber_title(title: &str, number: usize) -> String {
    let rest = RE_SECTION_NUMBER.replace(title, "");
    format!("{}. {}", number, rest)
}
