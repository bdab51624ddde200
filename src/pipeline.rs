//! End-to-end report rendering.
//!
//! Chains the pure passes the way the consultation pipeline uses them:
//! strip markup, normalize sections, paginate, serialize to PDF bytes.
//! Everything around this call (transcription, storage, email) stays in the
//! host application.

use crate::error::Result;
use crate::layout::layout_document;
use crate::normalizer::normalize_report;
use crate::text::strip_markup;
use crate::writer::{PdfRenderConfig, PdfRenderer};

/// Render a raw generated report straight to PDF bytes.
///
/// `title` falls back to the default report title when empty; `date_line` is
/// a pre-formatted string (see [`today_date_line`]) or `None` to omit the
/// date entirely.
///
/// # Examples
///
/// ```
/// use bilan_pdf::render_report;
///
/// let raw = "1. Informations patient\n**Nom** : Jean Dupont\nÂge : …";
/// let pdf = render_report("Bilan kinésithérapique", None, raw)?;
/// assert!(pdf.starts_with(b"%PDF-"));
/// # Ok::<(), bilan_pdf::Error>(())
/// ```
pub fn render_report(title: &str, date_line: Option<&str>, raw: &str) -> Result<Vec<u8>> {
    let cleaned = strip_markup(raw);
    let normalized = normalize_report(&cleaned);
    let pages = layout_document(title, date_line, &normalized);

    let config = PdfRenderConfig::default().with_title(if title.trim().is_empty() {
        crate::layout::DEFAULT_TITLE
    } else {
        title
    });
    PdfRenderer::with_config(config).render(&pages)
}

/// Format today's date as a ready-to-draw date line, e.g. `Date : 25/08/2026`.
///
/// The layout engine never computes time itself; hosts either call this or
/// pass their own pre-formatted string.
pub fn today_date_line() -> String {
    format!("Date : {}", chrono::Local::now().format("%d/%m/%Y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_date_line_shape() {
        let line = today_date_line();
        assert!(line.starts_with("Date : "));
        assert_eq!(line.len(), "Date : ".len() + 10);
    }
}
