//! Page layout engine.
//!
//! Turns a title, an optional date line, and newline-delimited body text into
//! fixed-size A4 pages of positioned text runs: greedy word-wrap against the
//! content width, bold emphasis for numbered section titles, a new page
//! whenever the cursor falls below the break threshold, and a one-time footer
//! notice on the final page.
//!
//! The engine holds no state between calls; each invocation builds its own
//! [`DocumentLayout`], so concurrent layouts never interact.

use serde::Serialize;

use crate::error::Result;
use crate::fonts::FontFace;
use crate::geometry::PageGeometry;
use crate::text::is_section_header_line;

/// Default document title when the caller supplies an empty one.
pub const DEFAULT_TITLE: &str = "Bilan kinésithérapique";

/// Footer notice drawn once on the last page.
pub const FOOTER_NOTICE: &str =
    "Généré automatiquement. Mentions : Consentement d'enregistrement recueilli.";

/// Label prefixed to a bare date value.
pub const DATE_LABEL: &str = "Date : ";

/// One positioned, styled unit of text for a downstream renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// Text content (never wider than the content width, except a single
    /// unbreakable word)
    pub text: String,
    /// Left edge, in points from the page's left side
    pub x: f32,
    /// Baseline, in points from the page's bottom
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    /// Whether the run uses the bold face
    pub bold: bool,
}

/// One physical output page with its ordered text runs.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Runs in drawing order
    pub runs: Vec<TextRun>,
}

impl Page {
    fn new(geometry: &PageGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            runs: Vec::new(),
        }
    }
}

/// Tunable layout parameters.
///
/// The defaults reproduce the report template exactly; changing them is only
/// expected in tests and host-specific documents.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Page dimensions and margin
    pub geometry: PageGeometry,
    /// Title font size
    pub title_size: f32,
    /// Section-title font size
    pub section_size: f32,
    /// Body font size
    pub body_size: f32,
    /// Footer font size
    pub footer_size: f32,
    /// Extra vertical space added to the font size when advancing past a line
    pub line_spacing: f32,
    /// Cursor drop for a blank body line
    pub blank_line_gap: f32,
    /// Cursor drop between the title block and the body
    pub title_gap: f32,
    /// Title used when the caller passes an empty one
    pub default_title: String,
    /// Label prefixed to the date line unless already present
    pub date_label: String,
    /// Notice drawn at the bottom margin of the last page
    pub footer_notice: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::a4(),
            title_size: 18.0,
            section_size: 13.0,
            body_size: 11.0,
            footer_size: 8.0,
            line_spacing: 10.0,
            blank_line_gap: 4.0,
            title_gap: 5.0,
            default_title: DEFAULT_TITLE.to_string(),
            date_label: DATE_LABEL.to_string(),
            footer_notice: FOOTER_NOTICE.to_string(),
        }
    }
}

impl LayoutOptions {
    /// Check that the options describe a usable page.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()
    }
}

/// Layout state for a single document: the pages built so far and the
/// vertical cursor on the current page.
#[derive(Debug)]
pub struct DocumentLayout {
    options: LayoutOptions,
    pages: Vec<Page>,
    y: f32,
}

impl DocumentLayout {
    /// Create an engine with default options.
    pub fn new() -> Self {
        let options = LayoutOptions::default();
        let y = options.geometry.top_y();
        Self {
            options,
            pages: Vec::new(),
            y,
        }
    }

    /// Create an engine with custom options, rejecting unusable geometry.
    pub fn with_options(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        let y = options.geometry.top_y();
        Ok(Self {
            options,
            pages: Vec::new(),
            y,
        })
    }

    /// Lay out a complete document and consume the engine.
    ///
    /// An empty `title` falls back to the default title. `date_line` is drawn
    /// under the title at body size when present; the engine never computes a
    /// date itself. The body may be normalizer output or any plain text.
    pub fn run(mut self, title: &str, date_line: Option<&str>, body: &str) -> Vec<Page> {
        self.pages.push(Page::new(&self.options.geometry));

        let title = if title.trim().is_empty() {
            self.options.default_title.clone()
        } else {
            title.to_string()
        };
        self.draw_wrapped(&title, self.options.title_size, true);

        if let Some(date_line) = date_line {
            let line = if date_line.starts_with(&self.options.date_label) {
                date_line.to_string()
            } else {
                format!("{}{}", self.options.date_label, date_line)
            };
            self.draw_wrapped(&line, self.options.body_size, false);
        }

        self.y -= self.options.title_gap;

        for raw_line in body.split('\n') {
            let line = raw_line.trim_end();
            if line.trim().is_empty() {
                // Blank lines only nudge the cursor; no page-break check.
                self.y -= self.options.blank_line_gap;
                continue;
            }
            let (size, bold) = if is_section_header_line(line) {
                (self.options.section_size, true)
            } else {
                (self.options.body_size, false)
            };
            self.draw_wrapped(line, size, bold);
        }

        self.draw_footer();

        log::debug!("laid out document on {} page(s)", self.pages.len());
        self.pages
    }

    /// Greedy word-wrap: accumulate words while the measured line fits the
    /// content width, flushing through [`Self::draw_line_raw`]. A single word
    /// wider than the content width is placed alone and allowed to overflow;
    /// words are never split.
    fn draw_wrapped(&mut self, text: &str, size: f32, bold: bool) {
        let metrics = FontFace::for_weight(bold).metrics();
        let max_width = self.options.geometry.content_width();

        let mut current = String::new();
        for word in text.split_whitespace() {
            let test = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if metrics.text_width(&test, size) > max_width && !current.is_empty() {
                let line = std::mem::replace(&mut current, word.to_string());
                self.draw_line_raw(line, size, bold);
            } else {
                current = test;
            }
        }
        if !current.is_empty() {
            self.draw_line_raw(current, size, bold);
        }
    }

    /// Draw one already-wrapped line at the cursor, allocating a new page
    /// first when the cursor sits below the break threshold.
    fn draw_line_raw(&mut self, text: String, size: f32, bold: bool) {
        if self.y < self.options.geometry.break_threshold() {
            self.new_page();
        }
        let x = self.options.geometry.margin;
        let y = self.y;
        self.current_page().runs.push(TextRun {
            text,
            x,
            y,
            font_size: size,
            bold,
        });
        self.y -= size + self.options.line_spacing;
    }

    /// Draw the footer notice at the bottom margin of the current page.
    fn draw_footer(&mut self) {
        let x = self.options.geometry.margin;
        let y = self.options.geometry.margin;
        let size = self.options.footer_size;
        let notice = self.options.footer_notice.clone();
        self.current_page().runs.push(TextRun {
            text: notice,
            x,
            y,
            font_size: size,
            bold: false,
        });
    }

    fn new_page(&mut self) {
        self.pages.push(Page::new(&self.options.geometry));
        self.y = self.options.geometry.top_y();
        log::trace!("allocated page {}", self.pages.len());
    }

    fn current_page(&mut self) -> &mut Page {
        self.pages
            .last_mut()
            .expect("a page is allocated before any drawing")
    }
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out a document with default options.
///
/// # Examples
///
/// ```
/// use bilan_pdf::layout_document;
///
/// let pages = layout_document("Bilan kinésithérapique", Some("01/09/2026"), "1. Suivi\nRDV : lundi");
/// assert_eq!(pages.len(), 1);
/// assert!(pages[0].runs.iter().any(|r| r.text == "Date : 01/09/2026"));
/// ```
pub fn layout_document(title: &str, date_line: Option<&str>, body: &str) -> Vec<Page> {
    DocumentLayout::new().run(title, date_line, body)
}
