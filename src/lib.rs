//! # bilan_pdf
//!
//! Clinical report engine for consultation documentation pipelines.
//!
//! A consultation recording is transcribed and summarized into a structured
//! report by external services; this crate owns the deterministic tail of
//! that pipeline:
//!
//! - **Normalization**: clean a raw, possibly malformed numbered-section
//!   report into a gap-free layout — placeholder lines and empty sections
//!   removed, surviving sections renumbered from 1 ([`normalize_report`]).
//! - **Pagination**: lay out a title, optional date line, and body text as
//!   fixed-size A4 pages of positioned, styled text runs with word-wrap and
//!   automatic page breaks ([`layout_document`]).
//! - **Rendering**: serialize those pages into a complete PDF document with
//!   standard Helvetica faces and WinAnsi text ([`PdfRenderer`]).
//!
//! Supporting utilities strip Markdown emphasis from model output
//! ([`strip_markup`]) and split a combined JSON + prose model response
//! ([`split_model_output`]).
//!
//! The normalization and layout passes are pure, synchronous, and reentrant:
//! no I/O, no shared state, safe to call concurrently once per request.
//!
//! ## Quick start
//!
//! ```
//! use bilan_pdf::{normalize_report, layout_document, PdfRenderer};
//!
//! let raw = "Bilan kinésithérapique\n\n1. Informations patient\n\
//!            Nom et prénom : Jean Dupont\nÂge : …\n\n2. Motif de consultation\n";
//! let clean = normalize_report(raw);
//! assert_eq!(clean, "Bilan kinésithérapique\n\n1. Informations patient\nNom et prénom : Jean Dupont");
//!
//! let pages = layout_document("Bilan kinésithérapique", Some("25/08/2026"), &clean);
//! let pdf = PdfRenderer::new().render(&pages)?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok::<(), bilan_pdf::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometry and fonts
pub mod fonts;
pub mod geometry;

// Core passes
pub mod layout;
pub mod normalizer;
pub mod text;

// PDF output
pub mod writer;

// End-to-end convenience
pub mod pipeline;

pub use error::{Error, Result};
pub use layout::{layout_document, DocumentLayout, LayoutOptions, Page, TextRun};
pub use normalizer::{normalize_report, normalize_report_with, NormalizerConfig};
pub use pipeline::{render_report, today_date_line};
pub use text::{split_model_output, strip_markup};
pub use writer::{PdfRenderConfig, PdfRenderer};
