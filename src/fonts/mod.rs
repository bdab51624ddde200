//! Font faces and metrics for text measurement.
//!
//! The layout engine only ever renders with two Base-14 faces, regular and
//! bold Helvetica, so no font files are parsed or embedded. Widths come from
//! the standard AFM tables in [`metrics`].

pub mod metrics;

pub use metrics::FontMetrics;

/// The two font faces used by report documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Helvetica regular
    Helvetica,
    /// Helvetica bold
    HelveticaBold,
}

impl FontFace {
    /// Select the face for a boldness flag.
    pub fn for_weight(bold: bool) -> Self {
        if bold {
            FontFace::HelveticaBold
        } else {
            FontFace::Helvetica
        }
    }

    /// PostScript name as used in PDF font dictionaries.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Width metrics for this face.
    pub fn metrics(&self) -> &'static FontMetrics {
        metrics::for_face(*self)
    }

    /// Measure a string at the given size, in points.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self.metrics().text_width(text, font_size)
    }
}
