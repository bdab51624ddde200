//! Page geometry for document layout.
//!
//! All coordinates are in PDF points (1/72 inch) with the origin at the
//! bottom-left corner of the page, matching the PDF coordinate space.

use crate::error::{Error, Result};

/// A4 page width in points.
pub const A4_WIDTH: f32 = 595.28;

/// A4 page height in points.
pub const A4_HEIGHT: f32 = 841.89;

/// Default page margin in points, applied on all four sides.
pub const DEFAULT_MARGIN: f32 = 40.0;

/// Vertical space that must remain above the bottom margin before a line is
/// drawn; falling below this threshold forces a new page.
pub const PAGE_BREAK_RESERVE: f32 = 50.0;

/// Physical page dimensions and margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Margin in points on all sides
    pub margin: f32,
}

impl PageGeometry {
    /// A4 geometry with the default margin.
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Maximum width available for a line of text.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Cursor position at the top of a fresh page.
    pub fn top_y(&self) -> f32 {
        self.height - self.margin
    }

    /// Cursor threshold below which drawing must move to a new page.
    pub fn break_threshold(&self) -> f32 {
        self.margin + PAGE_BREAK_RESERVE
    }

    /// Check that the geometry leaves a usable content area.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return Err(Error::InvalidGeometry(
                "dimensions must be finite".to_string(),
            ));
        }
        if self.margin < 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "margin {} is negative",
                self.margin
            )));
        }
        if self.content_width() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "margin {} leaves no horizontal content area on a {}-point wide page",
                self.margin, self.width
            )));
        }
        if self.top_y() <= self.break_threshold() {
            return Err(Error::InvalidGeometry(format!(
                "margin {} leaves no vertical content area on a {}-point tall page",
                self.margin, self.height
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_constants() {
        let geom = PageGeometry::a4();
        assert_eq!(geom.width, 595.28);
        assert_eq!(geom.height, 841.89);
        assert_eq!(geom.content_width(), 595.28 - 80.0);
        assert_eq!(geom.top_y(), 841.89 - 40.0);
        assert_eq!(geom.break_threshold(), 90.0);
    }

    #[test]
    fn test_default_geometry_validates() {
        assert!(PageGeometry::a4().validate().is_ok());
    }

    #[test]
    fn test_oversized_margin_rejected() {
        let geom = PageGeometry {
            width: 100.0,
            height: 100.0,
            margin: 60.0,
        };
        assert!(geom.validate().is_err());
    }
}
