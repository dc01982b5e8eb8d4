use crate::LayoutError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Page dimensions in PDF points.
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
}

impl Margins {
    pub fn uniform(value: f32) -> Self {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }
}

/// Physical page description: size plus margins, in points.
///
/// The frame is the printable region left after subtracting the margins.
/// Geometry whose frame is not positive on both axes is a configuration
/// error and is rejected before any document is processed. Constructed
/// once per render and reused for every page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // 0.75in side margins, 0.9in top/bottom.
        PageGeometry {
            size: PageSize::A4,
            margins: Margins {
                top: 64.8,
                right: 54.0,
                bottom: 64.8,
                left: 54.0,
            },
        }
    }
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> Result<Self, LayoutError> {
        let geometry = PageGeometry { size, margins };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn page_width(&self) -> f32 {
        self.size.dimensions_pt().0
    }

    pub fn page_height(&self) -> f32 {
        self.size.dimensions_pt().1
    }

    pub fn frame_width(&self) -> f32 {
        self.page_width() - self.margins.left - self.margins.right
    }

    pub fn frame_height(&self) -> f32 {
        self.page_height() - self.margins.top - self.margins.bottom
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let (page_width, page_height) = self.size.dimensions_pt();
        let frame_width = self.frame_width();
        let frame_height = self.frame_height();
        let finite = page_width.is_finite()
            && page_height.is_finite()
            && frame_width.is_finite()
            && frame_height.is_finite();
        if !finite || frame_width <= 0.0 || frame_height <= 0.0 {
            return Err(LayoutError::InvalidGeometry {
                page_width,
                page_height,
                frame_width,
                frame_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_page_minus_margins() {
        let geometry = PageGeometry::new(
            PageSize::Custom {
                width: 400.0,
                height: 600.0,
            },
            Margins {
                top: 10.0,
                right: 20.0,
                bottom: 30.0,
                left: 40.0,
            },
        )
        .unwrap();

        assert_eq!(geometry.frame_width(), 400.0 - 40.0 - 20.0);
        assert_eq!(geometry.frame_height(), 600.0 - 10.0 - 30.0);
    }

    #[test]
    fn default_geometry_is_valid() {
        let geometry = PageGeometry::default();
        assert!(geometry.validate().is_ok());
        assert!(geometry.frame_width() > 0.0);
        assert!(geometry.frame_height() > 0.0);
    }

    #[test]
    fn oversized_margins_are_rejected() {
        let result = PageGeometry::new(
            PageSize::Custom {
                width: 100.0,
                height: 100.0,
            },
            Margins::uniform(50.0),
        );
        assert!(matches!(result, Err(LayoutError::InvalidGeometry { .. })));
    }

    #[test]
    fn zero_page_dimension_is_rejected() {
        let result = PageGeometry::new(
            PageSize::Custom {
                width: 0.0,
                height: 600.0,
            },
            Margins::default(),
        );
        assert!(matches!(result, Err(LayoutError::InvalidGeometry { .. })));
    }

    #[test]
    fn standard_page_sizes_in_points() {
        assert_eq!(PageSize::A4.dimensions_pt(), (595.28, 841.89));
        assert_eq!(PageSize::Letter.dimensions_pt(), (612.0, 792.0));
        assert_eq!(PageSize::Legal.dimensions_pt(), (612.0, 1008.0));
    }
}
