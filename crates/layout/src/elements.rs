//! Output units from the flow builder.
//!
//! A unit is an ordered placement instruction consumed once, front to
//! back, by a rendering backend. Units are ephemeral: they are created
//! for a single render call and do not outlive it.

use crate::style::StyleRole;

#[derive(Debug, Clone, PartialEq)]
pub struct TextUnit {
    pub content: String,
    pub role: StyleRole,
}

/// An image already scaled to its final printed size, in points. The
/// backend centers it horizontally within the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUnit {
    pub src: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutUnit {
    Text(TextUnit),
    Image(ImageUnit),
    /// A fixed vertical gap, in points.
    Spacer(f32),
    /// Flush the current page and start a new one. Distinct from the
    /// implicit page advances the backend performs on overflow.
    PageBreak,
}

impl LayoutUnit {
    pub fn text(content: impl Into<String>, role: StyleRole) -> Self {
        LayoutUnit::Text(TextUnit {
            content: content.into(),
            role,
        })
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, LayoutUnit::PageBreak)
    }

    /// Returns a string identifier for the unit type, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutUnit::Text(_) => "text",
            LayoutUnit::Image(_) => "image",
            LayoutUnit::Spacer(_) => "spacer",
            LayoutUnit::PageBreak => "page-break",
        }
    }
}
