use crate::error::RenderError;
use folio_layout::{LayoutUnit, PageGeometry};
use std::io::Write;

/// A trait for document backends, abstracting the page-description
/// format the unit sequence is serialized into.
///
/// A backend consumes the sequence once, front to back. It re-flows text
/// units within the frame width using each unit's style role, treats
/// `PageBreak` as "flush the current page and start a new one", and
/// places image units at their pre-computed size, centered horizontally
/// within the frame. Implicit page advances caused by overflow are
/// entirely the backend's concern; the layout engine only ever reasons
/// about forced breaks.
pub trait DocumentBackend {
    fn serialize<W: Write>(
        &self,
        units: &[LayoutUnit],
        geometry: &PageGeometry,
        writer: &mut W,
    ) -> Result<(), RenderError>;
}
