//! Paginated PDF rendering for chaptered documents.
//!
//! Content (`Document`, `Chapter`, paragraph and image blocks) flows
//! through the layout engine, which emits an ordered sequence of layout
//! units; a rendering backend serializes those units into pages. The
//! engine decides geometry, image fitting and forced page breaks; the
//! backend handles text re-flow and overflow pagination.
//!
//! ```no_run
//! use folio::{render, Chapter, Document, PageGeometry, Paragraph};
//!
//! let document = Document::new(
//!     "Travels",
//!     "A. Author",
//!     vec![Chapter::new("Setting Out", vec![Paragraph::new("We left at dawn.").into()])],
//! );
//! render(&document, PageGeometry::default(), "output/travels.pdf")?;
//! # Ok::<(), folio::PipelineError>(())
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{render, render_with_theme};

pub use folio_content::{Chapter, ContentBlock, Document, ImageBlock, Paragraph};
pub use folio_layout::{
    FlowBuilder, LayoutError, LayoutUnit, Margins, PageGeometry, PageSize, StyleRole, TextStyle,
    Theme,
};
pub use folio_render_core::{DocumentBackend, RenderError};
pub use folio_render_printpdf::PdfBackend;
