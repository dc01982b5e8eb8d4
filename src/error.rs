//! Unified error type for render pipeline operations.

use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// The main error enum for all high-level operations within the engine.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Layout error: {0}")]
    Layout(LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

impl From<LayoutError> for PipelineError {
    fn from(e: LayoutError) -> Self {
        match e {
            // Bad geometry is a configuration problem, caught before any
            // document content is processed.
            LayoutError::InvalidGeometry { .. } => PipelineError::Config(e.to_string()),
            other => PipelineError::Layout(other),
        }
    }
}
