//! Render entry point wiring the flow builder to a PDF backend.

use std::fs;
use std::path::{Path, PathBuf};

use folio_content::Document;
use folio_layout::{FlowBuilder, PageGeometry, Theme};
use folio_render_core::DocumentBackend;
use folio_render_printpdf::PdfBackend;
use log::{debug, info};
use tempfile::NamedTempFile;

use crate::error::PipelineError;

/// Renders `document` to a paginated PDF at `destination` using the
/// default theme.
pub fn render(
    document: &Document,
    geometry: PageGeometry,
    destination: impl AsRef<Path>,
) -> Result<PathBuf, PipelineError> {
    render_with_theme(document, geometry, Theme::default(), destination)
}

/// Renders `document` with an explicit theme.
///
/// Parent directories of `destination` are created if absent and an
/// existing file there is overwritten. The backend writes into a
/// temporary file beside the destination which is moved into place only
/// after it finishes, so a failed render never leaves a partial or
/// zero-byte file behind.
pub fn render_with_theme(
    document: &Document,
    geometry: PageGeometry,
    theme: Theme,
    destination: impl AsRef<Path>,
) -> Result<PathBuf, PipelineError> {
    let destination = destination.as_ref().to_path_buf();

    let builder = FlowBuilder::new(geometry, theme.clone())?;
    let units = builder.build(document)?;
    debug!(
        "document '{}' produced {} layout units",
        document.title,
        units.len()
    );

    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let backend = PdfBackend::new(theme);
    let mut staged = NamedTempFile::new_in(&parent)?;
    backend.serialize(&units, &geometry, &mut staged)?;
    staged
        .persist(&destination)
        .map_err(|e| PipelineError::Io(e.error))?;

    info!(
        "rendered '{}' to {}",
        document.title,
        destination.display()
    );
    Ok(destination)
}
