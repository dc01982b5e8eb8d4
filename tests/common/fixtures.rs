use folio::{Chapter, Document, Paragraph};
use std::path::Path;

/// Writes a small RGB PNG and returns its path as a string.
pub fn sample_png(dir: &Path, name: &str, width: u32, height: u32) -> String {
    let path = dir.join(name);
    image::RgbImage::new(width, height).save(&path).unwrap();
    path.to_str().unwrap().to_string()
}

/// A document with the given chapters, each holding `paragraphs` short
/// body paragraphs.
pub fn text_document(chapters: &[(&str, usize)]) -> Document {
    Document::new(
        "Sample Book",
        "Test Author",
        chapters
            .iter()
            .map(|(title, paragraphs)| {
                Chapter::new(
                    *title,
                    (0..*paragraphs)
                        .map(|i| Paragraph::new(format!("Paragraph number {}.", i)).into())
                        .collect(),
                )
            })
            .collect(),
    )
}
