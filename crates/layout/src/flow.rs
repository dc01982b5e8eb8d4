//! Flow building: walks the content tree and emits the ordered unit
//! sequence a rendering backend consumes.

use folio_content::{Chapter, ContentBlock, Document, ImageBlock};
use log::debug;

use crate::LayoutError;
use crate::elements::{ImageUnit, LayoutUnit};
use crate::fitter;
use crate::geometry::{PageGeometry, Size};
use crate::style::{StyleRole, Theme};

/// Translates a `Document` into layout units.
///
/// Building is deterministic: the same document and geometry always
/// yield the same sequence. The only side effect is reading image
/// headers to obtain intrinsic sizes; the content model is never
/// mutated, so independent documents may be built concurrently.
pub struct FlowBuilder {
    geometry: PageGeometry,
    theme: Theme,
}

impl FlowBuilder {
    pub fn new(geometry: PageGeometry, theme: Theme) -> Result<Self, LayoutError> {
        geometry.validate()?;
        Ok(FlowBuilder { geometry, theme })
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Builds the full unit sequence for `document`.
    ///
    /// Front matter (title and byline) always gets its own page, and
    /// every chapter starts on a fresh one. A trailing page break is
    /// dropped so the document never ends on a blank page; for a
    /// document with no chapters this strips the front-matter break too.
    pub fn build(&self, document: &Document) -> Result<Vec<LayoutUnit>, LayoutError> {
        let mut units = Vec::new();
        units.push(LayoutUnit::text(&document.title, StyleRole::Title));
        units.push(LayoutUnit::text(
            format!("By {}", document.author),
            StyleRole::Byline,
        ));
        units.push(LayoutUnit::PageBreak);

        for (index, chapter) in document.chapters.iter().enumerate() {
            self.chapter_units(chapter, index + 1, &mut units)?;
            units.push(LayoutUnit::PageBreak);
        }

        if let Some(LayoutUnit::PageBreak) = units.last() {
            units.pop();
        }

        debug!(
            "built {} layout units for '{}' ({} chapters)",
            units.len(),
            document.title,
            document.chapters.len()
        );
        Ok(units)
    }

    fn chapter_units(
        &self,
        chapter: &Chapter,
        number: usize,
        units: &mut Vec<LayoutUnit>,
    ) -> Result<(), LayoutError> {
        units.push(LayoutUnit::text(
            format!("Chapter {}: {}", number, chapter.title),
            StyleRole::ChapterHeading,
        ));
        for block in &chapter.blocks {
            match block {
                ContentBlock::Paragraph(paragraph) => {
                    units.push(LayoutUnit::text(&paragraph.text, StyleRole::Body));
                }
                ContentBlock::Image(image) if image.full_page => {
                    self.full_page_image(image, units)?;
                }
                ContentBlock::Image(image) => {
                    self.inline_image(image, units)?;
                }
            }
        }
        Ok(())
    }

    /// Inline images share the page with text, so they are capped at
    /// half the frame height.
    fn inline_image(
        &self,
        block: &ImageBlock,
        units: &mut Vec<LayoutUnit>,
    ) -> Result<(), LayoutError> {
        let bounds = Size::new(
            self.geometry.frame_width(),
            self.geometry.frame_height() / 2.0,
        );
        let scaled = self.scaled_image(block, bounds)?;
        units.push(LayoutUnit::Spacer(self.theme.image_space_before));
        units.push(LayoutUnit::Image(scaled));
        if let Some(caption) = &block.caption {
            units.push(LayoutUnit::text(caption, StyleRole::Caption));
        }
        units.push(LayoutUnit::Spacer(self.theme.image_space_after));
        Ok(())
    }

    /// A full-page image is fitted to the whole frame and bracketed by
    /// breaks so it never shares a page with surrounding content.
    fn full_page_image(
        &self,
        block: &ImageBlock,
        units: &mut Vec<LayoutUnit>,
    ) -> Result<(), LayoutError> {
        let bounds = Size::new(self.geometry.frame_width(), self.geometry.frame_height());
        let scaled = self.scaled_image(block, bounds)?;
        units.push(LayoutUnit::PageBreak);
        units.push(LayoutUnit::Image(scaled));
        if let Some(caption) = &block.caption {
            units.push(LayoutUnit::text(caption, StyleRole::Caption));
        }
        units.push(LayoutUnit::PageBreak);
        Ok(())
    }

    fn scaled_image(&self, block: &ImageBlock, bounds: Size) -> Result<ImageUnit, LayoutError> {
        let intrinsic = fitter::intrinsic_size(&block.src)?;
        let scaled = fitter::fit_within(intrinsic, bounds);
        Ok(ImageUnit {
            src: block.src.clone(),
            width: scaled.width,
            height: scaled.height,
        })
    }
}
