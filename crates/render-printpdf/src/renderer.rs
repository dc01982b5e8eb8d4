use std::collections::HashMap;
use std::fs;
use std::io::Write;

use folio_layout::{
    FontSlant, FontWeight, ImageUnit, LayoutUnit, PageGeometry, TextAlign, TextStyle, TextUnit,
    Theme,
};
use folio_render_core::{DocumentBackend, RenderError};
use log::debug;
use printpdf::image::RawImage;
use printpdf::text::TextItem;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{
    BuiltinFont, Layer, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextMatrix, XObjectId,
};

use crate::text::wrap_text;

/// A PDF backend using the `printpdf` library with its builtin Helvetica
/// family.
///
/// Each referenced image is decoded once and registered as a shared
/// XObject; units then only reference it by id.
pub struct PdfBackend {
    theme: Theme,
}

impl PdfBackend {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl DocumentBackend for PdfBackend {
    fn serialize<W: Write>(
        &self,
        units: &[LayoutUnit],
        geometry: &PageGeometry,
        writer: &mut W,
    ) -> Result<(), RenderError> {
        let mut composer = PageComposer::new(&self.theme, geometry);
        composer.load_images(units)?;

        for unit in units {
            match unit {
                LayoutUnit::Text(text) => composer.write_text(text),
                LayoutUnit::Image(image) => composer.place_image(image)?,
                LayoutUnit::Spacer(height) => composer.add_space(*height),
                LayoutUnit::PageBreak => composer.flush_page(),
            }
        }

        let bytes = composer.finish()?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

/// Accumulates drawing ops for the current page and tracks the vertical
/// cursor, translating top-down layout coordinates into the PDF's
/// bottom-up coordinate space when ops are emitted.
struct PageComposer<'a> {
    theme: &'a Theme,
    geometry: &'a PageGeometry,
    document: PdfDocument,
    images: HashMap<String, (XObjectId, (u32, u32))>,
    ops: Vec<Op>,
    cursor_y: f32,
    page_index: usize,
}

impl<'a> PageComposer<'a> {
    fn new(theme: &'a Theme, geometry: &'a PageGeometry) -> Self {
        PageComposer {
            theme,
            geometry,
            document: PdfDocument::new("Document"),
            images: HashMap::new(),
            ops: Vec::new(),
            cursor_y: geometry.margins.top,
            page_index: 0,
        }
    }

    fn page_height(&self) -> f32 {
        self.geometry.page_height()
    }

    fn page_bottom(&self) -> f32 {
        self.page_height() - self.geometry.margins.bottom
    }

    /// Decodes every image referenced by the unit sequence and registers
    /// it as a document XObject, keyed by source path.
    fn load_images(&mut self, units: &[LayoutUnit]) -> Result<(), RenderError> {
        for unit in units {
            let LayoutUnit::Image(image) = unit else {
                continue;
            };
            if self.images.contains_key(&image.src) {
                continue;
            }
            let bytes = fs::read(&image.src).map_err(|e| {
                RenderError::Image(format!("failed to read '{}': {}", image.src, e))
            })?;
            let mut warnings = Vec::new();
            let raw_image = RawImage::decode_from_bytes(&bytes, &mut warnings).map_err(|e| {
                RenderError::Image(format!("failed to decode '{}': {}", image.src, e))
            })?;
            let dims = (raw_image.width as u32, raw_image.height as u32);
            let xobj_id = XObjectId::new();
            self.document
                .resources
                .xobjects
                .map
                .insert(xobj_id.clone(), XObject::Image(raw_image));
            self.images.insert(image.src.clone(), (xobj_id, dims));
        }
        Ok(())
    }

    /// Starts a new page if `needed` points of vertical space are not
    /// left above the bottom margin. A pristine page is never flushed,
    /// so oversized content still gets placed.
    fn ensure_room(&mut self, needed: f32) {
        if self.cursor_y + needed > self.page_bottom() && !self.ops.is_empty() {
            self.flush_page();
        }
    }

    fn write_text(&mut self, unit: &TextUnit) {
        let style = *self.theme.text_style(unit.role);
        let lines = wrap_text(&unit.content, style.font_size, self.geometry.frame_width());
        if lines.is_empty() {
            // An empty text unit still occupies one blank line.
            self.ensure_room(style.line_height);
            self.cursor_y += style.line_height + style.space_after;
            return;
        }

        for line in lines {
            self.ensure_room(style.line_height);
            if line.is_empty() {
                self.cursor_y += style.line_height;
                continue;
            }
            let font = builtin_font(&style);
            let x = self.line_x(&line, &style);
            let baseline_y = self.page_height() - self.cursor_y - style.font_size;
            self.ops.push(Op::StartTextSection);
            self.ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(style.font_size),
                font: font.clone(),
            });
            self.ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Pt(x), Pt(baseline_y)),
            });
            self.ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line)],
                font,
            });
            self.ops.push(Op::EndTextSection);
            self.cursor_y += style.line_height;
        }
        self.cursor_y += style.space_after;
    }

    fn line_x(&self, line: &str, style: &TextStyle) -> f32 {
        let left = self.geometry.margins.left;
        if style.align == TextAlign::Left {
            return left;
        }
        let char_width = style.font_size * 0.6;
        let line_width = line.len() as f32 * char_width;
        let frame_width = self.geometry.frame_width();
        match style.align {
            TextAlign::Right => left + (frame_width - line_width).max(0.0),
            _ => left + ((frame_width - line_width) / 2.0).max(0.0),
        }
    }

    fn place_image(&mut self, unit: &ImageUnit) -> Result<(), RenderError> {
        let (xobj_id, (img_w, img_h)) = self
            .images
            .get(&unit.src)
            .cloned()
            .ok_or_else(|| RenderError::Image(format!("image not loaded: {}", unit.src)))?;

        self.ensure_room(unit.height);
        let x = self.geometry.margins.left + (self.geometry.frame_width() - unit.width) / 2.0;
        let y = self.page_height() - (self.cursor_y + unit.height);
        let transform = XObjectTransform {
            translate_x: Some(Pt(x)),
            translate_y: Some(Pt(y)),
            scale_x: Some(unit.width / img_w as f32),
            scale_y: Some(unit.height / img_h as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        self.ops.push(Op::UseXobject {
            id: xobj_id,
            transform,
        });
        self.cursor_y += unit.height;
        Ok(())
    }

    fn add_space(&mut self, height: f32) {
        // A spacer at the top of a fresh page is dropped.
        if self.ops.is_empty() {
            return;
        }
        self.cursor_y += height;
    }

    fn flush_page(&mut self) {
        let layer_name = format!("Page {} Layer 1", self.page_index + 1);
        let layer_id = self.document.add_layer(&Layer::new(layer_name.as_str()));
        let mut ops = vec![Op::BeginLayer { layer_id }];
        ops.append(&mut self.ops);

        let (width, height) = self.geometry.size.dimensions_pt();
        self.document
            .pages
            .push(PdfPage::new(Pt(width).into(), Pt(height).into(), ops));
        self.cursor_y = self.geometry.margins.top;
        self.page_index += 1;
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        // Flush the last page; an empty document still gets one page.
        if !self.ops.is_empty() || self.document.pages.is_empty() {
            self.flush_page();
        }
        let mut warnings = Vec::new();
        let bytes = self.document.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!("pdf writer reported {} warnings", warnings.len());
        }
        Ok(bytes)
    }
}

fn builtin_font(style: &TextStyle) -> BuiltinFont {
    match (style.weight, style.slant) {
        (FontWeight::Bold, FontSlant::Italic) => BuiltinFont::HelveticaBoldOblique,
        (FontWeight::Bold, FontSlant::Normal) => BuiltinFont::HelveticaBold,
        (FontWeight::Regular, FontSlant::Italic) => BuiltinFont::HelveticaOblique,
        (FontWeight::Regular, FontSlant::Normal) => BuiltinFont::Helvetica,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_layout::StyleRole;

    fn body(text: &str) -> TextUnit {
        TextUnit {
            content: text.to_string(),
            role: StyleRole::Body,
        }
    }

    #[test]
    fn serializes_text_units_to_a_pdf() {
        let backend = PdfBackend::default();
        let units = vec![
            LayoutUnit::text("Title", StyleRole::Title),
            LayoutUnit::PageBreak,
            LayoutUnit::text("Body text.", StyleRole::Body),
        ];
        let mut out = Vec::new();
        backend
            .serialize(&units, &PageGeometry::default(), &mut out)
            .unwrap();

        assert!(out.starts_with(b"%PDF"));
    }

    #[test]
    fn page_break_flushes_the_current_page() {
        let theme = Theme::default();
        let geometry = PageGeometry::default();
        let mut composer = PageComposer::new(&theme, &geometry);

        composer.write_text(&body("first page"));
        composer.flush_page();
        composer.write_text(&body("second page"));

        assert_eq!(composer.document.pages.len(), 1);
        assert!(!composer.ops.is_empty());
    }

    #[test]
    fn overflowing_text_advances_the_page_implicitly() {
        let theme = Theme::default();
        let geometry = PageGeometry::default();
        let mut composer = PageComposer::new(&theme, &geometry);

        // Far more lines than fit within one A4 frame.
        for _ in 0..120 {
            composer.write_text(&body("line"));
        }

        assert!(!composer.document.pages.is_empty());
    }

    #[test]
    fn spacer_at_top_of_fresh_page_is_dropped() {
        let theme = Theme::default();
        let geometry = PageGeometry::default();
        let mut composer = PageComposer::new(&theme, &geometry);

        composer.add_space(20.0);
        assert_eq!(composer.cursor_y, geometry.margins.top);

        composer.write_text(&body("content"));
        let before = composer.cursor_y;
        composer.add_space(20.0);
        assert_eq!(composer.cursor_y, before + 20.0);
    }

    #[test]
    fn empty_document_still_produces_one_page() {
        let backend = PdfBackend::default();
        let mut out = Vec::new();
        backend
            .serialize(&[], &PageGeometry::default(), &mut out)
            .unwrap();
        assert!(out.starts_with(b"%PDF"));
    }

    #[test]
    fn font_selection_follows_weight_and_slant() {
        let theme = Theme::default();
        assert!(matches!(
            builtin_font(theme.text_style(StyleRole::Title)),
            BuiltinFont::HelveticaBold
        ));
        assert!(matches!(
            builtin_font(theme.text_style(StyleRole::Byline)),
            BuiltinFont::HelveticaOblique
        ));
        assert!(matches!(
            builtin_font(theme.text_style(StyleRole::Body)),
            BuiltinFont::Helvetica
        ));
    }
}
