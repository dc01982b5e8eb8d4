//! Content model for chaptered documents.
//! This crate defines the in-memory representation of a document's
//! structure and content before layout: a `Document` holds ordered
//! `Chapter`s, each holding a sequence of `ContentBlock`s. Values are
//! built by the caller and treated as immutable for the duration of a
//! render.

/// A run of body text. The empty string is legal and renders as a blank
/// line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A reference to an image on disk, with an optional caption.
///
/// The source must resolve to a decodable image when the document is laid
/// out; a dangling reference fails the whole render.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub src: String,
    /// A full-page image is given its own page(s) instead of flowing with
    /// the surrounding text.
    pub full_page: bool,
    pub caption: Option<String>,
}

impl ImageBlock {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            full_page: false,
            caption: None,
        }
    }

    pub fn full_page(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            full_page: true,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// A block-level element within a chapter. The set of block kinds is
/// closed; the layout engine matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Paragraph(Paragraph),
    Image(ImageBlock),
}

impl ContentBlock {
    /// Returns a string identifier for the block type, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::Image(_) => "image",
        }
    }
}

impl From<Paragraph> for ContentBlock {
    fn from(paragraph: Paragraph) -> Self {
        ContentBlock::Paragraph(paragraph)
    }
}

impl From<ImageBlock> for ContentBlock {
    fn from(image: ImageBlock) -> Self {
        ContentBlock::Image(image)
    }
}

/// A titled, ordered run of content blocks. Block order defines reading
/// order. A chapter may be empty; it then produces only its heading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chapter {
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, blocks: Vec<ContentBlock>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }
}

/// The root of the content tree. Chapter order defines page order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub title: String,
    pub author: String,
    pub chapters: Vec<Chapter>,
}

impl Document {
    pub fn new(title: impl Into<String>, author: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            chapters,
        }
    }
}
