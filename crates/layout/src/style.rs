//! Styling configuration shared by the flow builder and the rendering
//! backend. A `Theme` is passed explicitly into both so concurrent
//! renders with different styling never interfere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// The role a text unit plays in the document. The backend selects font
/// and spacing from the theme entry for the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleRole {
    Title,
    Byline,
    ChapterHeading,
    Body,
    Caption,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    #[serde(default)]
    pub space_after: f32,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub slant: FontSlant,
    #[serde(default)]
    pub align: TextAlign,
}

/// Per-role text styles plus the vertical gaps emitted around inline
/// images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub title: TextStyle,
    pub byline: TextStyle,
    pub chapter_heading: TextStyle,
    pub body: TextStyle,
    pub caption: TextStyle,
    pub image_space_before: f32,
    pub image_space_after: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title: TextStyle {
                font_size: 18.0,
                line_height: 22.0,
                space_after: 6.0,
                weight: FontWeight::Bold,
                slant: FontSlant::Normal,
                align: TextAlign::Center,
            },
            byline: TextStyle {
                font_size: 10.0,
                line_height: 12.0,
                space_after: 0.0,
                weight: FontWeight::Regular,
                slant: FontSlant::Italic,
                align: TextAlign::Left,
            },
            chapter_heading: TextStyle {
                font_size: 18.0,
                line_height: 22.0,
                space_after: 21.6,
                weight: FontWeight::Bold,
                slant: FontSlant::Normal,
                align: TextAlign::Left,
            },
            body: TextStyle {
                font_size: 10.0,
                line_height: 15.0,
                space_after: 14.4,
                weight: FontWeight::Regular,
                slant: FontSlant::Normal,
                align: TextAlign::Left,
            },
            caption: TextStyle {
                font_size: 9.0,
                line_height: 11.0,
                space_after: 14.4,
                weight: FontWeight::Regular,
                slant: FontSlant::Italic,
                align: TextAlign::Left,
            },
            image_space_before: 7.2,
            image_space_after: 14.4,
        }
    }
}

impl Theme {
    pub fn text_style(&self, role: StyleRole) -> &TextStyle {
        match role {
            StyleRole::Title => &self.title,
            StyleRole::Byline => &self.byline,
            StyleRole::ChapterHeading => &self.chapter_heading,
            StyleRole::Body => &self.body,
            StyleRole::Caption => &self.caption,
        }
    }
}
