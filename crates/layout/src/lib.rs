use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(
        "frame dimensions must be positive: page {page_width:.2}x{page_height:.2} minus margins leaves {frame_width:.2}x{frame_height:.2}"
    )]
    InvalidGeometry {
        page_width: f32,
        page_height: f32,
        frame_width: f32,
        frame_height: f32,
    },
    #[error("failed to read image '{path}': {message}")]
    Asset { path: String, message: String },
}

pub mod elements;
pub mod fitter;
pub mod flow;
pub mod geometry;
pub mod style;

pub use self::elements::{ImageUnit, LayoutUnit, TextUnit};
pub use self::fitter::{fit_within, intrinsic_size};
pub use self::flow::FlowBuilder;
pub use self::geometry::{Margins, PageGeometry, PageSize, Size};
pub use self::style::{FontSlant, FontWeight, StyleRole, TextAlign, TextStyle, Theme};
