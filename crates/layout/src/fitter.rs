//! Uniform scaling of images into bounding boxes.

use crate::LayoutError;
use crate::geometry::Size;
use image::ImageReader;
use std::fmt::Display;
use std::path::Path;

/// Scales `intrinsic` uniformly so it exactly fills the limiting axis of
/// `bounds`. Aspect ratio is preserved and neither axis exceeds the box.
/// Images smaller than the box are enlarged to fill it, not left at
/// native size.
pub fn fit_within(intrinsic: Size, bounds: Size) -> Size {
    let scale = (bounds.width / intrinsic.width).min(bounds.height / intrinsic.height);
    Size::new(intrinsic.width * scale, intrinsic.height * scale)
}

/// Reads the intrinsic pixel dimensions of the image at `path`.
///
/// Only the header is decoded; the file handle is released before this
/// returns. A missing or undecodable file fails the layout of the block
/// that referenced it.
pub fn intrinsic_size(path: &str) -> Result<Size, LayoutError> {
    let reader = ImageReader::open(Path::new(path)).map_err(|e| asset_error(path, e))?;
    let reader = reader.with_guessed_format().map_err(|e| asset_error(path, e))?;
    let (width, height) = reader.into_dimensions().map_err(|e| asset_error(path, e))?;
    Ok(Size::new(width as f32, height as f32))
}

fn asset_error(path: &str, message: impl Display) -> LayoutError {
    LayoutError::Asset {
        path: path.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downscales_wide_image_to_width() {
        let fitted = fit_within(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(100.0, 50.0));
    }

    #[test]
    fn downscales_tall_image_to_height() {
        let fitted = fit_within(Size::new(100.0, 400.0), Size::new(200.0, 100.0));
        assert_eq!(fitted, Size::new(25.0, 100.0));
    }

    #[test]
    fn enlarges_small_image_to_fill_limiting_axis() {
        let fitted = fit_within(Size::new(10.0, 5.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(100.0, 50.0));
    }

    #[test]
    fn preserves_aspect_ratio_and_stays_in_bounds() {
        let intrinsic = Size::new(123.0, 457.0);
        let bounds = Size::new(321.0, 199.0);
        let fitted = fit_within(intrinsic, bounds);

        let original_ratio = intrinsic.width / intrinsic.height;
        let fitted_ratio = fitted.width / fitted.height;
        assert!((original_ratio - fitted_ratio).abs() < 1e-4);
        assert!(fitted.width <= bounds.width + 1e-4);
        assert!(fitted.height <= bounds.height + 1e-4);
        // Tight fit on the limiting axis.
        assert!(
            (fitted.width - bounds.width).abs() < 1e-3 || (fitted.height - bounds.height).abs() < 1e-3
        );
    }

    #[test]
    fn probes_pixel_dimensions_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.png");
        image::RgbImage::new(48, 21).save(&path).unwrap();

        let size = intrinsic_size(path.to_str().unwrap()).unwrap();
        assert_eq!(size, Size::new(48.0, 21.0));
    }

    #[test]
    fn missing_file_reports_offending_path() {
        let result = intrinsic_size("no/such/image.png");
        match result {
            Err(LayoutError::Asset { path, .. }) => assert_eq!(path, "no/such/image.png"),
            other => panic!("expected asset error, got {:?}", other),
        }
    }

    #[test]
    fn corrupt_file_is_an_asset_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();

        let result = intrinsic_size(path.to_str().unwrap());
        assert!(matches!(result, Err(LayoutError::Asset { .. })));
    }
}
