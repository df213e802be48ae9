//! Grayscale image source

use anyhow::{Context, Result};
use frieze_core::PixelGrid;
use image::{DynamicImage, GrayImage, Luma};
use std::path::Path;

/// Decoded image reduced to 8-bit luma
pub struct GrayscaleImage {
    pixels: GrayImage,
}

impl GrayscaleImage {
    pub fn new(pixels: GrayImage) -> Self {
        Self { pixels }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

impl PixelGrid for GrayscaleImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn intensity(&self, col: u32, row: u32) -> f64 {
        self.pixels.get_pixel(col, row).0[0] as f64
    }
}

/// Load an image file (PNG, JPG) and convert it to grayscale
pub fn load_grayscale(path: &Path) -> Result<GrayscaleImage> {
    let img =
        image::open(path).with_context(|| format!("Failed to load image: {}", path.display()))?;
    let color = img.color();
    let luma = to_mode_l(img);
    tracing::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        luma.width(),
        luma.height(),
        color
    );
    Ok(GrayscaleImage::new(luma))
}

/// Reduce to 8-bit luma with ITU-R 601 weights (0.299, 0.587, 0.114),
/// rounded in 16.16 fixed point. Gray inputs pass through unchanged and
/// alpha is ignored.
fn to_mode_l(img: DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray,
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => img.to_luma8(),
        _ => {
            let rgb = img.to_rgb8();
            GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([rec601_luma(r, g, b)])
            })
        }
    }
}

fn rec601_luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (weighted >> 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    #[test]
    fn test_intensity_reads_luma() {
        let mut pixels = GrayImage::new(3, 2);
        pixels.put_pixel(2, 1, Luma([200]));
        let grid = GrayscaleImage::new(pixels);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.intensity(2, 1), 200.0);
        assert_eq!(grid.intensity(0, 0), 0.0);
    }

    #[test]
    fn test_load_converts_color_to_luma() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("white.png");
        RgbImage::from_pixel(4, 3, Rgb([255, 255, 255]))
            .save(&path)
            .expect("Failed to save PNG");

        let grid = load_grayscale(&path).expect("Failed to load PNG");
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.intensity(3, 2), 255.0);
    }

    #[test]
    fn test_color_uses_rec601_weights() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("red.png");
        RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]))
            .save(&path)
            .expect("Failed to save PNG");

        let grid = load_grayscale(&path).expect("Failed to load PNG");
        assert_eq!(grid.intensity(0, 0), 76.0);
        assert_eq!(grid.intensity(1, 1), 76.0);
    }

    #[test]
    fn test_rec601_luma_values() {
        assert_eq!(rec601_luma(0, 255, 0), 150);
        assert_eq!(rec601_luma(0, 0, 255), 29);
        assert_eq!(rec601_luma(255, 255, 255), 255);
        assert_eq!(rec601_luma(0, 0, 0), 0);
        assert_eq!(rec601_luma(100, 150, 200), 141);
    }

    #[test]
    fn test_gray_input_passes_through() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("gray.png");
        GrayImage::from_fn(3, 1, |x, _| Luma([(x * 100 + 7) as u8]))
            .save(&path)
            .expect("Failed to save PNG");

        let grid = load_grayscale(&path).expect("Failed to load PNG");
        assert_eq!(grid.intensity(0, 0), 7.0);
        assert_eq!(grid.intensity(2, 0), 207.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_grayscale(Path::new("does/not/exist.png"))
            .err()
            .expect("should fail");
        assert!(err.to_string().contains("Failed to load image"));
    }
}
