//! Read-only pixel grid access

use crate::error::FriezeError;

/// Source of intensity samples, indexed by (column, row).
///
/// Intensities are conventionally 0-255 but any real value is accepted.
pub trait PixelGrid {
    /// Number of columns (wraps around the cylinder)
    fn width(&self) -> u32;

    /// Number of rows (runs along the axis)
    fn height(&self) -> u32;

    /// Sample at `col`, `row`. Callers stay inside `width` x `height`.
    fn intensity(&self, col: u32, row: u32) -> f64;
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn intensity(&self, col: u32, row: u32) -> f64 {
        (**self).intensity(col, row)
    }
}

/// In-memory grid of samples stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct IntensityGrid {
    width: u32,
    height: u32,
    samples: Vec<f64>,
}

impl IntensityGrid {
    /// Wrap a row-major sample buffer of exactly `width * height` values
    pub fn new(width: u32, height: u32, samples: Vec<f64>) -> Result<Self, FriezeError> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(FriezeError::SampleCount {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Grid where every sample has the same value
    pub fn filled(width: u32, height: u32, value: f64) -> Self {
        Self {
            width,
            height,
            samples: vec![value; width as usize * height as usize],
        }
    }

    /// Grid sampled from `f(col, row)`
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                samples.push(f(col, row));
            }
        }
        Self {
            width,
            height,
            samples,
        }
    }
}

impl PixelGrid for IntensityGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn intensity(&self, col: u32, row: u32) -> f64 {
        self.samples[row as usize * self.width as usize + col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = IntensityGrid::from_fn(3, 2, |c, r| (r * 10 + c) as f64);
        assert_eq!(grid.intensity(0, 0), 0.0);
        assert_eq!(grid.intensity(2, 0), 2.0);
        assert_eq!(grid.intensity(1, 1), 11.0);
    }

    #[test]
    fn test_new_checks_sample_count() {
        assert!(IntensityGrid::new(2, 2, vec![0.0; 4]).is_ok());
        let err = IntensityGrid::new(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            FriezeError::SampleCount {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_reference_forwards() {
        fn corner<G: PixelGrid>(grid: G) -> (u32, u32, f64) {
            (grid.width(), grid.height(), grid.intensity(3, 2))
        }

        let grid = IntensityGrid::filled(4, 3, 7.0);
        assert_eq!(corner(&grid), (4, 3, 7.0));
    }
}
