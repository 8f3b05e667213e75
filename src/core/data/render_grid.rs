use crate::core::data::frame_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;
use thiserror::Error;

pub const REFERENCE_WIDTH: u32 = 1920;
pub const REFERENCE_HEIGHT: u32 = 1080;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RenderGridError {
    #[error("render grid size must be positive: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("render grid {width}x{height} is too large to allocate a frame for")]
    TooLarge { width: u32, height: u32 },
}

/// Fixed pixel dimensions of a rendered frame.
///
/// The grid is an immutable value each [`Viewport`](crate::Viewport) is bound
/// to, so one process can render at several sizes side by side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderGrid {
    width: u32,
    height: u32,
}

impl RenderGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderGridError> {
        if width == 0 || height == 0 {
            return Err(RenderGridError::ZeroSize { width, height });
        }

        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .filter(|&bytes| bytes <= isize::MAX as usize);
        if bytes.is_none() {
            return Err(RenderGridError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of an RGBA frame for this grid; cannot overflow for a constructed grid.
    #[must_use]
    pub fn byte_count(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }
}

impl Default for RenderGrid {
    fn default() -> Self {
        Self {
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_grid() {
        let grid = RenderGrid::default();

        assert_eq!(grid.width(), 1920);
        assert_eq!(grid.height(), 1080);
        assert_eq!(grid.pixel_count(), 1920 * 1080);
        assert_eq!(grid.aspect_ratio(), 1920.0 / 1080.0);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            RenderGrid::new(0, 10),
            Err(RenderGridError::ZeroSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            RenderGrid::new(10, 0),
            Err(RenderGridError::ZeroSize {
                width: 10,
                height: 0
            })
        );
        assert!(RenderGrid::new(1, 1).is_ok());
    }

    #[test]
    fn test_grid_whose_frame_overflows_memory_is_rejected() {
        assert_eq!(
            RenderGrid::new(u32::MAX, u32::MAX),
            Err(RenderGridError::TooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_byte_count_is_four_per_pixel() {
        assert_eq!(RenderGrid::new(3, 2).unwrap().byte_count(), 24);
    }

    #[test]
    fn test_error_message() {
        let err = RenderGrid::new(0, 0).unwrap_err();

        assert_eq!(err.to_string(), "render grid size must be positive: 0x0");
    }

    #[test]
    fn test_contains_point_is_exclusive_of_dimensions() {
        let grid = RenderGrid::new(4, 2).unwrap();

        assert!(grid.contains_point(Point { x: 0, y: 0 }));
        assert!(grid.contains_point(Point { x: 3, y: 1 }));
        assert!(!grid.contains_point(Point { x: 4, y: 1 }));
        assert!(!grid.contains_point(Point { x: 3, y: 2 }));
    }
}
