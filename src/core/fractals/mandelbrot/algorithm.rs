use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub const MAX_ITERATIONS: u32 = 100;
/// Escape radius 2, compared squared.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z -> z² + c` starting from `z = c`.
///
/// Each step squares and adds first, then tests the new value, so a point
/// reported as `Escaped { iterations: n }` left the radius on step `n`.
#[must_use]
pub fn escape_time(c: Complex) -> EscapeTime {
    let mut z = c;

    for iteration in 0..MAX_ITERATIONS {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return EscapeTime::Escaped { iterations: iteration };
        }
    }

    EscapeTime::Bounded
}

/// Mandelbrot escape time for every pixel of one viewport snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeTime;

    fn compute(&self, pixel: Point) -> Self::Success {
        escape_time(pixel_to_complex_coords(pixel, &self.viewport))
    }
}
