use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel on the viewport's grid to the point of the complex plane it samples.
///
/// `center_x` is stored without aspect correction, so it is scaled by the
/// grid's aspect ratio here while `center_y` is used as is. Pixels outside
/// the grid extrapolate the same affine map.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, viewport: &Viewport) -> Complex {
    let grid = viewport.grid;
    let width = f64::from(grid.width());
    let height = f64::from(grid.height());
    let x = f64::from(pixel.x);
    let y = f64::from(pixel.y);

    let real = (x * viewport.zoom_x / width - viewport.zoom_x / 2.0)
        + viewport.center_x * grid.aspect_ratio();
    let imag = (y * viewport.zoom_y / height - viewport.zoom_y / 2.0) + viewport.center_y;

    Complex { real, imag }
}
