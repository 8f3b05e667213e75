use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;

/// Computes and colours every pixel of row `y` into `row`, one RGBA slot per pixel.
pub(crate) fn fill_row<Alg, CMap>(y: u32, row: &mut [u8], algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (x, slot) in (0u32..).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
        let colour = colour_map.map(algorithm.compute(Point { x, y }));
        slot.copy_from_slice(&colour.to_rgba());
    }
}
