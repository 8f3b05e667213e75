use crate::core::actions::generate_frame::fill_row::fill_row;
use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::render_grid::RenderGrid;

/// Single-threaded reference generator, row by row from the top.
pub fn generate_frame_serial<Alg, CMap>(
    grid: RenderGrid,
    algorithm: &Alg,
    colour_map: &CMap,
) -> FrameBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut frame = FrameBuffer::new(grid);
    let row_stride = frame.row_stride();

    for (y, row) in (0u32..).zip(frame.data_mut().chunks_exact_mut(row_stride)) {
        fill_row(y, row, algorithm, colour_map);
    }

    frame
}
