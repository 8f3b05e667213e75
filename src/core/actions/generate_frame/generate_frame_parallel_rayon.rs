use rayon::prelude::*;

use crate::core::actions::generate_frame::fill_row::fill_row;
use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::render_grid::RenderGrid;

/// Generates a frame in parallel using rayon's work-stealing scheduler.
///
/// The buffer is split into disjoint rows and each rayon task writes its row
/// in place, so no locking is needed. The call returns only after every row
/// has been written; the result is identical to
/// [`generate_frame_serial`](super::generate_frame_serial::generate_frame_serial)
/// whatever order the rows run in.
pub fn generate_frame_parallel_rayon<Alg, CMap>(
    grid: RenderGrid,
    algorithm: &Alg,
    colour_map: &CMap,
) -> FrameBuffer
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let mut frame = FrameBuffer::new(grid);
    let row_stride = frame.row_stride();

    frame
        .data_mut()
        .par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(y, row)| fill_row(y as u32, row, algorithm, colour_map));

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_frame::generate_frame_serial::generate_frame_serial;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubSumAlgorithm {}

    impl FractalAlgorithm for StubSumAlgorithm {
        type Success = u32;

        fn compute(&self, pixel: Point) -> Self::Success {
            pixel.x * 31 + pixel.y * 17
        }
    }

    #[derive(Debug, Default)]
    struct CountingAlgorithm {
        calls: AtomicUsize,
    }

    impl FractalAlgorithm for CountingAlgorithm {
        type Success = u32;

        fn compute(&self, _: Point) -> Self::Success {
            self.calls.fetch_add(1, Ordering::Relaxed);
            1
        }
    }

    #[derive(Debug)]
    struct StubBytesColourMap {}

    impl ColourMap<u32> for StubBytesColourMap {
        fn map(&self, value: u32) -> Colour {
            let [_, r, g, b] = value.to_be_bytes();
            Colour::opaque(r, g, b)
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let grid = RenderGrid::new(11, 9).unwrap();

        let serial = generate_frame_serial(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});
        let parallel =
            generate_frame_parallel_rayon(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_single_row() {
        let grid = RenderGrid::new(64, 1).unwrap();

        let serial = generate_frame_serial(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});
        let parallel =
            generate_frame_parallel_rayon(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_single_column() {
        let grid = RenderGrid::new(1, 64).unwrap();

        let serial = generate_frame_serial(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});
        let parallel =
            generate_frame_parallel_rayon(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_computes_every_pixel_exactly_once() {
        let grid = RenderGrid::new(37, 23).unwrap();
        let algorithm = CountingAlgorithm::default();

        let frame = generate_frame_parallel_rayon(grid, &algorithm, &StubBytesColourMap {});

        assert_eq!(algorithm.calls.load(Ordering::Relaxed), grid.pixel_count());
        assert!(frame.pixels().all(|pixel| pixel == Colour::opaque(0, 0, 1)));
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let grid = RenderGrid::new(300, 200).unwrap();

        let serial = generate_frame_serial(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});
        let parallel =
            generate_frame_parallel_rayon(grid, &StubSumAlgorithm {}, &StubBytesColourMap {});

        assert_eq!(parallel.len(), 60_000);
        assert_eq!(parallel, serial);
    }
}
