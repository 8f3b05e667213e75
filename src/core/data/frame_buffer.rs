use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::render_grid::RenderGrid;

pub const BYTES_PER_PIXEL: usize = 4;

pub type FrameBufferData = Vec<u8>;

/// A complete RGBA frame, row-major from the top left.
///
/// Only the renderer creates and fills frames, so callers never observe a
/// partially written buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    grid: RenderGrid,
    data: FrameBufferData,
}

impl FrameBuffer {
    /// Zeroed buffer; alpha 0 marks pixels no worker has written yet.
    pub(crate) fn new(grid: RenderGrid) -> Self {
        Self {
            grid,
            data: vec![0; grid.byte_count()],
        }
    }

    #[must_use]
    pub fn grid(&self) -> RenderGrid {
        self.grid
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Number of pixels, not bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.grid.width() as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if !self.grid.contains_point(point) {
            return None;
        }

        let index = (point.y as usize * self.grid.width() as usize + point.x as usize)
            * BYTES_PER_PIXEL;
        let slot = &self.data[index..index + BYTES_PER_PIXEL];

        Some(Colour::from_rgba([slot[0], slot[1], slot[2], slot[3]]))
    }

    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|chunk| Colour::from_rgba([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    /// Packed RGB copy with alpha dropped, for encoders without alpha support.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.len() * 3);

        for pixel in self.data.chunks_exact(BYTES_PER_PIXEL) {
            rgb.extend_from_slice(&pixel[..3]);
        }

        rgb
    }
}
