use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::frame_buffer::FrameBuffer;
use image::ColorType;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// JPEG writer; the frame is flattened to RGB before encoding.
#[derive(Debug)]
pub struct JpegFilePresenter {
    quality: u8,
}

impl FilePresenterPort for JpegFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let mut file = BufWriter::new(File::create(filepath)?);

        JpegEncoder::new_with_quality(&mut file, self.quality).encode(
            &frame.to_rgb_bytes(),
            frame.width(),
            frame.height(),
            ColorType::Rgb8,
        )?;
        file.flush()?;

        Ok(())
    }
}

impl Default for JpegFilePresenter {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl JpegFilePresenter {
    /// `quality` is clamped to the encoder's 1..=100 range.
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    #[must_use]
    pub fn quality(&self) -> u8 {
        self.quality
    }
}
