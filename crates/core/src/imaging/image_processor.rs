use std::path::Path;

use crate::error::MosaicError;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::imaging::infrastructure::image_file_reader::ImageFileReader;
use crate::imaging::infrastructure::image_file_writer::ImageFileWriter;
use crate::mosaic::pixelate::{full_frame_block_size, pixelate};
use crate::shared::frame::Frame;
use crate::shared::strength::Strength;

/// Loads, pixelates and saves whole images.
pub struct ImageProcessor {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
}

impl ImageProcessor {
    pub fn new(reader: Box<dyn ImageReader>, writer: Box<dyn ImageWriter>) -> Self {
        Self { reader, writer }
    }

    pub fn load_image(&self, path: &Path) -> Result<Frame, MosaicError> {
        self.reader.read(path)
    }

    /// Pixelates the whole frame. `strength` must lie in `1..=10`.
    pub fn apply_mosaic(&self, frame: &Frame, strength: u8) -> Result<Frame, MosaicError> {
        let strength = Strength::new(strength)?;
        let block_size = full_frame_block_size(frame.width(), frame.height(), strength);
        log::debug!(
            "Full-frame mosaic: {}x{} at strength {strength}, block size {block_size}",
            frame.width(),
            frame.height()
        );
        Ok(pixelate(frame, block_size))
    }

    pub fn save_image(&self, frame: &Frame, path: &Path) -> Result<(), MosaicError> {
        self.writer.write(path, frame)
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new(
            Box::new(ImageFileReader::new()),
            Box::new(ImageFileWriter::new()),
        )
    }
}
