use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::MosaicError;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

/// Writes frames with the `image` crate, picking the encoder from the
/// path's extension.
///
/// The channel layout of the frame is kept, except that alpha is dropped
/// for formats that cannot store it. The parent directory must already
/// exist.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn stores_alpha(path: &Path) -> bool {
    !matches!(
        ImageFormat::from_path(path),
        Ok(ImageFormat::Jpeg) | Ok(ImageFormat::Pnm)
    )
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), MosaicError> {
        let image = frame.to_dynamic_image();
        let image = if frame.has_alpha() && !stores_alpha(path) {
            log::debug!("Dropping alpha channel for {}", path.display());
            match frame.channels() {
                2 => DynamicImage::ImageLuma8(image.into_luma8()),
                _ => DynamicImage::ImageRgb8(image.into_rgb8()),
            }
        } else {
            image
        };

        image.save(path).map_err(|source| MosaicError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Encoded {}x{} frame ({:?}) to {}",
            frame.width(),
            frame.height(),
            image.color(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transparent_frame(width: u32, height: u32) -> Frame {
        let data = [30u8, 60, 90, 0]
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Frame::new(data, width, height, 4).unwrap()
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let frame = Frame::filled(100, 80, [50, 100, 200]);
        ImageFileWriter::new().write(&path, &frame).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_written_png_decodes_to_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let frame = Frame::filled(50, 50, [50, 100, 200]);
        ImageFileWriter::new().write(&path, &frame).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (50, 50));
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200]);
    }

    #[test]
    fn test_rgba_png_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new()
            .write(&path, &transparent_frame(8, 8))
            .unwrap();

        let img = image::open(&path).unwrap();
        assert!(img.color().has_alpha());
        assert_eq!(img.to_rgba8().get_pixel(3, 3).0, [30, 60, 90, 0]);
    }

    #[test]
    fn test_rgba_to_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        ImageFileWriter::new()
            .write(&path, &transparent_frame(8, 8))
            .unwrap();

        let img = image::open(&path).unwrap();
        assert!(!img.color().has_alpha());
        assert_eq!(img.width(), 8);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"old contents").unwrap();
        ImageFileWriter::new()
            .write(&path, &Frame::filled(4, 4, [9, 9, 9]))
            .unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 4);
    }

    #[test]
    fn test_write_missing_directory_is_encode_error() {
        let frame = Frame::filled(10, 10, [0, 0, 0]);
        let err = ImageFileWriter::new()
            .write(Path::new("/nonexistent/dir/out.png"), &frame)
            .unwrap_err();
        assert!(matches!(err, MosaicError::Encode { .. }));
    }

    #[test]
    fn test_write_unknown_extension_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let frame = Frame::filled(10, 10, [0, 0, 0]);
        let err = ImageFileWriter::new()
            .write(&dir.path().join("out.xyz"), &frame)
            .unwrap_err();
        assert!(matches!(err, MosaicError::Encode { .. }));
    }
}
