use std::io;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageResult};

use crate::error::MosaicError;
use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

/// Decodes image files with the `image` crate.
///
/// The format is sniffed from the file contents, so a PNG saved with a
/// `.jpg` extension still loads. Gray/colour and alpha layout are kept;
/// samples wider than 8 bits are narrowed.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(path: &Path) -> ImageResult<DynamicImage> {
    image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, MosaicError> {
        if !path.exists() {
            return Err(MosaicError::not_found(path));
        }

        let image = decode(path).map_err(|source| match source {
            ImageError::IoError(ref e) if e.kind() == io::ErrorKind::NotFound => {
                MosaicError::not_found(path)
            }
            source => MosaicError::Decode {
                path: path.to_path_buf(),
                source,
            },
        })?;

        log::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(Frame::from_dynamic_image(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_read_returns_rgb_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "test.png", 100, 80);
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.width(), 100);
        assert_eq!(frame.height(), 80);
        assert_eq!(frame.pixel(0, 0), [50, 100, 200]);
    }

    #[test]
    fn test_read_keeps_alpha_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        image::RgbaImage::from_pixel(4, 4, image::Rgba([1, 2, 3, 128]))
            .save(&path)
            .unwrap();
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.channels(), 4);
        assert_eq!(frame.pixel(3, 3), [1, 2, 3, 128]);
    }

    #[test]
    fn test_read_keeps_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        image::GrayImage::from_pixel(5, 5, image::Luma([77]))
            .save(&path)
            .unwrap();
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.channels(), 1);
        assert_eq!(frame.pixel(2, 2), [77]);
    }

    #[test]
    fn test_read_sniffs_format_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_test_image(dir.path(), "real.png", 6, 6);
        let misnamed = dir.path().join("misnamed.jpg");
        std::fs::copy(&png, &misnamed).unwrap();
        let frame = ImageFileReader::new().read(&misnamed).unwrap();
        assert_eq!(frame.pixel(5, 5), [50, 100, 200]);
    }

    #[test]
    fn test_read_nonexistent_is_not_found() {
        let err = ImageFileReader::new()
            .read(Path::new("/nonexistent/test.png"))
            .unwrap_err();
        assert!(matches!(err, MosaicError::NotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/test.png"));
    }

    #[test]
    fn test_read_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"this is not an image").unwrap();
        let err = ImageFileReader::new().read(&path).unwrap_err();
        assert!(matches!(err, MosaicError::Decode { .. }));
    }
}
