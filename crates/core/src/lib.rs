//! Pixelation ("mosaic") of whole images or of detected face regions.
//!
//! The [`pipeline::mosaic_image_use_case::MosaicImageUseCase`] ties the
//! pieces together: it loads an image through the
//! [`imaging::image_processor::ImageProcessor`], pixelates either the whole
//! frame or the boxes returned by a
//! [`detection::domain::face_detector::FaceDetector`], and saves the result.

pub mod detection;
pub mod error;
pub mod imaging;
pub mod mosaic;
pub mod pipeline;
pub mod shared;

pub use error::MosaicError;
