pub mod face_mosaic;
pub mod pixelate;
