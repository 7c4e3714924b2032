pub mod constants;
pub mod face_box;
pub mod frame;
pub mod mode;
pub mod strength;
