pub mod domain;
pub mod image_processor;
pub mod infrastructure;
