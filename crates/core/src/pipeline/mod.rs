pub mod mosaic_image_use_case;
pub mod pipeline_observer;
