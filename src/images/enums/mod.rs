pub mod image_model;
pub mod response_format;
