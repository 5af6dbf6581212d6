use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::images::enums::response_format::ResponseFormat;

lazy_static! {
    pub static ref SIZE_REGEX: Regex = Regex::new(r"^\d+x\d+$").unwrap();
}

pub const DEFAULT_MODEL: &str = "dall-e-2";
pub const DEFAULT_SIZE: &str = "1024x1024";

pub fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

pub fn default_size() -> String {
    DEFAULT_SIZE.to_string()
}

pub fn default_number() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateImagesDto {
    #[validate(length(
        min = 1,
        max = 4000,
        message = "prompt must be between 1 and 4000 characters."
    ))]
    pub prompt: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_size")]
    #[validate(regex(path = "SIZE_REGEX", message = "size must be formatted as WIDTHxHEIGHT."))]
    pub size: String,
    #[serde(default)]
    pub response_format: ResponseFormat,
    #[serde(default = "default_number")]
    #[validate(range(min = 1, max = 10, message = "n must be between 1 and 10."))]
    pub n: u8,
    // accepted for compatibility, not forwarded
    #[allow(dead_code)]
    pub quality: Option<String>,
    #[allow(dead_code)]
    pub style: Option<String>,
    pub user: Option<String>,
}
