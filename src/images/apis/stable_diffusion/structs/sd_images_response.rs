use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SdImagesResponse {
    pub images: Option<Vec<String>>,
    pub error: Option<Value>,
    pub errors: Option<Value>,
}
