use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    UnknownModel,
    InvalidSize,
    InvalidResponseFormat,
    InvalidNumber,
    MissingImage,
    UndecodableImage,
    EnhancementFailed,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UnknownModel => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "model must be one of: dall-e-1, dall-e-2, dall-e-3.".to_string(),
            },
            Self::InvalidSize => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "size must be formatted as WIDTHxHEIGHT.".to_string(),
            },
            Self::InvalidResponseFormat => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "response_format must be one of: url, b64_json.".to_string(),
            },
            Self::InvalidNumber => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "n must be between 1 and 10.".to_string(),
            },
            Self::MissingImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "An image file is required.".to_string(),
            },
            Self::UndecodableImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Could not decode image.".to_string(),
            },
            Self::EnhancementFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to enhance prompt.".to_string(),
            },
        }
    }
}
