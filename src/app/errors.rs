use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    ServiceUnavailable,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ServiceUnavailable => ApiError {
                code: StatusCode::SERVICE_UNAVAILABLE,
                message: "The server is busy, try again later.".to_string(),
            },
        }
    }
}
