use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl ApiError {
    fn error_type(&self) -> &'static str {
        if self.code.is_client_error() {
            "invalid_request_error"
        } else {
            "server_error"
        }
    }
}

// Error bodies follow the OpenAI envelope so SDK clients surface the message.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "message": self.message,
                "type": self.error_type(),
                "param": null,
                "code": null,
            }
        });

        (self.code, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn client_errors_are_invalid_request_errors() {
        let response = ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "size must be formatted as WIDTHxHEIGHT.".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["type"], "invalid_request_error");
        assert_eq!(
            value["error"]["message"],
            "size must be formatted as WIDTHxHEIGHT."
        );
    }

    #[tokio::test]
    async fn upstream_errors_are_server_errors() {
        let response = ApiError {
            code: StatusCode::BAD_GATEWAY,
            message: "Failed to enhance prompt.".to_string(),
        }
        .into_response();

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["type"], "server_error");
    }
}
