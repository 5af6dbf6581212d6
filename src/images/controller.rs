use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::{
        models::{api_error::ApiError, json_from_request::JsonFromRequest},
        util::multipart::multipart::get_form,
    },
    AppState,
};

use super::{
    dtos::{create_variation_dto::CreateVariationDto, generate_images_dto::GenerateImagesDto},
    models::images_response::ImagesResponse,
    service,
};

pub async fn generate_images(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImagesDto>,
) -> Result<Json<ImagesResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_images(&dto, &state).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn create_variations(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImagesResponse>, ApiError> {
    let form = get_form(multipart).await?;
    let dto = CreateVariationDto::from_form(&form)?;

    match dto.validate() {
        Ok(_) => match service::create_variations(&dto, &form, &state).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn edit_images() -> Json<ImagesResponse> {
    Json(service::edit_images())
}
