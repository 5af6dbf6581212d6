use axum::Json;

use crate::images::enums::image_model::ImageModel;

use super::{
    models::{
        api_error::ApiError,
        model_list::{ModelList, ModelObject},
    },
    util::time,
};

pub async fn get_root() -> Result<(), ApiError> {
    Ok(())
}

pub async fn get_models() -> Json<ModelList> {
    let created = time::current_time_in_secs();

    let data = ImageModel::ALL
        .iter()
        .map(|model| ModelObject {
            id: model.value(),
            object: "model",
            created,
            owned_by: "system",
        })
        .collect();

    Json(ModelList {
        object: "list",
        data,
    })
}
