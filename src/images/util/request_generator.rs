use serde_json::{json, Map, Value};

use crate::{
    app::models::api_error::ApiError,
    config::service::ConfigStore,
    images::{errors::ImagesApiError, models::backend_profile::BackendProfile},
};

use super::scaler::{self, ScaleStrategy};

pub struct RequestGenerator<'a> {
    profile: BackendProfile,
    config: &'a ConfigStore,
}

impl<'a> RequestGenerator<'a> {
    pub fn new(profile: BackendProfile, config: &'a ConfigStore) -> Self {
        Self { profile, config }
    }

    pub async fn create_request(
        &self,
        prompt: &str,
        width: u32,
        height: u32,
        batch_size: u8,
    ) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("prompt".to_string(), json!(prompt));
        payload.insert("width".to_string(), json!(width));
        payload.insert("height".to_string(), json!(height));
        payload.insert("batch_size".to_string(), json!(batch_size));

        scaler::apply(
            &mut payload,
            width,
            height,
            self.profile.native_scale,
            ScaleStrategy::HighResFix,
        );
        self.merge_defaults(&mut payload).await;

        payload
    }

    /// Generation is sized from the source image itself; the requested size
    /// only has to be well formed.
    pub async fn create_variation(
        &self,
        image: &[u8],
        width: u32,
        height: u32,
        batch_size: u8,
    ) -> Result<Map<String, Value>, ApiError> {
        let size = match imagesize::blob_size(image) {
            Ok(size) => size,
            Err(e) => {
                tracing::warn!("create_variation could not decode source image: {:?}", e);
                return Err(ImagesApiError::UndecodableImage.value());
            }
        };

        let (Ok(image_width), Ok(image_height)) =
            (u32::try_from(size.width), u32::try_from(size.height))
        else {
            return Err(ImagesApiError::UndecodableImage.value());
        };

        if image_width == 0 || image_height == 0 {
            return Err(ImagesApiError::UndecodableImage.value());
        }

        tracing::debug!(
            "variation of {}x{} source (requested {}x{})",
            image_width,
            image_height,
            width,
            height
        );

        let mut payload = Map::new();
        payload.insert("init_images".to_string(), json!([base64::encode(image)]));
        payload.insert("width".to_string(), json!(image_width));
        payload.insert("height".to_string(), json!(image_height));
        payload.insert("batch_size".to_string(), json!(batch_size));

        scaler::apply(
            &mut payload,
            image_width,
            image_height,
            self.profile.native_scale,
            ScaleStrategy::ResizeMode,
        );
        self.merge_defaults(&mut payload).await;

        Ok(payload)
    }

    async fn merge_defaults(&self, payload: &mut Map<String, Value>) {
        let defaults = self.config.load_defaults(&self.profile).await;

        for (key, value) in defaults {
            payload.entry(key).or_insert(value);
        }
    }
}
