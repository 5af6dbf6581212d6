use reqwest::StatusCode;
use serde_json::{Map, Value};
use tokio_retry::{strategy::FixedInterval, Retry};

use crate::{
    app::env::Envy,
    config::models::settings::{Settings, DEFAULT_SD_BASE_URL},
};

use super::{enums::sd_api::SdApi, structs::sd_images_response::SdImagesResponse};

pub struct StableDiffusionApi {
    client: reqwest::Client,
    base_url: String,
}

impl StableDiffusionApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn resolve_base_url(envy: &Envy, settings: &Settings) -> String {
        envy.sd_base_url
            .clone()
            .or_else(|| settings.sd_base_url.clone())
            .unwrap_or_else(|| DEFAULT_SD_BASE_URL.to_string())
    }

    /// Never fails. Connection errors get one immediate retry, and any
    /// unusable outcome is logged and yields an empty list.
    pub async fn submit(&self, payload: &Map<String, Value>, api: SdApi) -> Vec<String> {
        let url = format!(
            "{}/sdapi/v1/{}",
            self.base_url.trim_end_matches('/'),
            api.value()
        );

        let client = &self.client;
        let url = url.as_str();

        let retry_strategy = FixedInterval::from_millis(0).take(1);
        let result = Retry::spawn(retry_strategy, || async move {
            client.post(url).json(payload).send().await
        })
        .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::error!("submit {} failed to reach backend: {:?}", api.value(), e);
                return Vec::new();
            }
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("submit {} failed to read response: {:?}", api.value(), e);
                return Vec::new();
            }
        };

        if status != StatusCode::OK {
            tracing::error!("submit {} returned {}: {}", api.value(), status, text);
            return Vec::new();
        }

        match serde_json::from_str::<SdImagesResponse>(&text) {
            Ok(SdImagesResponse {
                images: Some(images),
                ..
            }) => images,
            Ok(SdImagesResponse { error, errors, .. }) => {
                tracing::error!(
                    "submit {} returned no images: error={:?} errors={:?}",
                    api.value(),
                    error,
                    errors
                );
                Vec::new()
            }
            Err(_) => {
                tracing::error!(%text);
                Vec::new()
            }
        }
    }
}
