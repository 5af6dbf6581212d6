use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::images::models::backend_profile::BackendProfile;

use super::models::settings::Settings;

pub const SETTINGS_FILE: &str = "config.json";

/// Nothing is cached: every call goes back to disk so operators can retune
/// sampling or point at another backend without restarting the service.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn load_defaults(&self, profile: &BackendProfile) -> Map<String, Value> {
        let path = self.dir.join(profile.defaults_file);

        match read_json::<Map<String, Value>>(&path).await {
            Some(defaults) => defaults,
            None => (profile.fallback_defaults)(),
        }
    }

    pub async fn load_settings(&self) -> Settings {
        let path = self.dir.join(SETTINGS_FILE);

        read_json::<Settings>(&path).await.unwrap_or_default()
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn missing_documents_fall_back_to_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());

        let defaults = store.load_defaults(&BackendProfile::SDXL_LIGHTNING).await;
        assert_eq!(defaults, (BackendProfile::SDXL_LIGHTNING.fallback_defaults)());

        let settings = store.load_settings().await;
        assert!(settings.sd_base_url.is_none());
        assert!(settings.enhanced_prompt.enhances("dall-e-3"));
        assert!(!settings.enhanced_prompt.enhances("dall-e-2"));
    }

    #[tokio::test]
    async fn defaults_are_reread_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        let path = dir.path().join(BackendProfile::SD15.defaults_file);

        std::fs::write(&path, r#"{"steps": 20}"#).unwrap();
        let first = store.load_defaults(&BackendProfile::SD15).await;
        assert_eq!(first.get("steps"), Some(&json!(20)));

        std::fs::write(&path, r#"{"steps": 45, "sampler_name": "Euler a"}"#).unwrap();
        let second = store.load_defaults(&BackendProfile::SD15).await;
        assert_eq!(second.get("steps"), Some(&json!(45)));
        assert_eq!(second.get("sampler_name"), Some(&json!("Euler a")));
    }

    #[tokio::test]
    async fn malformed_defaults_fall_back_to_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        std::fs::write(dir.path().join(BackendProfile::SDXL.defaults_file), "{ steps:").unwrap();

        let defaults = store.load_defaults(&BackendProfile::SDXL).await;
        assert_eq!(defaults, (BackendProfile::SDXL.fallback_defaults)());
    }

    #[tokio::test]
    async fn settings_document_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{
                "sd_base_url": "http://gpu-box:7860",
                "enhanced_prompt": {
                    "models": ["dall-e-2", "dall-e-3"],
                    "openai_base_url": "http://localhost:5000/v1"
                }
            }"#,
        )
        .unwrap();

        let settings = store.load_settings().await;
        assert_eq!(settings.sd_base_url.as_deref(), Some("http://gpu-box:7860"));
        assert!(settings.enhanced_prompt.enhances("dall-e-2"));
        assert_eq!(
            settings.enhanced_prompt.openai_base_url.as_deref(),
            Some("http://localhost:5000/v1")
        );
        assert_eq!(settings.enhanced_prompt.model, "x");
    }
}
