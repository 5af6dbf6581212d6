use serde::Deserialize;

pub const DEFAULT_SD_BASE_URL: &str = "http://127.0.0.1:7860";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub sd_base_url: Option<String>,
    #[serde(default)]
    pub enhanced_prompt: EnhancedPromptSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnhancedPromptSettings {
    pub models: Vec<String>,
    pub openai_base_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub model: String,
}

impl Default for EnhancedPromptSettings {
    fn default() -> Self {
        Self {
            models: vec!["dall-e-3".to_string()],
            openai_base_url: None,
            openai_api_key: None,
            model: "x".to_string(),
        }
    }
}

impl EnhancedPromptSettings {
    pub fn enhances(&self, alias: &str) -> bool {
        self.models.iter().any(|m| m == alias)
    }
}
