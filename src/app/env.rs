use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub host: Option<String>,
    pub port: Option<u16>,

    pub config_path: Option<String>,

    pub sd_base_url: Option<String>,
    pub sd_timeout_secs: Option<u64>,

    pub openai_base_url: Option<String>,
    pub openai_api_key: Option<String>,

    pub max_concurrent_requests: Option<usize>,
    pub max_upload_bytes: Option<usize>,
}
