use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Url,
    B64Json,
}

impl ResponseFormat {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "url" => Some(Self::Url),
            "b64_json" => Some(Self::B64Json),
            _ => None,
        }
    }
}
