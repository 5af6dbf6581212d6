use serde::Serialize;

use crate::{app::util::time, images::enums::response_format::ResponseFormat};

#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub created: u64,
    pub data: Vec<ImageData>,
}

#[derive(Debug, Serialize)]
pub struct ImageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

impl ImagesResponse {
    pub fn empty() -> Self {
        Self {
            created: time::current_time_in_secs(),
            data: Vec::new(),
        }
    }

    pub fn from_images(
        images: Vec<String>,
        response_format: ResponseFormat,
        revised_prompt: Option<&str>,
    ) -> Self {
        let data = images
            .into_iter()
            .map(|b64_json| {
                let (url, b64_json) = match response_format {
                    ResponseFormat::B64Json => (None, Some(b64_json)),
                    // no file hosting, so hand back an inline data uri
                    ResponseFormat::Url => {
                        (Some(format!("data:image/png;base64,{}", b64_json)), None)
                    }
                };

                ImageData {
                    url,
                    b64_json,
                    revised_prompt: revised_prompt.map(|p| p.to_string()),
                }
            })
            .collect();

        Self {
            created: time::current_time_in_secs(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_format_wraps_images_in_data_uris() {
        let response =
            ImagesResponse::from_images(vec!["aW1n".to_string()], ResponseFormat::Url, None);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"][0]["url"], "data:image/png;base64,aW1n");
        assert!(value["data"][0].get("b64_json").is_none());
        assert!(value["data"][0].get("revised_prompt").is_none());
    }

    #[test]
    fn b64_format_keeps_order_and_revised_prompt() {
        let response = ImagesResponse::from_images(
            vec!["Zmlyc3Q=".to_string(), "c2Vjb25k".to_string()],
            ResponseFormat::B64Json,
            Some("a cat on a windowsill"),
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"][0]["b64_json"], "Zmlyc3Q=");
        assert_eq!(value["data"][1]["b64_json"], "c2Vjb25k");
        assert_eq!(value["data"][1]["revised_prompt"], "a cat on a windowsill");
        assert!(value["data"][0].get("url").is_none());
    }
}
