// https://platform.openai.com/docs/guides/images/prompting

use serde_json::{json, Value};

use crate::{
    app::{env::Envy, models::api_error::ApiError},
    config::models::settings::EnhancedPromptSettings,
    images::errors::ImagesApiError,
};

use super::structs::chat_completion_response::ChatCompletionResponse;

pub const AS_IS_MARKER: &str = "I NEED to test how the tool works with extremely simple prompts. DO NOT add any detail, just use it AS-IS:";

const INSTRUCTION: &str = r#"Rules for generating prompts based on user input:
1. **Description of the object or scene (5-7 words).** Briefly indicate what or who should be depicted, focusing on the main object or plot.
2. **Key characteristics (10-20 words).** Describe important features of the object, character, or scene elements that are key to visualization.
3. **Environment or background (10-15 words).** Provide context for the location or surroundings in which the object is situated, adding depth and atmosphere.
4. **Combination or blending of elements (10-15 words).** If applicable, explain how different aspects or characteristics combine or blend to create a unique image.
5. **Symbolic or emotional significance (10-15 words).** Express the intended symbolic meaning or emotions that the image should evoke.
6. **Lighting and time of day (3-5 words).** Specify the lighting and time of day to add to the visual mood of the scene.
7. **Additional details (5-10 words).** Include specific or important details that will complement and clarify the visualization.
8. **Overall mood or impression (3-7 words).** Conclude with a description of the overall mood or main impression that the image should convey.

Write everything in 1 sentence (not a list), separating with commas, in English, strictly following the instruction (especially the number of words). Provide descriptions that are direct and literal, avoiding metaphors and figurative language, and exclude specific features like "Velvet shadows." Focus on explicit and clear depiction of features, surroundings, element combinations, symbolic significance, lighting, additional details, and overall mood without using commonly associated expressions or imagery."#;

const ACKNOWLEDGEMENT: &str =
    "Understood, provide the input and I will generate a complete description of a scene.";

const EXAMPLE_PROMPT: &str = "photo of an ancient castle very atmospheric, but the sky should be completely covered in clouds, yet it should be bright.";

const EXAMPLE_REPLY: &str = "photo of an ancient castle with a majestic, eerie ambiance, highlighting its towering spires, weathered stone, and ivy-clad walls, set against a backdrop of a dense, mystic forest under a sky completely shrouded in clouds yet illuminated by a diffused, ethereal light, where the fusion of natural decay and enduring architectural grandeur evokes a sense of timeless mystery and the eternal battle between man and nature, casting a glow that reveals subtle details and textures, creating an impression of haunting beauty and solemn tranquility. ";

struct ChatBackend {
    base_url: String,
    api_key: Option<String>,
    model: String,
}

pub struct PromptEnhancer {
    client: reqwest::Client,
    backend: Option<ChatBackend>,
}

impl PromptEnhancer {
    pub fn new(
        client: reqwest::Client,
        base_url: Option<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        let model = model.into();

        Self {
            client,
            backend: base_url.map(|base_url| ChatBackend {
                base_url,
                api_key,
                model,
            }),
        }
    }

    pub fn from_settings(
        client: reqwest::Client,
        settings: &EnhancedPromptSettings,
        envy: &Envy,
    ) -> Self {
        let base_url = envy
            .openai_base_url
            .clone()
            .or_else(|| settings.openai_base_url.clone());
        let api_key = envy
            .openai_api_key
            .clone()
            .or_else(|| settings.openai_api_key.clone());

        Self::new(client, base_url, api_key, settings.model.as_str())
    }

    pub async fn enhance(&self, prompt: &str) -> Result<String, ApiError> {
        if let Some(rest) = prompt.strip_prefix(AS_IS_MARKER) {
            return Ok(rest.to_string());
        }

        let Some(backend) = &self.backend else {
            return Ok(prompt.to_string());
        };

        let url = format!("{}/chat/completions", backend.base_url.trim_end_matches('/'));
        let mut request = self.client.post(url).json(&chat_request(&backend.model, prompt));
        if let Some(api_key) = &backend.api_key {
            request = request.bearer_auth(api_key);
        }

        let res = match request.send().await {
            Ok(res) => res,
            Err(e) => {
                tracing::error!("enhance failed to reach chat backend: {:?}", e);
                return Err(ImagesApiError::EnhancementFailed.value());
            }
        };

        let status = res.status();
        match res.text().await {
            Ok(text) if status.is_success() => {
                match serde_json::from_str::<ChatCompletionResponse>(&text) {
                    Ok(response) => match first_reply(response) {
                        Some(reply) => Ok(reply),
                        None => {
                            tracing::error!("enhance got a reply without content: {}", text);
                            Err(ImagesApiError::EnhancementFailed.value())
                        }
                    },
                    Err(_) => {
                        tracing::error!(%text);
                        Err(ImagesApiError::EnhancementFailed.value())
                    }
                }
            }
            Ok(text) => {
                tracing::error!("enhance returned {}: {}", status, text);
                Err(ImagesApiError::EnhancementFailed.value())
            }
            Err(e) => {
                tracing::error!(%e);
                Err(ImagesApiError::EnhancementFailed.value())
            }
        }
    }
}

fn chat_request(model: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "user", "content": INSTRUCTION },
            { "role": "assistant", "content": ACKNOWLEDGEMENT },
            { "role": "user", "content": EXAMPLE_PROMPT },
            { "role": "assistant", "content": EXAMPLE_REPLY },
            { "role": "user", "content": prompt },
        ],
        "temperature": 1.99,
        "max_tokens": 300,
        "top_p": 0.5,
        "stop": ["\n", "</s>"],
    })
}

fn first_reply(response: ChatCompletionResponse) -> Option<String> {
    response.choices.into_iter().next()?.message.content
}
