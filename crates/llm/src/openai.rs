//! OpenAI-backed [`ActionSource`] over the chat completions API.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use chefbyte_core::InventoryItem;

use crate::config::OpenAiConfig;
use crate::error::LlmError;
use crate::parse::parse_actions;
use crate::prompt;
use crate::source::ActionSource;

const MAX_TOKENS: u32 = 300;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Content,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Content {
    Text(String),
    Parts(Vec<Part>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Part {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Chat-completions client that turns user input into proposed actions and
/// serves the recipe-suggestion pass-through.
#[derive(Debug, Clone)]
pub struct OpenAiActionSource {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiActionSource {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, LlmError> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }

    async fn complete(&self, messages: Vec<Message>, temperature: f32) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            max_tokens: MAX_TOKENS,
            temperature,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("reply contained no choices".to_string()))?;

        debug!(reply = %content, "model reply received");
        Ok(content.trim().to_string())
    }

    /// Recipe-suggestion pass-through: freeform text in, freeform text out,
    /// no reconciliation logic.
    pub async fn suggest_recipe(
        &self,
        user_input: &str,
        profile: &str,
        inventory: &[InventoryItem],
        inventory_only: bool,
    ) -> Result<String, LlmError> {
        let text = prompt::recipe_prompt(user_input, profile, inventory, inventory_only);
        debug!(prompt = %text, "recipe prompt");

        let messages = vec![
            Message {
                role: "system",
                content: Content::Text("You are a helpful assistant.".to_string()),
            },
            Message {
                role: "user",
                content: Content::Text(text),
            },
        ];
        // Creative temperature for suggestions, unlike the deterministic
        // action extraction.
        self.complete(messages, 1.0).await
    }
}

#[async_trait]
impl ActionSource for OpenAiActionSource {
    async fn propose_from_text(
        &self,
        user_input: &str,
        inventory: &[InventoryItem],
    ) -> Result<Vec<Value>, LlmError> {
        let text = prompt::mutation_prompt(user_input, inventory);
        debug!(prompt = %text, "mutation prompt");

        let messages = vec![
            Message {
                role: "system",
                content: Content::Text("You are a helpful assistant.".to_string()),
            },
            Message {
                role: "user",
                content: Content::Text(text),
            },
        ];
        let reply = self.complete(messages, 0.0).await?;
        parse_actions(&reply)
    }

    async fn propose_from_image(
        &self,
        image: &[u8],
        inventory: &[InventoryItem],
    ) -> Result<Vec<Value>, LlmError> {
        let text = prompt::image_prompt(inventory);
        let data_url = format!("data:image/jpeg;base64,{}", BASE64.encode(image));

        let messages = vec![Message {
            role: "user",
            content: Content::Parts(vec![
                Part::Text { text },
                Part::ImageUrl {
                    image_url: ImageUrl { url: data_url },
                },
            ]),
        }];
        let reply = self.complete(messages, 0.0).await?;
        parse_actions(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_request_serializes_to_chat_payload() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![Message {
                role: "user",
                content: Content::Text("hello".to_string()),
            }],
            max_tokens: MAX_TOKENS,
            temperature: 0.0,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], json!("gpt-4o"));
        assert_eq!(value["messages"][0]["role"], json!("user"));
        assert_eq!(value["messages"][0]["content"], json!("hello"));
    }

    #[test]
    fn image_part_serializes_as_data_url() {
        let part = Part::ImageUrl {
            image_url: ImageUrl {
                url: format!("data:image/jpeg;base64,{}", BASE64.encode(b"fake")),
            },
        };

        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["type"], json!("image_url"));
        assert_eq!(value["image_url"]["url"], json!("data:image/jpeg;base64,ZmFrZQ=="));
    }

    #[test]
    fn choice_content_deserializes() {
        let raw = json!({
            "choices": [{"message": {"role": "assistant", "content": "[]"}}],
            "usage": {"total_tokens": 12}
        });
        let parsed: ChatResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "[]");
    }
}
