use async_trait::async_trait;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::Credentials;
use serde_json::Value;

use super::{decode_json, ModelInvoker};
use crate::error::{AppError, Result};
use crate::models::{Prompt, Schema};

pub struct OpenAiClient {
    creds: Credentials,
    model: String,
}

impl OpenAiClient {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| AppError::Unauthorized)?;
        let base = std::env::var("OPENAI_BASE_URL")
            .map_err(|_| AppError::Other(anyhow::anyhow!("Missing OPENAI_BASE_URL")))?;
        let model = std::env::var("OPENAI_MODEL")
            .map_err(|_| AppError::Other(anyhow::anyhow!("Missing OPENAI_MODEL")))?;
        Ok(Self { creds: Credentials::new(api_key, base), model })
    }

    pub async fn complete(&self, prompt: Prompt) -> Result<String> {
        super::log_preview(self.name(), &prompt);
        let messages = vec![
            ChatCompletionMessage {
                role: ChatCompletionMessageRole::System,
                content: Some(prompt.system),
                name: None,
                function_call: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: ChatCompletionMessageRole::User,
                content: Some(prompt.user),
                name: None,
                function_call: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ];

        let completion = ChatCompletion::builder(&self.model, messages)
            .temperature(0.0)
            .credentials(self.creds.clone())
            .create()
            .await
            .map_err(|e| AppError::Invocation(e.to_string()))?;

        completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .map(|c| c.to_string())
            .ok_or_else(|| AppError::Decode("completion had no content".into()))
    }
}

#[async_trait]
impl ModelInvoker for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn invoke(&self, prompt: &str, output: &Schema) -> Result<Value> {
        let text = self
            .complete(Prompt { system: output.instructions(), user: prompt.to_string() })
            .await?;
        decode_json(&text)
    }
}
