use async_trait::async_trait;
use serde_json::Value;

use super::{decode_json, ModelInvoker};
use crate::error::{AppError, Result};
use crate::models::{Prompt, Schema};

// GEMINI_MODEL is provided via environment (.env). No hard-coded default here.

pub struct GeminiClient {
    model: String,
}

impl GeminiClient {
    pub fn from_env() -> Result<Self> {
        // gemini-rs reads GEMINI_API_KEY itself; check it up front so a
        // missing key surfaces as Unauthorized instead of an upstream error.
        std::env::var("GEMINI_API_KEY").map_err(|_| AppError::Unauthorized)?;
        let model = std::env::var("GEMINI_MODEL")
            .map_err(|_| AppError::Other(anyhow::anyhow!("GEMINI_MODEL env var not set")))?;
        Ok(Self { model })
    }

    pub async fn complete(&self, prompt: Prompt) -> Result<String> {
        super::log_preview(self.name(), &prompt);
        let resp = gemini_rs::chat(&self.model)
            .send_message(&prompt.combined())
            .await
            .map_err(|e| AppError::Invocation(e.to_string()))?;
        Ok(resp.to_string())
    }
}

#[async_trait]
impl ModelInvoker for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn invoke(&self, prompt: &str, output: &Schema) -> Result<Value> {
        let text = self
            .complete(Prompt { system: output.instructions(), user: prompt.to_string() })
            .await?;
        decode_json(&text)
    }
}
