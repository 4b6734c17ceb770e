//! Model invokers: the boundary to the external generative-text services.

pub mod gemini;
pub mod openai;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::{Provider, Settings};
use crate::error::{AppError, Result};
use crate::models::{Prompt, Schema};

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

/// Sends a prompt to a model and returns its answer as JSON shaped like
/// `output`. Implementations do not validate the fields; flows do.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    fn name(&self) -> &'static str;

    async fn invoke(&self, prompt: &str, output: &Schema) -> Result<Value>;
}

/// Fails with [`AppError::Invocation`] when the inner call outlives `timeout`.
pub struct Timed<I> {
    inner: I,
    timeout: Duration,
}

impl<I> Timed<I> {
    pub fn new(inner: I, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<I: ModelInvoker> ModelInvoker for Timed<I> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn invoke(&self, prompt: &str, output: &Schema) -> Result<Value> {
        tokio::time::timeout(self.timeout, self.inner.invoke(prompt, output))
            .await
            .map_err(|_| {
                AppError::Invocation(format!("{} did not answer within {:?}", self.inner.name(), self.timeout))
            })?
    }
}

#[async_trait]
impl<I: ModelInvoker + ?Sized> ModelInvoker for Arc<I> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn invoke(&self, prompt: &str, output: &Schema) -> Result<Value> {
        (**self).invoke(prompt, output).await
    }
}

/// Builds the configured provider client, wrapped in the configured deadline.
pub fn from_settings(settings: &Settings) -> Result<Box<dyn ModelInvoker>> {
    let invoker: Box<dyn ModelInvoker> = match settings.provider {
        Provider::Gemini => Box::new(Timed::new(GeminiClient::from_env()?, settings.timeout)),
        Provider::OpenAi => Box::new(Timed::new(OpenAiClient::from_env()?, settings.timeout)),
    };
    Ok(invoker)
}

/// Pulls the JSON object out of a completion, tolerating Markdown fences
/// and chatter around it. Each `{` is tried in turn; the first one that
/// starts a complete JSON object wins and anything after it is ignored.
pub fn decode_json(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    let mut last_error = None;
    for (start, _) in trimmed.match_indices('{') {
        let mut values = serde_json::Deserializer::from_str(&trimmed[start..]).into_iter::<Value>();
        match values.next() {
            Some(Ok(value)) if value.is_object() => return Ok(value),
            Some(Ok(_)) => {}
            Some(Err(e)) => last_error = Some(e),
            None => {}
        }
    }
    Err(AppError::Decode(match last_error {
        Some(e) => format!("invalid JSON in response: {e}"),
        None => format!("no JSON object in response `{}`", preview(trimmed)),
    }))
}

fn log_preview(provider: &str, prompt: &Prompt) {
    debug!(
        provider,
        system.len = prompt.system.len(),
        user.len = prompt.user.len(),
        user.preview = %preview(&prompt.user),
        "sending prompt"
    );
}

fn preview(s: &str) -> String {
    s.chars().take(80).collect()
}
