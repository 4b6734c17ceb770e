//! validate → render → invoke → validate-output, shared by every flow.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::clients::ModelInvoker;
use crate::error::{AppError, Result};
use crate::models::prompt;
use crate::models::Schema;

pub trait Flow {
    const NAME: &'static str;
    const INPUT: Schema;
    const OUTPUT: Schema;
    /// Prompt with one `{{field}}` placeholder per input field.
    const TEMPLATE: &'static str;

    type Request: Serialize + DeserializeOwned + Sync;
    type Response: Serialize + DeserializeOwned;
}

/// Builds a typed request from raw JSON, naming the first bad field.
pub fn parse<F: Flow>(body: Value) -> Result<F::Request> {
    F::INPUT.validate(&body)?;
    serde_json::from_value(body).map_err(|e| AppError::validation(F::INPUT.name, e.to_string()))
}

/// Renders the flow's prompt for `request` without calling any model.
pub fn render_prompt<F: Flow>(request: &F::Request) -> Result<String> {
    let value = serde_json::to_value(request).map_err(anyhow::Error::from)?;
    F::INPUT.validate(&value)?;
    let fields = F::INPUT.field_text(&value)?;
    prompt::render(F::TEMPLATE, &fields)
}

pub async fn run<F: Flow>(invoker: &dyn ModelInvoker, request: &F::Request) -> Result<F::Response> {
    let prompt = render_prompt::<F>(request).inspect_err(|e| {
        warn!(flow = F::NAME, error = %e, "rejected request");
    })?;
    info!(flow = F::NAME, provider = invoker.name(), prompt.len = prompt.len(), "invoking model");

    let raw = invoker.invoke(&prompt, &F::OUTPUT).await.inspect_err(|e| {
        warn!(flow = F::NAME, error = %e, "model call failed");
    })?;
    let response = decode::<F>(raw).inspect_err(|e| {
        warn!(flow = F::NAME, error = %e, "model answer did not match output schema");
    })?;
    info!(flow = F::NAME, "flow completed");
    Ok(response)
}

fn decode<F: Flow>(raw: Value) -> Result<F::Response> {
    F::OUTPUT.validate(&raw).map_err(AppError::into_decode)?;
    serde_json::from_value(raw).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::clients::ModelInvoker;
    use crate::error::{AppError, Result};
    use crate::models::Schema;

    /// Answers every call with a fixed value and remembers the prompts.
    pub struct Canned {
        answer: std::result::Result<Value, String>,
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        pub fn ok(answer: Value) -> Self {
            Self { answer: Ok(answer), calls: AtomicUsize::new(0), prompts: Mutex::new(Vec::new()) }
        }

        pub fn failing(message: &str) -> Self {
            Self { answer: Err(message.into()), calls: AtomicUsize::new(0), prompts: Mutex::new(Vec::new()) }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelInvoker for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn invoke(&self, prompt: &str, _output: &Schema) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer.clone().map_err(AppError::Invocation)
        }
    }
}
