//! Runtime settings, read from the environment (and `.env` when present).

use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi,
}

impl Provider {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" | "googleai" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            other => Err(AppError::Other(anyhow::anyhow!("unknown LLM_PROVIDER `{other}`"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub provider: Provider,
    pub timeout: Duration,
    /// When set, callers must send a matching `x-api-key` header.
    pub api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let provider = match lookup("LLM_PROVIDER") {
            Some(raw) if !raw.trim().is_empty() => Provider::parse(&raw)?,
            _ => Provider::Gemini,
        };
        let timeout = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => parse_timeout(&raw)?,
            _ => DEFAULT_TIMEOUT,
        };
        let api_key = lookup("X_API_KEY").filter(|k| !k.is_empty());
        Ok(Self { provider, timeout, api_key })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Other(anyhow::anyhow!("invalid LLM_TIMEOUT_SECS `{raw}`: {e}")))?;
    if secs == 0 {
        return Err(AppError::Other(anyhow::anyhow!("LLM_TIMEOUT_SECS must be at least 1")));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings> {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.provider, Provider::Gemini);
        assert_eq!(s.timeout, DEFAULT_TIMEOUT);
        assert!(s.api_key.is_none());
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[("LLM_PROVIDER", "OpenAI"), ("LLM_TIMEOUT_SECS", "5"), ("X_API_KEY", "k")]).unwrap();
        assert_eq!(s.provider, Provider::OpenAi);
        assert_eq!(s.timeout, Duration::from_secs(5));
        assert_eq!(s.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(settings(&[("LLM_PROVIDER", "mystery")]).is_err());
        assert!(settings(&[("LLM_TIMEOUT_SECS", "soon")]).is_err());
        assert!(settings(&[("LLM_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn blank_timeout_means_default() {
        let s = settings(&[("LLM_TIMEOUT_SECS", "  ")]).unwrap();
        assert_eq!(s.timeout, DEFAULT_TIMEOUT);
    }
}
