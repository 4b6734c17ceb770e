//! `{{name}}` placeholder templates.

use crate::error::{AppError, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A rendered request to a model: output contract plus the filled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    /// Both parts as one message, for providers without a system role.
    pub fn combined(&self) -> String {
        let system = self.system.trim();
        let user = self.user.trim();
        if system.is_empty() {
            user.to_string()
        } else {
            format!("{user}\n\n{system}")
        }
    }
}

/// Substitutes every placeholder in `template` with the matching value.
///
/// Values go in verbatim and are never rescanned, so user text containing
/// braces comes through untouched.
pub fn render<K, V>(template: &str, fields: &[(K, V)]) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let end = after
            .find(CLOSE)
            .ok_or_else(|| AppError::Template(format!("unterminated placeholder at `{}`", preview(after))))?;
        let name = after[..end].trim();
        let value = fields
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
            .ok_or_else(|| AppError::Template(format!("no value for placeholder `{name}`")))?;
        out.push_str(value);
        rest = &after[end + CLOSE.len()..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Placeholder names in order of appearance. Unterminated openers are ignored.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else { break };
        names.push(after[..end].trim());
        rest = &after[end + CLOSE.len()..];
    }
    names
}

fn preview(s: &str) -> String {
    s.chars().take(20).collect()
}
