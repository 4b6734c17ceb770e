//! Field contracts for flow inputs and outputs.
//!
//! A [`Schema`] is a fixed list of named, typed, described fields. The same
//! declaration validates caller input, tells the model what shape to answer
//! in, and checks the model's answer.

use serde_json::{Map, Value};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    pub fn json_type(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

impl Field {
    pub const fn text(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: FieldKind::Text, description }
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: FieldKind::Number, description }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks `value` against every declared field, in declaration order.
    /// The first offending field is named in the error.
    pub fn validate<'a>(&self, value: &'a Value) -> Result<&'a Value> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::validation(self.name, "expected a JSON object"))?;
        for field in self.fields {
            check_field(field, object)?;
        }
        Ok(value)
    }

    /// Text for every declared field of an already validated value, keyed by
    /// field name. Numbers are written as plain decimals.
    pub fn field_text(&self, value: &Value) -> Result<Vec<(&'static str, String)>> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::validation(self.name, "expected a JSON object"))?;
        self.fields
            .iter()
            .map(|field| {
                let text = match object.get(field.name) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => match n.as_f64() {
                        // f64 Display drops a trailing `.0`
                        Some(f) if n.is_f64() => f.to_string(),
                        _ => n.to_string(),
                    },
                    _ => return Err(AppError::validation(field.name, "missing")),
                };
                Ok((field.name, text))
            })
            .collect()
    }

    /// Plain-text contract appended to prompts so the model answers with
    /// exactly this shape.
    pub fn instructions(&self) -> String {
        let mut out = String::from(
            "Respond with a single JSON object and nothing else. \
             Do not wrap it in Markdown. The object must contain exactly these fields:\n",
        );
        for field in self.fields {
            out.push_str(&format!(
                "- \"{}\" ({}): {}\n",
                field.name,
                field.kind.json_type(),
                field.description
            ));
        }
        out
    }
}

fn check_field(field: &Field, object: &Map<String, Value>) -> Result<()> {
    let value = object
        .get(field.name)
        .ok_or_else(|| AppError::validation(field.name, "is required"))?;
    match (field.kind, value) {
        (FieldKind::Text, Value::String(s)) if s.trim().is_empty() => {
            Err(AppError::validation(field.name, "must not be empty"))
        }
        (FieldKind::Text, Value::String(_)) => Ok(()),
        (FieldKind::Number, Value::Number(n)) if n.as_f64().is_some_and(f64::is_finite) => Ok(()),
        (kind, _) => Err(AppError::validation(
            field.name,
            format!("expected a {}", kind.json_type()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: Schema = Schema {
        name: "Sample",
        fields: &[
            Field::text("notes", "Free-text notes."),
            Field::number("rate", "A rate."),
        ],
    };

    #[test]
    fn accepts_conforming_object_unchanged() {
        let value = json!({"notes": "ok", "rate": 85, "extra": true});
        assert_eq!(SAMPLE.validate(&value).unwrap(), &value);
    }

    #[test]
    fn names_missing_field() {
        let err = SAMPLE.validate(&json!({"rate": 1})).unwrap_err();
        assert_eq!(err.field(), Some("notes"));
    }

    #[test]
    fn rejects_blank_text_and_mistyped_number() {
        let err = SAMPLE.validate(&json!({"notes": "   ", "rate": 1})).unwrap_err();
        assert_eq!(err.field(), Some("notes"));

        let err = SAMPLE.validate(&json!({"notes": "x", "rate": "85"})).unwrap_err();
        assert_eq!(err.field(), Some("rate"));
    }

    #[test]
    fn rejects_non_object() {
        let err = SAMPLE.validate(&json!(["notes"])).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn field_text_formats_numbers_as_decimals() {
        let value = json!({"notes": "a\nb", "rate": 85});
        let fields = SAMPLE.field_text(&value).unwrap();
        assert_eq!(fields, vec![("notes", "a\nb".to_string()), ("rate", "85".to_string())]);

        let value = json!({"notes": "x", "rate": 85.0});
        assert_eq!(SAMPLE.field_text(&value).unwrap()[1].1, "85");
        let value = json!({"notes": "x", "rate": 72.5});
        assert_eq!(SAMPLE.field_text(&value).unwrap()[1].1, "72.5");
    }

    #[test]
    fn instructions_list_every_field() {
        let text = SAMPLE.instructions();
        assert!(text.contains("\"notes\" (string): Free-text notes."));
        assert!(text.contains("\"rate\" (number): A rate."));
    }
}
