use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const TITLE: &str = "title";
pub const META_DESCRIPTION: &str = "meta_description";
pub const TARGET_AUDIENCE: &str = "target_audience";
pub const UNIQUE_ANGLE: &str = "unique_angle";
pub const SEARCH_INTENT: &str = "search_intent";
pub const TONE: &str = "tone";
pub const WORD_COUNT: &str = "word_count";
pub const H2_HEADINGS: &str = "h2_headings";
pub const CONTENT_GAPS: &str = "content_gaps";
pub const INTERNAL_LINKING_SUGGESTIONS: &str = "internal_linking_suggestions";
pub const CTA_SUGGESTION: &str = "cta_suggestion";

/// SEO content brief produced by the generation service for one keyword.
///
/// The JSON object is kept exactly as received so it can be forwarded to the
/// article endpoint and copied verbatim. Typed accessors read each field
/// leniently: a missing, empty or wrong-shaped value reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brief {
    document: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a JSON object for the brief, got {found}")]
pub struct BriefShapeError {
    pub found: &'static str,
}

impl Brief {
    pub fn from_value(value: Value) -> Result<Self, BriefShapeError> {
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => Err(BriefShapeError {
                found: json_kind(&other),
            }),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.text(TITLE)
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.text(META_DESCRIPTION)
    }

    pub fn target_audience(&self) -> Option<&str> {
        self.text(TARGET_AUDIENCE)
    }

    pub fn unique_angle(&self) -> Option<&str> {
        self.text(UNIQUE_ANGLE)
    }

    pub fn search_intent(&self) -> Option<&str> {
        self.text(SEARCH_INTENT)
    }

    pub fn tone(&self) -> Option<&str> {
        self.text(TONE)
    }

    pub fn cta_suggestion(&self) -> Option<&str> {
        self.text(CTA_SUGGESTION)
    }

    /// Recommended length. Only positive whole numbers count; `"1200"` or
    /// `0` read as absent.
    pub fn word_count(&self) -> Option<u64> {
        let Some(Value::Number(number)) = self.document.get(WORD_COUNT) else {
            return None;
        };
        number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.fract() == 0.0 && *value > 0.0 && *value < u64::MAX as f64)
                    .map(|value| value as u64)
            })
            .filter(|count| *count > 0)
    }

    pub fn h2_headings(&self) -> Vec<String> {
        self.items(H2_HEADINGS)
    }

    pub fn content_gaps(&self) -> Vec<String> {
        self.items(CONTENT_GAPS)
    }

    pub fn internal_linking_suggestions(&self) -> Vec<String> {
        self.items(INTERNAL_LINKING_SUGGESTIONS)
    }

    /// Two-space indented JSON, the payload of the brief copy button.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.document)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.document
            .get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    fn items(&self, key: &str) -> Vec<String> {
        match self.document.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(list_item_text).collect(),
            _ => Vec::new(),
        }
    }
}

fn list_item_text(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
