use std::collections::BTreeMap;

use serde::Deserialize;

/// Style keys keyed by their camelCase property name.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Nested style configuration for a section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(rename = "self")]
    pub section: Option<SelfStyles>,
    pub title: Option<StyleMap>,
    pub subtitle: Option<StyleMap>,
}

/// Styles applied to the section container itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelfStyles {
    pub width: Option<String>,
    pub height: Option<String>,
    pub justify_content: Option<String>,
    pub margin: Option<ClassTokens>,
    pub padding: Option<ClassTokens>,
    pub border_color: Option<String>,
    pub border_radius: Option<String>,
    pub border_style: Option<String>,
    /// Border width in pixels.
    pub border_width: Option<f64>,
}

/// Either a single class string or a list of class tokens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClassTokens {
    One(String),
    Many(Vec<String>),
}

impl ClassTokens {
    /// Joined tokens, `None` when nothing non-empty remains.
    pub fn joined(&self) -> Option<String> {
        match self {
            ClassTokens::One(value) => join_tokens([value]),
            ClassTokens::Many(values) => join_tokens(values),
        }
    }
}

/// A single style value as it appears in content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(f64),
    Tokens(Vec<String>),
}

impl StyleValue {
    /// Keyword form used for lookups (`700` and `"700"` are the same key).
    pub fn keyword(&self) -> Option<String> {
        match self {
            StyleValue::Text(value) => Some(value.trim().to_string()),
            StyleValue::Number(value) => Some(format_number(*value)),
            StyleValue::Tokens(_) => None,
        }
    }

    pub fn as_class_tokens(&self) -> Option<String> {
        match self {
            StyleValue::Text(value) => join_tokens([value]),
            StyleValue::Tokens(values) => join_tokens(values),
            StyleValue::Number(_) => None,
        }
    }
}

/// Trimmed, non-empty tokens joined by a space; `None` when none remain.
fn join_tokens<'a>(tokens: impl IntoIterator<Item = &'a String>) -> Option<String> {
    let joined = tokens
        .into_iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// Formats a number without a trailing `.0` for integral values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
