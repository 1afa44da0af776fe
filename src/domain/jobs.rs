use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{actions::Action, error::ContentError, styles::StyleConfig};

const ANNOTATION_PREFIX: &str = "data-";

/// Top-level jobs listing content block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobsSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub element_id: Option<String>,
    pub custom_class: Option<String>,
    pub colors: Option<ColorTheme>,
    pub styles: Option<StyleConfig>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<JobCategory>,
    /// Any remaining keys. Only `data-*` string entries are forwarded to the
    /// rendered root element; everything else (e.g. `type`) is ignored.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl JobsSection {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn subtitle(&self) -> Option<&str> {
        present(&self.subtitle)
    }

    pub fn element_id(&self) -> Option<&str> {
        present(&self.element_id)
    }

    pub fn custom_class(&self) -> Option<&str> {
        present(&self.custom_class)
    }

    /// Pass-through `data-*` annotations in key order. Keys that are not a
    /// well-formed attribute name are dropped.
    pub fn annotations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra.iter().filter_map(|(key, value)| {
            if !is_annotation_name(key) {
                return None;
            }
            value.as_str().map(|value| (key.as_str(), value))
        })
    }

    pub fn summary(&self) -> SectionSummary {
        let items = self
            .categories
            .iter()
            .map(|category| category.items.len())
            .sum();
        let actions = self
            .categories
            .iter()
            .flat_map(|category| category.items.iter())
            .map(|item| item.actions.len())
            .sum();

        SectionSummary {
            categories: self.categories.len(),
            items,
            actions,
        }
    }
}

/// Named grouping of job items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobCategory {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<JobItem>,
}

impl JobCategory {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }
}

/// A single job posting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobItem {
    pub title: Option<String>,
    pub location: Option<String>,
    /// Markdown description.
    pub text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,
}

impl JobItem {
    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn location(&self) -> Option<&str> {
        present(&self.location)
    }

    pub fn text(&self) -> Option<&str> {
        present(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSummary {
    pub categories: usize,
    pub items: usize,
    pub actions: usize,
}

impl fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "categories: {}, items: {}, actions: {}",
            self.categories, self.items, self.actions
        )
    }
}

/// Color scheme token applied to the section root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ColorTheme {
    #[default]
    #[serde(rename = "colors-a")]
    A,
    #[serde(rename = "colors-b")]
    B,
    #[serde(rename = "colors-c")]
    C,
    #[serde(rename = "colors-d")]
    D,
    #[serde(rename = "colors-e")]
    E,
    #[serde(rename = "colors-f")]
    F,
}

impl ColorTheme {
    pub fn as_class(self) -> &'static str {
        match self {
            ColorTheme::A => "colors-a",
            ColorTheme::B => "colors-b",
            ColorTheme::C => "colors-c",
            ColorTheme::D => "colors-d",
            ColorTheme::E => "colors-e",
            ColorTheme::F => "colors-f",
        }
    }
}

impl FromStr for ColorTheme {
    type Err = ContentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "colors-a" => Ok(ColorTheme::A),
            "colors-b" => Ok(ColorTheme::B),
            "colors-c" => Ok(ColorTheme::C),
            "colors-d" => Ok(ColorTheme::D),
            "colors-e" => Ok(ColorTheme::E),
            "colors-f" => Ok(ColorTheme::F),
            other => Err(ContentError::UnknownColorTheme {
                value: other.to_string(),
            }),
        }
    }
}

/// `data-` followed by at least one of `[A-Za-z0-9_.:-]`.
fn is_annotation_name(key: &str) -> bool {
    key.strip_prefix(ANNOTATION_PREFIX).is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
    })
}

/// Empty strings count as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Treats an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
