use serde::Deserialize;

use super::jobs::{null_as_default, present};

const DEFAULT_ACTION_URL: &str = "#";

/// Call-to-action control attached to a job item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub label: Option<String>,
    pub alt_text: Option<String>,
    pub url: Option<String>,
    pub style: ActionStyle,
    #[serde(deserialize_with = "null_as_default")]
    pub show_icon: bool,
    pub icon: Option<String>,
    pub icon_position: IconPosition,
    #[serde(deserialize_with = "null_as_default")]
    pub new_window: bool,
}

impl Action {
    pub fn label(&self) -> Option<&str> {
        present(&self.label)
    }

    pub fn alt_text(&self) -> Option<&str> {
        present(&self.alt_text)
    }

    pub fn href(&self) -> &str {
        present(&self.url).unwrap_or(DEFAULT_ACTION_URL)
    }

    /// Icon name, only when the action asks for it to be shown.
    pub fn visible_icon(&self) -> Option<&str> {
        if self.show_icon {
            present(&self.icon)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ActionKind {
    #[default]
    Button,
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    #[default]
    Primary,
    Secondary,
}

impl ActionStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionStyle::Primary => "primary",
            ActionStyle::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}
