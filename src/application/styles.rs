//! Style keyword to utility class resolution.
//!
//! Every function here is total: an unrecognised keyword yields no class
//! rather than an error.

use crate::domain::styles::{StyleMap, StyleValue};

pub const DEFAULT_WIDTH: &str = "wide";
pub const DEFAULT_HEIGHT: &str = "auto";
pub const DEFAULT_JUSTIFY_CONTENT: &str = "center";

pub fn map_max_width_style(width: &str) -> Option<&'static str> {
    match width {
        "narrow" => Some("max-w-screen-md"),
        "wide" => Some("max-w-screen-xl"),
        "full" => Some("max-w-full"),
        _ => None,
    }
}

pub fn map_min_height_style(height: &str) -> Option<&'static str> {
    match height {
        "screen" => Some("min-h-screen"),
        _ => None,
    }
}

/// Maps a single style property/keyword pair to its utility class.
pub fn map_style_keyword(property: &str, value: &str) -> Option<&'static str> {
    let class = match (property, value) {
        ("fontWeight", "400") => "font-normal",
        ("fontWeight", "500") => "font-medium",
        ("fontWeight", "700") => "font-bold",
        ("fontStyle", "italic") => "italic",
        ("textAlign", "left") => "text-left",
        ("textAlign", "center") => "text-center",
        ("textAlign", "right") => "text-right",
        ("textAlign", "justify") => "text-justify",
        ("textDecoration", "underline") => "underline",
        ("textDecoration", "line-through") => "line-through",
        ("justifyContent", "flex-start") => "justify-start",
        ("justifyContent", "flex-end") => "justify-end",
        ("justifyContent", "center") => "justify-center",
        ("justifyContent", "space-between") => "justify-between",
        ("justifyContent", "space-around") => "justify-around",
        ("justifyContent", "space-evenly") => "justify-evenly",
        ("borderRadius", "none") => "rounded-none",
        ("borderRadius", "x-small") => "rounded-sm",
        ("borderRadius", "small") => "rounded",
        ("borderRadius", "medium") => "rounded-md",
        ("borderRadius", "large") => "rounded-lg",
        ("borderRadius", "x-large") => "rounded-xl",
        ("borderRadius", "2x-large") => "rounded-2xl",
        ("borderRadius", "full") => "rounded-full",
        ("borderStyle", "none") => "border-none",
        ("borderStyle", "solid") => "border-solid",
        ("borderStyle", "dashed") => "border-dashed",
        ("borderStyle", "dotted") => "border-dotted",
        ("borderStyle", "double") => "border-double",
        _ => return None,
    };
    Some(class)
}

fn map_style_value(property: &str, value: &StyleValue) -> Option<String> {
    match property {
        "padding" | "margin" => value.as_class_tokens(),
        _ => value
            .keyword()
            .and_then(|keyword| map_style_keyword(property, &keyword))
            .map(str::to_string),
    }
}

/// Maps a style map to a space-separated class list, `None` when nothing maps.
pub fn map_styles_to_class_names(styles: &StyleMap) -> Option<String> {
    let classes: Vec<String> = styles
        .iter()
        .filter_map(|(property, value)| map_style_value(property, value))
        .collect();

    (!classes.is_empty()).then(|| classes.join(" "))
}
