//! Call-to-action rendering.

use crate::application::classes::ClassList;
use crate::application::render::RenderError;
use crate::domain::actions::{Action, ActionKind, IconPosition};
use crate::presentation::views::{ActionTemplate, ActionView, render_template};

/// Renders one action given its data, a class shared by every action in the
/// row and an optional field-path annotation.
pub trait ActionRenderer: Send + Sync {
    fn render(
        &self,
        action: &Action,
        class_name: &str,
        field_path: Option<&str>,
    ) -> Result<String, RenderError>;
}

/// Renders actions as anchors styled as buttons or plain links.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorActionRenderer;

impl AnchorActionRenderer {
    pub fn view(action: &Action, class_name: &str, field_path: Option<&str>) -> ActionView {
        let class = match action.kind {
            ActionKind::Button => ClassList::new()
                .with("sb-component sb-component-block sb-component-button")
                .with(format!("sb-component-button-{}", action.style.as_str())),
            ActionKind::Link => ClassList::new().with("sb-component sb-component-block sb-component-link"),
        }
        .with(class_name)
        .build();

        let icon = action.visible_icon().map(str::to_string);
        let (icon_before, icon_after) = match action.icon_position {
            IconPosition::Left => (icon, None),
            IconPosition::Right => (None, icon),
        };

        ActionView {
            href: action.href().to_string(),
            class,
            aria_label: action.alt_text().map(str::to_string),
            new_window: action.new_window,
            label: action.label().map(str::to_string),
            icon_before,
            icon_after,
            field_path: field_path.map(str::to_string),
        }
    }
}

impl ActionRenderer for AnchorActionRenderer {
    fn render(
        &self,
        action: &Action,
        class_name: &str,
        field_path: Option<&str>,
    ) -> Result<String, RenderError> {
        let view = Self::view(action, class_name, field_path);
        Ok(render_template(ActionTemplate { view })?)
    }
}
