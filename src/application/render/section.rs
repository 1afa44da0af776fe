use std::sync::Arc;

use tracing::debug;

use crate::application::actions::{ActionRenderer, AnchorActionRenderer};
use crate::application::classes::ClassList;
use crate::application::markdown::{MarkdownRenderer, markdown_renderer};
use crate::application::styles::{
    DEFAULT_HEIGHT, DEFAULT_JUSTIFY_CONTENT, DEFAULT_WIDTH, map_max_width_style,
    map_min_height_style, map_style_keyword, map_styles_to_class_names,
};
use crate::domain::jobs::{JobCategory, JobItem, JobsSection, present};
use crate::domain::styles::{SelfStyles, format_number};
use crate::presentation::views::{
    ActionRowView, AttributeView, CategoryListView, JobCategoryView, JobItemListView, JobItemView,
    JobsSectionTemplate, JobsSectionView, MarkdownView, TextView, render_template,
};

use super::types::{RenderError, RenderOptions};

const SECTION_BASE_CLASSES: &str = "sb-component sb-component-section sb-component-jobs-section";
const DEFAULT_PADDING: &str = "py-12 px-4";
const DEFAULT_BORDER_STYLE_CLASS: &str = "border-none";
const STACK_SPACING: &str = "space-y-16 lg:space-y-24";
const BLOCK_TOP_MARGIN: &str = "mt-10 lg:mt-12";
const ACTION_CLASS: &str = "mb-3 mx-2 lg:whitespace-nowrap";

/// Renders a [`JobsSection`] into HTML, delegating markdown descriptions and
/// call-to-action controls to their collaborators.
pub struct JobsSectionRenderer {
    options: RenderOptions,
    markdown: Arc<dyn MarkdownRenderer>,
    actions: Arc<dyn ActionRenderer>,
}

impl JobsSectionRenderer {
    pub fn new(
        options: RenderOptions,
        markdown: Arc<dyn MarkdownRenderer>,
        actions: Arc<dyn ActionRenderer>,
    ) -> Self {
        Self {
            options,
            markdown,
            actions,
        }
    }

    /// Renderer backed by the shared Comrak pipeline and anchor actions.
    pub fn with_options(options: RenderOptions) -> Self {
        let markdown = markdown_renderer(options.sanitize);
        Self::new(options, markdown, Arc::new(AnchorActionRenderer))
    }

    pub fn render(&self, section: &JobsSection) -> Result<String, RenderError> {
        let view = self.section_view(section)?;
        Ok(render_template(JobsSectionTemplate { view })?)
    }

    pub fn section_view(&self, section: &JobsSection) -> Result<JobsSectionView, RenderError> {
        debug!(
            categories = section.categories.len(),
            field_paths = self.options.field_paths,
            "rendering jobs section"
        );

        let styles = section.styles.as_ref();
        let self_styles = styles
            .and_then(|styles| styles.section.clone())
            .unwrap_or_default();

        let title = section.title().map(|text| TextView {
            text: text.to_string(),
            class: styles
                .and_then(|styles| styles.title.as_ref())
                .and_then(map_styles_to_class_names)
                .unwrap_or_default(),
            field_path: self.field_path(".title"),
        });

        let subtitle = section.subtitle().map(|text| TextView {
            text: text.to_string(),
            class: ClassList::new()
                .with("text-lg")
                .with("sm:text-xl")
                .with_opt(
                    styles
                        .and_then(|styles| styles.subtitle.as_ref())
                        .and_then(map_styles_to_class_names),
                )
                .with_if(title.is_some(), "mt-6")
                .build(),
            field_path: self.field_path(".subtitle"),
        });

        let categories = if section.categories.is_empty() {
            None
        } else {
            let entries = section
                .categories
                .iter()
                .enumerate()
                .map(|(index, category)| self.category_view(category, index))
                .collect::<Result<Vec<_>, _>>()?;
            Some(CategoryListView {
                class: ClassList::new()
                    .with(STACK_SPACING)
                    .with_if(title.is_some() || subtitle.is_some(), "mt-12 lg:mt-16")
                    .build(),
                field_path: self.field_path(".jobCategories"),
                entries,
            })
        };

        let justify = present(&self_styles.justify_content).unwrap_or(DEFAULT_JUSTIFY_CONTENT);
        let width = present(&self_styles.width).unwrap_or(DEFAULT_WIDTH);

        Ok(JobsSectionView {
            id: section.element_id().map(str::to_string),
            attributes: section
                .annotations()
                .map(|(name, value)| AttributeView {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            class: self.section_classes(section, &self_styles),
            style: border_width_style(&self_styles),
            wrapper_class: ClassList::new()
                .with("flex")
                .with("w-full")
                .with_opt(map_style_keyword("justifyContent", justify))
                .build(),
            column_class: ClassList::new()
                .with("w-full")
                .with_opt(map_max_width_style(width))
                .build(),
            title,
            subtitle,
            categories,
        })
    }

    fn section_classes(&self, section: &JobsSection, styles: &SelfStyles) -> String {
        let colors = section.colors.unwrap_or(self.options.default_colors);
        let height = present(&styles.height).unwrap_or(DEFAULT_HEIGHT);
        let border_radius = styles
            .border_radius
            .as_deref()
            .and_then(|radius| map_style_keyword("borderRadius", radius));
        let border_style = match styles.border_style.as_deref() {
            Some(style) if !style.is_empty() => map_style_keyword("borderStyle", style),
            _ => Some(DEFAULT_BORDER_STYLE_CLASS),
        };

        ClassList::new()
            .with(SECTION_BASE_CLASSES)
            .with_opt(section.custom_class())
            .with(colors.as_class())
            .with("flex flex-col justify-center")
            .with_opt(map_min_height_style(height))
            .with_opt(styles.margin.as_ref().and_then(|margin| margin.joined()))
            .with(
                styles
                    .padding
                    .as_ref()
                    .and_then(|padding| padding.joined())
                    .unwrap_or_else(|| DEFAULT_PADDING.to_string()),
            )
            .with_opt(styles.border_color.as_deref())
            .with_opt(border_radius)
            .with_opt(border_style)
            .build()
    }

    fn category_view(
        &self,
        category: &JobCategory,
        index: usize,
    ) -> Result<JobCategoryView, RenderError> {
        let title = category.title().map(|text| TextView {
            text: text.to_string(),
            class: "mb-10".to_string(),
            field_path: self.field_path(".title"),
        });

        let items = if category.items.is_empty() {
            None
        } else {
            let entries = category
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| self.item_view(item, index))
                .collect::<Result<Vec<_>, _>>()?;
            Some(JobItemListView {
                field_path: self.field_path(".items"),
                entries,
            })
        };

        Ok(JobCategoryView {
            field_path: self.field_path(format!(".{index}")),
            title,
            items,
        })
    }

    fn item_view(&self, item: &JobItem, index: usize) -> Result<JobItemView, RenderError> {
        let title = item.title().map(|text| TextView {
            text: text.to_string(),
            class: "text-xl font-normal".to_string(),
            field_path: self.field_path(".title"),
        });

        let location = item.location().map(|text| TextView {
            text: text.to_string(),
            class: ClassList::new()
                .with("text-xl")
                .with("font-bold")
                .with_if(title.is_some(), "mt-4")
                .build(),
            field_path: self.field_path(".location"),
        });

        let text = match item.text() {
            Some(markdown) => Some(MarkdownView {
                class: ClassList::new()
                    .with("sb-markdown")
                    .with_if(title.is_some() || location.is_some(), BLOCK_TOP_MARGIN)
                    .build(),
                field_path: self.field_path(".text"),
                html: self.markdown.render(markdown)?,
            }),
            None => None,
        };

        let actions = if item.actions.is_empty() {
            None
        } else {
            let entries = item
                .actions
                .iter()
                .enumerate()
                .map(|(index, action)| {
                    let path = self.field_path(format!(".{index}"));
                    self.actions.render(action, ACTION_CLASS, path.as_deref())
                })
                .collect::<Result<Vec<_>, _>>()?;
            Some(ActionRowView {
                class: ClassList::new()
                    .with("overflow-x-hidden")
                    .with_if(
                        title.is_some() || location.is_some() || text.is_some(),
                        BLOCK_TOP_MARGIN,
                    )
                    .build(),
                field_path: self.field_path(".actions"),
                entries,
            })
        };

        Ok(JobItemView {
            field_path: self.field_path(format!(".{index}")),
            title,
            location,
            text,
            actions,
        })
    }

    fn field_path(&self, path: impl Into<String>) -> Option<String> {
        self.options.field_paths.then(|| path.into())
    }
}

impl Default for JobsSectionRenderer {
    fn default() -> Self {
        Self::with_options(RenderOptions::default())
    }
}

/// Inline border width, only for a non-zero pixel value.
fn border_width_style(styles: &SelfStyles) -> Option<String> {
    styles
        .border_width
        .filter(|width| width.is_finite() && *width != 0.0)
        .map(|width| format!("border-width: {}px", format_number(width)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::jobs::ColorTheme;

    fn section(value: serde_json::Value) -> JobsSection {
        serde_json::from_value(value).expect("valid section")
    }

    fn renderer() -> JobsSectionRenderer {
        JobsSectionRenderer::default()
    }

    #[test]
    fn defaults_fill_in_container_classes() {
        let view = renderer()
            .section_view(&JobsSection::default())
            .expect("view");

        assert_eq!(
            view.class,
            "sb-component sb-component-section sb-component-jobs-section colors-a \
             flex flex-col justify-center py-12 px-4 border-none"
        );
        assert_eq!(view.wrapper_class, "flex w-full justify-center");
        assert_eq!(view.column_class, "w-full max-w-screen-xl");
        assert_eq!(view.style, None);
        assert_eq!(view.id, None);
        assert!(view.title.is_none());
        assert!(view.subtitle.is_none());
        assert!(view.categories.is_none());
    }

    #[test]
    fn explicit_styles_replace_defaults() {
        let view = renderer()
            .section_view(&section(json!({
                "elementId": "jobs",
                "customClass": "careers",
                "colors": "colors-d",
                "styles": {
                    "self": {
                        "width": "narrow",
                        "height": "screen",
                        "justifyContent": "flex-end",
                        "margin": ["mt-8"],
                        "padding": ["pt-20", "pb-20"],
                        "borderColor": "border-primary",
                        "borderRadius": "large",
                        "borderStyle": "dashed",
                        "borderWidth": 2
                    }
                }
            })))
            .expect("view");

        assert_eq!(
            view.class,
            "sb-component sb-component-section sb-component-jobs-section careers colors-d \
             flex flex-col justify-center min-h-screen mt-8 pt-20 pb-20 border-primary \
             rounded-lg border-dashed"
        );
        assert_eq!(view.style.as_deref(), Some("border-width: 2px"));
        assert_eq!(view.wrapper_class, "flex w-full justify-end");
        assert_eq!(view.column_class, "w-full max-w-screen-md");
        assert_eq!(view.id.as_deref(), Some("jobs"));
    }

    #[test]
    fn unknown_keywords_add_no_class() {
        let view = renderer()
            .section_view(&section(json!({
                "styles": { "self": { "width": "bogus", "height": "tall", "borderStyle": "wavy" } }
            })))
            .expect("view");

        assert_eq!(view.column_class, "w-full");
        assert!(!view.class.contains("min-h-screen"));
        assert!(!view.class.contains("border-none"));
    }

    #[test]
    fn empty_keywords_fall_back_to_defaults() {
        let view = renderer()
            .section_view(&section(json!({
                "styles": { "self": { "width": "", "height": "", "justifyContent": "" } }
            })))
            .expect("view");

        assert_eq!(view.wrapper_class, "flex w-full justify-center");
        assert_eq!(view.column_class, "w-full max-w-screen-xl");
        assert!(!view.class.contains("min-h-screen"));
    }

    #[test]
    fn zero_border_width_emits_no_style() {
        let view = renderer()
            .section_view(&section(json!({ "styles": { "self": { "borderWidth": 0 } } })))
            .expect("view");
        assert_eq!(view.style, None);
    }

    #[test]
    fn subtitle_margin_tracks_title_presence() {
        for (title, subtitle) in [(true, true), (true, false), (false, true), (false, false)] {
            let mut content = JobsSection::default();
            if title {
                content.title = Some("Careers".into());
            }
            if subtitle {
                content.subtitle = Some("Join us".into());
            }

            let view = renderer().section_view(&content).expect("view");
            match view.subtitle {
                Some(subtitle_view) => {
                    assert!(subtitle);
                    assert_eq!(subtitle_view.class.contains("mt-6"), title);
                }
                None => assert!(!subtitle),
            }
        }
    }

    #[test]
    fn categories_margin_requires_heading() {
        let content = section(json!({ "categories": [ { "title": "Design" } ] }));
        let view = renderer().section_view(&content).expect("view");
        let categories = view.categories.expect("categories rendered");
        assert_eq!(categories.class, "space-y-16 lg:space-y-24");

        let with_subtitle = JobsSection {
            subtitle: Some("Open roles".into()),
            ..content
        };
        let view = renderer().section_view(&with_subtitle).expect("view");
        assert_eq!(
            view.categories.expect("categories rendered").class,
            "space-y-16 lg:space-y-24 mt-12 lg:mt-16"
        );
    }

    #[test]
    fn item_blocks_gain_margin_only_after_preceding_content() {
        let content = section(json!({
            "categories": [{
                "items": [
                    { "text": "**bold**" },
                    { "location": "Remote", "actions": [ { "label": "Apply" } ] },
                    { "title": "Designer", "location": "Berlin" }
                ]
            }]
        }));

        let view = renderer().section_view(&content).expect("view");
        let categories = view.categories.expect("categories");
        let items = categories.entries[0].items.as_ref().expect("items");

        let text_only = &items.entries[0];
        assert_eq!(text_only.text.as_ref().expect("text").class, "sb-markdown");
        assert!(text_only.actions.is_none());

        let location_first = &items.entries[1];
        assert_eq!(
            location_first.location.as_ref().expect("location").class,
            "text-xl font-bold"
        );
        assert_eq!(
            location_first.actions.as_ref().expect("actions").class,
            "overflow-x-hidden mt-10 lg:mt-12"
        );

        let titled = &items.entries[2];
        assert_eq!(
            titled.location.as_ref().expect("location").class,
            "text-xl font-bold mt-4"
        );
    }

    #[test]
    fn field_paths_follow_content_positions() {
        let content = section(json!({
            "categories": [
                { "title": "Design" },
                { "items": [ {}, { "title": "SRE", "actions": [ {}, { "label": "Apply" } ] } ] }
            ]
        }));

        let view = renderer().section_view(&content).expect("view");
        let categories = view.categories.expect("categories");
        assert_eq!(categories.field_path.as_deref(), Some(".jobCategories"));

        let second = &categories.entries[1];
        assert_eq!(second.field_path.as_deref(), Some(".1"));
        let items = second.items.as_ref().expect("items");
        assert_eq!(items.field_path.as_deref(), Some(".items"));
        assert_eq!(items.entries[1].field_path.as_deref(), Some(".1"));

        let actions = items.entries[1].actions.as_ref().expect("actions");
        assert_eq!(actions.field_path.as_deref(), Some(".actions"));
        assert!(actions.entries[1].contains("data-sb-field-path=\".1\""));
    }

    #[test]
    fn field_paths_can_be_disabled() {
        let renderer = JobsSectionRenderer::with_options(RenderOptions {
            field_paths: false,
            ..Default::default()
        });
        let html = renderer
            .render(&section(json!({
                "title": "Careers",
                "categories": [ { "items": [ { "title": "SRE", "actions": [ {} ] } ] } ]
            })))
            .expect("render");

        assert!(!html.contains("data-sb-field-path"));
        assert!(html.contains("Careers"));
    }

    #[test]
    fn configured_default_colors_apply_when_unset() {
        let renderer = JobsSectionRenderer::with_options(RenderOptions {
            default_colors: ColorTheme::B,
            ..Default::default()
        });
        let view = renderer
            .section_view(&JobsSection::default())
            .expect("view");
        assert!(view.class.contains("colors-b"));
        assert!(!view.class.contains("colors-a"));
    }
}
