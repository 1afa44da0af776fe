use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }

    /// Module path of the template that failed.
    pub fn origin(&self) -> &'static str {
        self.source
    }
}

pub fn render_template<T: Template>(template: T) -> Result<String, TemplateRenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
    })
}

/// A `data-*` attribute forwarded onto the section root.
#[derive(Clone, Debug)]
pub struct AttributeView {
    pub name: String,
    pub value: String,
}

/// Plain-text element (heading, paragraph) with its classes.
#[derive(Clone, Debug)]
pub struct TextView {
    pub text: String,
    pub class: String,
    pub field_path: Option<String>,
}

#[derive(Clone, Debug)]
pub struct JobsSectionView {
    pub id: Option<String>,
    pub attributes: Vec<AttributeView>,
    pub class: String,
    pub style: Option<String>,
    pub wrapper_class: String,
    pub column_class: String,
    pub title: Option<TextView>,
    pub subtitle: Option<TextView>,
    pub categories: Option<CategoryListView>,
}

#[derive(Clone, Debug)]
pub struct CategoryListView {
    pub class: String,
    pub field_path: Option<String>,
    pub entries: Vec<JobCategoryView>,
}

#[derive(Clone, Debug)]
pub struct JobCategoryView {
    pub field_path: Option<String>,
    pub title: Option<TextView>,
    pub items: Option<JobItemListView>,
}

#[derive(Clone, Debug)]
pub struct JobItemListView {
    pub field_path: Option<String>,
    pub entries: Vec<JobItemView>,
}

#[derive(Clone, Debug)]
pub struct JobItemView {
    pub field_path: Option<String>,
    pub title: Option<TextView>,
    pub location: Option<TextView>,
    pub text: Option<MarkdownView>,
    pub actions: Option<ActionRowView>,
}

/// Pre-rendered markdown wrapped in a block container.
#[derive(Clone, Debug)]
pub struct MarkdownView {
    pub class: String,
    pub field_path: Option<String>,
    pub html: String,
}

#[derive(Clone, Debug)]
pub struct ActionRowView {
    pub class: String,
    pub field_path: Option<String>,
    /// Pre-rendered action markup, in content order.
    pub entries: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ActionView {
    pub href: String,
    pub class: String,
    pub aria_label: Option<String>,
    pub new_window: bool,
    pub label: Option<String>,
    pub icon_before: Option<String>,
    pub icon_after: Option<String>,
    pub field_path: Option<String>,
}

#[derive(Template)]
#[template(path = "jobs_section.html")]
pub struct JobsSectionTemplate {
    pub view: JobsSectionView,
}

#[derive(Template)]
#[template(path = "partials/action.html")]
pub struct ActionTemplate {
    pub view: ActionView,
}
