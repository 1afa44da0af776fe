//! Loading jobs section content from JSON or TOML files.

use std::{fs, path::Path};

use tracing::debug;

use crate::domain::{error::ContentError, jobs::JobsSection};

use super::error::InfraError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Toml,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(ContentFormat::Json),
            "toml" => Ok(ContentFormat::Toml),
            _ => Err(ContentError::unsupported_format(extension)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentFormat::Json => "json",
            ContentFormat::Toml => "toml",
        }
    }
}

pub fn parse_section(source: &str, format: ContentFormat) -> Result<JobsSection, ContentError> {
    match format {
        ContentFormat::Json => serde_json::from_str(source)
            .map_err(|err| ContentError::parse(format.as_str(), err.to_string())),
        ContentFormat::Toml => toml::from_str(source)
            .map_err(|err| ContentError::parse(format.as_str(), err.to_string())),
    }
}

/// Read and parse a section file, picking the format from its extension.
pub fn load_section(path: &Path) -> Result<JobsSection, InfraError> {
    let format = ContentFormat::from_path(path).map_err(|err| InfraError::content(path, err))?;
    let source = fs::read_to_string(path)?;
    let section = parse_section(&source, format).map_err(|err| InfraError::content(path, err))?;

    debug!(
        path = %path.display(),
        format = format.as_str(),
        categories = section.categories.len(),
        "loaded jobs section content"
    );

    Ok(section)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ContentFormat::from_path(Path::new("jobs.JSON")).ok(),
            Some(ContentFormat::Json)
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("content/jobs.toml")).ok(),
            Some(ContentFormat::Toml)
        );
        assert!(matches!(
            ContentFormat::from_path(Path::new("jobs.yaml")),
            Err(ContentError::UnsupportedFormat { extension }) if extension == "yaml"
        ));
        assert!(ContentFormat::from_path(Path::new("jobs")).is_err());
    }

    #[test]
    fn toml_content_parses_nested_tables() {
        let source = r#"
title = "Careers"
colors = "colors-b"

[styles.self]
width = "full"

[[categories]]
title = "Engineering"

[[categories.items]]
title = "Backend Engineer"
location = "Remote"

[[categories.items.actions]]
label = "Apply"
url = "/apply"
"#;

        let section = parse_section(source, ContentFormat::Toml).expect("toml parses");
        assert_eq!(section.title(), Some("Careers"));
        let item = &section.categories[0].items[0];
        assert_eq!(item.location(), Some("Remote"));
        assert_eq!(item.actions[0].href(), "/apply");
        assert_eq!(
            section
                .styles
                .and_then(|styles| styles.section)
                .and_then(|styles| styles.width)
                .as_deref(),
            Some("full")
        );
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = parse_section("{ \"categories\": 4 }", ContentFormat::Json)
            .expect_err("categories must be a list");
        assert!(matches!(err, ContentError::Parse { format: "json", .. }));
    }

    #[test]
    fn load_section_reads_file_from_disk() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        file.write_all(br#"{ "title": "Careers", "categories": [] }"#)
            .expect("write content");

        let section = load_section(file.path()).expect("load section");
        assert_eq!(section.title(), Some("Careers"));
        assert!(section.categories.is_empty());
    }

    #[test]
    fn load_section_wraps_errors_with_path() {
        let file = NamedTempFile::new().expect("temp file");
        let err = load_section(file.path()).expect_err("no extension");
        assert!(matches!(err, InfraError::Content { .. }));
    }
}
