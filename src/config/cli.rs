use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the jobs-section binary.
#[derive(Debug, Parser)]
#[command(
    name = "jobs-section",
    version,
    about = "Render jobs listing sections to HTML"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "JOBS_SECTION_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a section content file to HTML.
    Render(RenderArgs),
    /// Parse a section content file and report what it contains.
    Validate(ValidateArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Section content file (`.json` or `.toml`).
    #[arg(value_name = "INPUT", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: RenderOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderOverrides {
    /// Omit `data-sb-field-path` annotations.
    #[arg(long = "no-field-paths", action = clap::ArgAction::SetTrue)]
    pub no_field_paths: bool,

    /// Emit markdown HTML without sanitisation.
    #[arg(long = "no-sanitize", action = clap::ArgAction::SetTrue)]
    pub no_sanitize: bool,

    /// Color theme used when the section does not name one (e.g. colors-b).
    #[arg(long = "default-colors", value_name = "THEME")]
    pub default_colors: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ValidateArgs {
    /// Section content file (`.json` or `.toml`).
    #[arg(value_name = "INPUT", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,
}
