use std::{
    fs,
    io::{self, Write},
    process,
};

use jobs_section::{
    application::{
        error::AppError,
        render::{JobsSectionRenderer, RenderOptions},
    },
    config::{self, Command, RenderArgs, ValidateArgs},
    infra::{content::load_section, error::InfraError, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let chain = error.messages().join(": ");

    if dispatcher::has_been_set() {
        error!(error = %chain, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %chain, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    match cli_args.command {
        Command::Render(args) => run_render(&settings, args),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_render(settings: &config::Settings, args: RenderArgs) -> Result<(), AppError> {
    let section = load_section(&args.input)?;
    let renderer = JobsSectionRenderer::with_options(RenderOptions::from(&settings.render));
    let html = renderer.render(&section)?;

    match args.output.as_ref() {
        Some(path) => {
            fs::write(path, &html).map_err(InfraError::from)?;
            info!(
                input = %args.input.display(),
                output = %path.display(),
                bytes = html.len(),
                "rendered jobs section"
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").map_err(InfraError::from)?;
        }
    }

    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let section = load_section(&args.input)?;
    let summary = section.summary();

    info!(
        input = %args.input.display(),
        categories = summary.categories,
        items = summary.items,
        actions = summary.actions,
        "content is valid"
    );
    println!("{}: {summary}", args.input.display());

    Ok(())
}
