//! CLI entry point for stagegate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `stagegate-app` crate.

mod logger;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use stagegate_app::{
    RunInput, default_context, describe_stage, exit_code, format_stage_banner, format_stage_list,
    parse_format, read_context, render_report, resolve, run_stage, write_output,
};
use stagegate_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "stagegate",
    version,
    about = "Stage-based readiness checks for software projects"
)]
struct Cli {
    /// Path to stagegate config TOML (missing file is allowed).
    #[arg(long, global = true, default_value = "stagegate.toml")]
    config: Utf8PathBuf,

    /// Log check execution to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a stage's checks and print the report.
    Run {
        /// Stage to run (mvp|production|enterprise). Defaults to the config's stage, then mvp.
        stage: Option<String>,

        /// Output format (text|json|markdown|html). Defaults to the config's format, then text;
        /// unknown names fall back to text.
        format: Option<String>,

        /// JSON file with the project facts to evaluate (defaults to a built-in sample).
        #[arg(long)]
        context: Option<Utf8PathBuf>,

        /// Write the report to this file instead of stdout.
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Start every check at once.
        #[arg(long, overrides_with = "no_concurrent")]
        concurrent: bool,

        /// Run checks one at a time even if the config enables concurrency.
        #[arg(long, overrides_with = "concurrent")]
        no_concurrent: bool,

        /// Stop after the first failing check (sequential runs only).
        #[arg(long, overrides_with = "no_stop_on_failure")]
        stop_on_failure: bool,

        /// Run every check even if the config enables stop-on-failure.
        #[arg(long, overrides_with = "stop_on_failure")]
        no_stop_on_failure: bool,
    },

    /// List the built-in stages.
    Stages,

    /// Print the resolved checks of a stage as JSON.
    Describe {
        /// Stage to describe (mvp|production|enterprise).
        stage: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = match cli.cmd {
        Commands::Run {
            stage,
            format,
            context,
            output,
            concurrent,
            no_concurrent,
            stop_on_failure,
            no_stop_on_failure,
        } => cmd_run(
            &cli.config,
            Overrides {
                stage,
                concurrent: flag_override(concurrent, no_concurrent),
                stop_on_first_failure: flag_override(stop_on_failure, no_stop_on_failure),
                format,
                output: output.map(String::from),
            },
            context,
        ),
        Commands::Stages => cmd_stages(),
        Commands::Describe { stage } => cmd_describe(
            &cli.config,
            Overrides {
                stage: Some(stage),
                ..Overrides::default()
            },
        ),
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("stagegate error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// `--flag` / `--no-flag` pair to an override; neither leaves the config value alone.
fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn read_config(path: &Utf8PathBuf) -> String {
    // Missing file is allowed (preset defaults apply).
    std::fs::read_to_string(path).unwrap_or_default()
}

fn cmd_run(
    config_path: &Utf8PathBuf,
    overrides: Overrides,
    context_path: Option<Utf8PathBuf>,
) -> anyhow::Result<i32> {
    let config_text = read_config(config_path);

    let context = match context_path {
        Some(path) => read_context(&path)?,
        None => default_context(),
    };

    let output = run_stage(RunInput {
        config_text: &config_text,
        overrides,
        context,
    })?;

    eprintln!(
        "Running {} validation...\n",
        output.resolved.spec.stage.as_str().to_uppercase()
    );
    eprint!("{}", format_stage_banner(&output.resolved.spec.metadata()));
    eprintln!();

    let format = parse_format(output.resolved.format.as_deref());
    let rendered = render_report(&output.document, format)?;

    match output.resolved.output.as_deref() {
        Some(path) => {
            let path = Utf8PathBuf::from(path);
            write_output(&path, &rendered).context("write report")?;
            eprintln!("Report written to {path}");
        }
        None => print!("{rendered}"),
    }

    Ok(exit_code(output.report.passed()))
}

fn cmd_stages() -> anyhow::Result<i32> {
    print!("{}", format_stage_list());
    Ok(0)
}

fn cmd_describe(config_path: &Utf8PathBuf, overrides: Overrides) -> anyhow::Result<i32> {
    let config_text = read_config(config_path);
    let resolved = resolve(&config_text, overrides)?;
    let description = describe_stage(&resolved.spec);
    let json = serde_json::to_string_pretty(&description).context("serialize description")?;
    println!("{json}");
    Ok(0)
}
