//! tfsum CLI entrypoint.
//!
//! Wires files, flags, and exit codes to the core analyzer and formatter.
//! Analysis and rendering are synchronous pure computations; everything here
//! is thin IO.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tfsum::analyzer::Analyzer;
use tfsum::cli::{Cli, Commands};
use tfsum::config::ConfigParser;
use tfsum::error::Result;
use tfsum::format::{render, RenderOptions};
use tfsum::plan::PlanDocument;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Parse { plan_file, detailed, format, output, no_color } => cmd_parse(
            cli.config.as_deref(),
            &plan_file,
            detailed,
            format.as_deref(),
            output.as_deref(),
            no_color,
        ),
        Commands::Generate { terraform_dir, plan_file, auto_parse, detailed } => {
            cmd_generate(cli.config.as_deref(), &terraform_dir, &plan_file, auto_parse, detailed)
        }
    }
}

/// Parse a plan file and print the summary.
fn cmd_parse(
    config_path: Option<&Path>,
    plan_file: &Path,
    detailed: bool,
    format: Option<&str>,
    output: Option<&Path>,
    no_color: bool,
) -> Result<()> {
    let config = ConfigParser::new().load_or_default(config_path)?;

    // Validate options before touching the plan so bad filter values fail
    // fast with their own exit code.
    let analyzer_options = config.analyzer_options()?;
    let render_options = RenderOptions {
        format: config.resolve_format(format)?,
        detailed,
        display: config.display_options(),
    };

    if no_color {
        colored::control::set_override(false);
    }

    let bytes = read_plan_bytes(plan_file)?;
    let document = PlanDocument::from_slice(&bytes)?;
    let summary = Analyzer::with_options(analyzer_options).analyze(&document)?;
    let rendered = render(&summary, &render_options)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            eprintln!("Output saved to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Reads the plan file, or stdin when the path is `-`.
fn read_plan_bytes(plan_file: &Path) -> Result<Vec<u8>> {
    if plan_file == Path::new("-") {
        debug!("Reading plan from stdin");
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        debug!("Reading plan from {}", plan_file.display());
        Ok(std::fs::read(plan_file)?)
    }
}

/// Generate a plan JSON file with terraform, optionally parse it.
fn cmd_generate(
    config_path: Option<&Path>,
    terraform_dir: &Path,
    plan_file: &Path,
    auto_parse: bool,
    detailed: bool,
) -> Result<()> {
    info!("Generating Terraform plan in {}", terraform_dir.display());

    let binary_plan = terraform_dir.join("plan.tfplan");

    let plan_status = std::process::Command::new("terraform")
        .arg("plan")
        .arg(format!("-out={}", binary_plan.display()))
        .current_dir(terraform_dir)
        .status()?;
    if !plan_status.success() {
        return Err(tfsum::TfsumError::internal(format!(
            "terraform plan exited with status {plan_status}"
        )));
    }

    info!("Converting plan to JSON");
    let show = std::process::Command::new("terraform")
        .arg("show")
        .arg("-json")
        .arg(&binary_plan)
        .current_dir(terraform_dir)
        .output()?;
    if !show.status.success() {
        return Err(tfsum::TfsumError::internal(format!(
            "terraform show exited with status {}",
            show.status
        )));
    }

    std::fs::write(plan_file, &show.stdout)?;
    eprintln!("Plan saved to {}", plan_file.display());

    // The binary plan is only an intermediate artifact.
    let _ = std::fs::remove_file(&binary_plan);

    if auto_parse {
        cmd_parse(config_path, plan_file, detailed, None, None, false)?;
    }

    Ok(())
}
