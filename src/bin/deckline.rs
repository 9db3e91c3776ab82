use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use deckline::{Severity, SlideSpec, TieredBuilder, validate_spec};

#[derive(Parser, Debug)]
#[command(name = "deckline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a slide spec and print the report.
    Validate(ValidateArgs),
    /// Run the tiered build and write the artifact as JSON.
    Build(BuildArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input slide spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Input slide spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output artifact JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => validate(args),
        Command::Build(args) => build(args),
    }
}

fn load_spec(path: &PathBuf) -> anyhow::Result<SlideSpec> {
    let file =
        File::open(path).with_context(|| format!("failed to open spec {}", path.display()))?;
    let spec: SlideSpec = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse spec {}", path.display()))?;
    Ok(spec)
}

fn validate(args: ValidateArgs) -> anyhow::Result<()> {
    let spec = load_spec(&args.in_path)?;
    let report = validate_spec(&spec);

    if report.issues.is_empty() {
        println!("ok: no issues");
        return Ok(());
    }
    for issue in &report.issues {
        let tag = match issue.severity {
            Severity::Structural => "error",
            Severity::Advisory => "warning",
        };
        println!("{tag} [{}] {}", issue.code, issue.message);
    }
    if !report.is_structurally_valid() {
        anyhow::bail!("spec has structural issues");
    }
    Ok(())
}

fn build(args: BuildArgs) -> anyhow::Result<()> {
    let spec = load_spec(&args.in_path)?;
    let builder = TieredBuilder::with_default_tiers();
    let result = builder
        .build(&spec)
        .context("tiered build failed")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    std::fs::write(&args.out, json)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    for warning in result.report.advisories() {
        eprintln!("warning [{}] {}", warning.code, warning.message);
    }
    println!(
        "built via '{}' stage ({} primitives) -> {}",
        result.stage,
        result.artifact.surface.primitives.len(),
        args.out.display()
    );
    Ok(())
}
