//! onehdr CLI
//!
//! Merges a header and everything it includes into a single header file.

use anyhow::{Context, Result};
use clap::Parser;
use onehdr_core::MergeConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onehdr")]
#[command(author, version, about = "Link C/C++ header files into one", long_about = None)]
struct Cli {
    /// Root header file
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Output header file (created or overwritten)
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: PathBuf,

    /// Text added at the beginning of the output
    #[arg(short, long)]
    initial_text: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum include nesting depth (0 = unlimited)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// How a run ended, with the message shown to the user
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Success(String),
    MissingInput(String),
    Failed(String),
}

impl Outcome {
    fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success(_) => 0,
            Outcome::MissingInput(_) => 1,
            Outcome::Failed(_) => 2,
        }
    }

    fn message(&self) -> &str {
        match self {
            Outcome::Success(msg) | Outcome::MissingInput(msg) | Outcome::Failed(msg) => msg,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    let outcome = execute(&cli);
    match outcome {
        Outcome::Failed(_) => eprintln!("{}", outcome.message()),
        _ => println!("{}", outcome.message()),
    }
    ExitCode::from(outcome.exit_code())
}

fn execute(cli: &Cli) -> Outcome {
    if !cli.input_file.exists() {
        return Outcome::MissingInput(format!(
            "Error: input file '{}' does not exist.",
            cli.input_file.display()
        ));
    }

    match run(cli) {
        Ok(()) => Outcome::Success(format!(
            "\nSuccess! \"{}\" has been merged into \"{}\".",
            cli.input_file.display(),
            cli.output_file.display()
        )),
        Err(e) => Outcome::Failed(format!("An unexpected error occurred: {:#}", e)),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Using config: {:?}", config);

    let result = onehdr_merge::merge_to_file(&cli.input_file, &cli.output_file, &config)
        .with_context(|| format!("merging {}", cli.input_file.display()))?;

    for unresolved in &result.unresolved {
        println!("   Kept unresolved {} (in {})", unresolved.directive, unresolved.from);
    }
    println!(
        "   Merged {} files, {} system includes",
        result.files.len(),
        result.system_includes.len()
    );

    Ok(())
}

fn load_config(cli: &Cli) -> Result<MergeConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => read_config(path)?,
        None => MergeConfig::default(),
    };

    if let Some(text) = &cli.initial_text {
        config.initial_text = text.clone();
    }
    if let Some(depth) = cli.max_depth {
        config.max_depth = depth;
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<MergeConfig> {
    MergeConfig::load(path).with_context(|| format!("loading config {}", path.display()))
}
