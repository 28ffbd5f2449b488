//! spdx-reconcile: merge and validate SPDX SBOM fragments

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use spdx_reconcile::{
    cli,
    config::{self, AppConfig, ConfigPreset, OutputFormat},
    pipeline::exit_codes,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spdx-reconcile")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(about = "Merge and validate SPDX SBOM fragments", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (no validation issues)
    1  Validation reported issues
    2  Error occurred

EXAMPLES:
    # Fold fragments from several scanners into one document
    spdx-reconcile merge syft.spdx.json scancode.spdx.json -O merged.spdx.json

    # Merge and check the result against the NTIA minimum elements
    spdx-reconcile --preset ntia merge *.spdx.json -O merged.spdx.json

    # Validate a document and emit a JSON report
    spdx-reconcile validate merged.spdx.json --ntia -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start from a named preset instead of the discovered config file
    /// (default, strict, ntia)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `merge` subcommand
#[derive(Parser)]
struct MergeArgs {
    /// Fragments to merge, in precedence order (earlier wins on conflicts)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Let later fragments restate the kind of an existing relationship
    #[arg(long)]
    replace_relationships: bool,

    /// Validate the merged document and report issues on stderr
    #[arg(long)]
    validate: bool,

    /// Also apply the NTIA minimum-elements rules when validating
    #[arg(long)]
    ntia: bool,

    /// Name of the merged document
    #[arg(long)]
    name: Option<String>,

    /// Namespace URI of the merged document
    #[arg(long)]
    namespace: Option<String>,

    /// Write JSON without indentation
    #[arg(long)]
    compact: bool,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Document to validate
    input: PathBuf,

    /// Apply the NTIA minimum-elements rules
    #[arg(long)]
    ntia: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Report issues but exit 0
    #[arg(long)]
    no_fail: bool,
}

/// Arguments for the `roots` subcommand
#[derive(Parser)]
struct RootsArgs {
    /// Document to inspect
    input: PathBuf,

    /// Report format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge SPDX fragments into one document
    Merge(MergeArgs),

    /// Check a document against SPDX structural and referential rules
    Validate(ValidateArgs),

    /// List the packages a document describes
    Roots(RootsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print the discovered config file, if any
    Path,
    /// Generate an example .spdx-reconcile.yaml in the current directory
    Init,
}

/// Effective configuration: preset or discovered file, then CLI overrides.
fn resolve_config(cli: &Cli, overrides: &AppConfig) -> Result<AppConfig> {
    let config = match &cli.preset {
        Some(name) => {
            let preset = ConfigPreset::from_name(name).with_context(|| {
                format!(
                    "unknown preset '{name}'; valid presets: {}",
                    ConfigPreset::all()
                        .iter()
                        .map(ConfigPreset::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?;
            let mut config = AppConfig::from_preset(preset);
            config.merge(overrides);
            config
        }
        None => {
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }
            config
        }
    };
    cli::warn_on_invalid_config(&config);
    Ok(config)
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Merge(args) => {
            let overrides = AppConfig::builder()
                .replace_relationships(args.replace_relationships)
                .validate_after_merge(args.validate || args.ntia)
                .ntia(args.ntia)
                .document_name(args.name.clone())
                .document_namespace(args.namespace.clone())
                .output_file(args.output_file.clone())
                .compact(args.compact)
                .build();
            let config = resolve_config(cli, &overrides)?;
            cli::run_merge(&args.inputs, &config)
        }

        Commands::Validate(args) => {
            let mut overrides = AppConfig::builder()
                .ntia(args.ntia)
                .output_file(args.output_file.clone())
                .build();
            if let Some(format) = args.output {
                overrides.output.format = format;
            }
            if args.no_fail {
                overrides.validation.fail_on_issues = false;
            }
            let config = resolve_config(cli, &overrides)?;
            cli::run_validate(&args.input, &config)
        }

        Commands::Roots(args) => {
            let mut overrides = AppConfig::builder()
                .output_file(args.output_file.clone())
                .build();
            if let Some(format) = args.output {
                overrides.output.format = format;
            }
            let config = resolve_config(cli, &overrides)?;
            cli::run_roots(&args.input, &config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "spdx-reconcile", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".spdx-reconcile.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
