//! Command line runner for the sparse Game of Life

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sparse_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, load_world_from_file, patterns, LifeRules},
    utils::{ColorOutput, WorldFormatter},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config/default.yaml";

#[derive(Parser)]
#[command(name = "sparse_life")]
#[command(about = "Sparse Game of Life simulator")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a world and print the result (default)
    Run(RunArgs),

    /// Create a default configuration and example pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Report statistics about a world and its next generation
    Analyze {
        /// Pattern file to analyze
        #[arg(short, long, conflicts_with = "pattern")]
        input: Option<PathBuf>,

        /// Built-in pattern name (seed, glider, blinker, block)
        #[arg(short, long)]
        pattern: Option<String>,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting pattern file (overrides config)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of generations (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every generation, not just the last
    #[arg(long)]
    show_evolution: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_command(args, cli.verbose),
        Commands::Setup { directory, force } => {
            init_logging(cli.verbose, "warn");
            setup_command(directory, force)
        }
        Commands::Analyze { input, pattern } => {
            init_logging(cli.verbose, "warn");
            analyze_command(input, pattern)
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over everything else.
fn init_logging(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { level }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the explicit config, else `default_path` if present. The flag is
/// true when neither exists and built-in defaults are used.
fn load_settings(config_path: Option<&Path>, default_path: &Path) -> Result<(Settings, bool)> {
    let path = match config_path {
        Some(path) => path,
        None if default_path.exists() => default_path,
        None => return Ok((Settings::default(), true)),
    };

    let settings = Settings::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok((settings, false))
}

fn run_command(args: RunArgs, verbose: bool) -> Result<()> {
    let (mut settings, using_defaults) =
        load_settings(args.config.as_deref(), Path::new(DEFAULT_CONFIG))?;

    let cli_overrides = CliOverrides {
        generations: args.generations,
        seed_file: args.input,
        format: args.format,
        output_file: args.output,
        show_evolution: args.show_evolution,
    };
    settings.merge_with_cli(&cli_overrides);

    init_logging(verbose, &settings.logging.level);
    if using_defaults {
        warn!("Config file {} not found, using defaults", DEFAULT_CONFIG);
    }
    debug!(?settings, "resolved configuration");

    settings.validate()
        .context("Configuration validation failed")?;

    let format = settings.output.format;

    let content = if settings.output.show_evolution {
        let seed = sparse_life::load_seed(&settings)?;
        let path = LifeRules::evolution_path(&seed, settings.simulation.generations);
        WorldFormatter::format_evolution(&path, format)?
    } else {
        let world = sparse_life::run_simulation(&settings)?;
        info!(population = world.len(), "simulation finished");
        WorldFormatter::format_world(&world, format)?
    };

    match settings.output.output_file {
        Some(ref path) => {
            WorldFormatter::save_output(&content, path)?;
            eprintln!("{}", ColorOutput::success(&format!("Result saved to {}", path.display())));
        }
        None => println!("{}", content.trim_end()),
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join(DEFAULT_CONFIG);
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)", config_path.display()
        )));
    }

    let patterns_dir = directory.join("patterns");
    create_example_patterns(&patterns_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: sparse_life run --input {} --generations 4",
             patterns_dir.join("glider.txt").display());

    Ok(())
}

fn analyze_command(input: Option<PathBuf>, pattern: Option<String>) -> Result<()> {
    let world = match (input, pattern) {
        (Some(path), _) => load_world_from_file(&path)?,
        (None, Some(name)) => patterns::by_name(&name).with_context(|| format!(
            "Unknown pattern '{}'; expected one of {}", name, patterns::PATTERN_NAMES.join(", ")
        ))?,
        (None, None) => patterns::seed(),
    };

    println!("{}", WorldFormatter::format_visual(&world));
    println!("{}", WorldFormatter::format_analysis(&world));

    Ok(())
}
