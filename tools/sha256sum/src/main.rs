// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! sha256sum CLI
//!
//! Print the SHA-256 digest of a file or literal string.
//!
//! # Usage
//!
//! ```bash
//! # File if it exists, string otherwise
//! sha256sum notes.txt
//!
//! # Force one interpretation
//! sha256sum --file notes.txt
//! sha256sum --string "hello world"
//!
//! # JSON output, reject empty input
//! sha256sum --format json --reject-empty notes.txt
//!
//! # Using a configuration file
//! sha256sum --config sha256sum.toml notes.txt
//!
//! # An input that collides with a subcommand name
//! sha256sum -- validate
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sha256sum::{
    create_formatter, hash_argument, DigestFormatter, InputMode, OutputFormat, SumConfig,
};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sha256sum")]
#[command(author = "naskel.com")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the SHA-256 digest of a file or literal string")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    /// File path or literal string to hash (any bytes the OS allows)
    #[arg(required = true, value_parser = clap::value_parser!(OsString))]
    input: Option<OsString>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat the input as a file path (fail if it cannot be read)
    #[arg(long, conflicts_with = "string")]
    file: bool,

    /// Treat the input as a literal string, even if a file exists with that name
    #[arg(long)]
    string: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Fail on empty input instead of hashing it
    #[arg(long)]
    reject_empty: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long)]
    max_bytes: Option<u64>,

    /// Log level (off, trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Verbose mode (show internal logs)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate example configuration file
    GenConfig {
        /// Output file path
        #[arg(short, long, default_value = "sha256sum.toml")]
        output: PathBuf,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file path
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    if let Some(cmd) = cli.command.take() {
        let config = SumConfig {
            log_level: cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            ..Default::default()
        };
        config.validate().context("Invalid configuration")?;
        init_logging(&config, &cli)?;
        return match cmd {
            Commands::GenConfig { output } => cmd_gen_config(output),
            Commands::Validate { config } => cmd_validate(config),
        };
    }

    let config = build_config(&cli)?;
    init_logging(&config, &cli)?;

    let input = cli.input.unwrap_or_default();
    let label = input.to_string_lossy();
    tracing::debug!(
        input = %label,
        mode = ?config.input_mode,
        format = ?config.format,
        allow_empty = config.allow_empty,
        "Hashing input"
    );

    let record = hash_argument(&input, &config).with_context(|| format!("{}: failed", label))?;

    let formatter = create_formatter(config.format);
    println!("{}", formatter.format(&record));

    Ok(())
}

/// Setup tracing; an explicit --log-level wins over --verbose and the config.
fn init_logging(config: &SumConfig, cli: &Cli) -> Result<()> {
    let filter = if cli.verbose && cli.log_level.is_none() {
        EnvFilter::new("sha256sum=debug,sha256_core=debug")
    } else {
        config.log_filter()?
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_config(cli: &Cli) -> Result<SumConfig> {
    // Load from file if specified, then apply flag overrides
    let mut config = match cli.config {
        Some(ref path) => SumConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SumConfig::default(),
    };

    if cli.file {
        config.input_mode = InputMode::File;
    } else if cli.string {
        config.input_mode = InputMode::Literal;
    }

    if let Some(format) = cli.format {
        config.format = format.into();
    }

    if cli.reject_empty {
        config.allow_empty = false;
    }

    if let Some(max) = cli.max_bytes {
        config.max_input_bytes = Some(max);
    }

    if let Some(ref level) = cli.log_level {
        config.log_level = level.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn cmd_gen_config(output: PathBuf) -> Result<()> {
    let config = SumConfig {
        max_input_bytes: Some(1024 * 1024 * 1024),
        ..Default::default()
    };

    let toml_str = config.to_toml_string()?;
    let content = format!(
        r#"# sha256sum configuration
# Generated by sha256sum gen-config
#
# input_mode: auto | file | literal
# format:     text | json

{}
"#,
        toml_str
    );

    std::fs::write(&output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Generated configuration file: {}", output.display());
    Ok(())
}

fn cmd_validate(config_path: PathBuf) -> Result<()> {
    let config = SumConfig::from_file(&config_path)
        .with_context(|| format!("Configuration invalid: {}", config_path.display()))?;

    println!("Configuration valid!");
    println!();
    println!("Input mode:  {:?}", config.input_mode);
    println!("Format:      {:?}", config.format);
    println!("Allow empty: {}", config.allow_empty);
    match config.max_input_bytes {
        Some(max) => println!("Max input:   {} bytes", max),
        None => println!("Max input:   unlimited"),
    }
    println!("Log level:   {}", config.log_level);
    Ok(())
}
