// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! sha256sum - print the SHA-256 digest of a file or a literal string.
//!
//! This crate is the glue around `sha256-core`: it loads the input into a
//! buffer, applies the configured policies, and formats the result line.
//!
//! # Quick Start
//!
//! ```bash
//! # Hash a file (binary mode)
//! sha256sum Cargo.toml
//!
//! # Anything that is not a regular file is hashed as a string
//! sha256sum abc
//!
//! # Force string interpretation, JSON output
//! sha256sum --string --format json Cargo.toml
//! ```
//!
//! # Configuration File
//!
//! ```toml
//! input_mode = "auto"      # auto | file | literal
//! format = "text"          # text | json
//! allow_empty = true
//! max_input_bytes = 1073741824
//! log_level = "info"
//! ```

pub mod config;
pub mod input;
pub mod output;

pub use config::{ConfigError, SumConfig};
pub use input::{InputBuffer, InputError, InputMode, InputOrigin};
pub use output::{create_formatter, DigestFormatter, DigestRecord, OutputFormat};

use sha256_core::{DigestError, RoundConstants, Sha256};
use std::ffi::OsStr;
use thiserror::Error;

/// Algorithm name reported in structured output.
pub const ALGORITHM: &str = "sha256";

/// sha256sum errors.
#[derive(Debug, Error)]
pub enum SumError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Digest error: {0}")]
    Digest(#[from] DigestError),
}

/// Hash an already loaded buffer under `config`'s policies.
pub fn hash_buffer(buffer: &InputBuffer, config: &SumConfig) -> Result<DigestRecord, SumError> {
    let constants = RoundConstants::shared()?;
    let engine = Sha256::with_policy(constants, config.empty_input());
    let digest = engine.digest(buffer.bytes())?;

    tracing::debug!(
        input = buffer.label(),
        bytes = buffer.len(),
        digest = %digest,
        "Digest computed"
    );

    Ok(DigestRecord {
        algorithm: ALGORITHM,
        digest: digest.to_hex(),
        input: buffer.label().to_string(),
        source: buffer.origin(),
        bytes: buffer.len(),
    })
}

/// Resolve `arg`, load it and hash it.
pub fn hash_argument(
    arg: impl AsRef<OsStr>,
    config: &SumConfig,
) -> Result<DigestRecord, SumError> {
    let buffer = InputBuffer::resolve(arg, config.input_mode, config.max_input_bytes)?;
    hash_buffer(&buffer, config)
}
