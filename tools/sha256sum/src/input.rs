// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Input buffer - turns the command-line argument into a contiguous byte
//! sequence.
//!
//! In [`InputMode::Auto`] an argument naming a regular file is read in binary
//! mode; anything else (missing path, directory, device) is hashed as the
//! literal string. Arguments are raw OS strings, so neither file names nor
//! literals need to be valid UTF-8.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input loading errors.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("read {actual} bytes from {}, expected {expected}", path.display())]
    LengthMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("input {label} is {len} bytes, limit is {limit}")]
    TooLarge { label: String, len: u64, limit: u64 },
}

/// How the positional argument is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Regular file if one exists at that path, otherwise the literal string.
    #[default]
    Auto,
    /// Always a file path.
    File,
    /// Always a literal string.
    Literal,
}

/// Where the bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputOrigin {
    File,
    Literal,
}

/// Fully buffered input plus the label printed next to its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    label: String,
    origin: InputOrigin,
    bytes: Vec<u8>,
}

impl InputBuffer {
    /// Buffer the bytes of a literal string, exactly as the OS passed them.
    pub fn literal(text: impl AsRef<OsStr>) -> Self {
        let text = text.as_ref();
        Self {
            label: text.to_string_lossy().into_owned(),
            origin: InputOrigin::Literal,
            bytes: text.as_encoded_bytes().to_vec(),
        }
    }

    /// Read a regular file completely.
    ///
    /// The byte count read must equal the size reported by the filesystem
    /// when the file was opened; a file that shrinks or grows mid-read is an
    /// error rather than a silently different digest.
    pub fn from_file(path: &Path, limit: Option<u64>) -> Result<Self, InputError> {
        let io_err = |source| InputError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let metadata = file.metadata().map_err(io_err)?;
        if !metadata.is_file() {
            return Err(InputError::NotAFile(path.to_path_buf()));
        }

        let expected = metadata.len();
        check_limit(&path.display().to_string(), expected, limit)?;

        let mut bytes = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
        file.read_to_end(&mut bytes).map_err(io_err)?;

        let actual = bytes.len() as u64;
        if actual != expected {
            return Err(InputError::LengthMismatch {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }

        tracing::debug!(path = %path.display(), bytes = actual, "Loaded file input");

        Ok(Self {
            label: path.display().to_string(),
            origin: InputOrigin::File,
            bytes,
        })
    }

    /// Resolve `arg` according to `mode`.
    ///
    /// The label is the argument as given, lossily converted for display.
    pub fn resolve(
        arg: impl AsRef<OsStr>,
        mode: InputMode,
        limit: Option<u64>,
    ) -> Result<Self, InputError> {
        let arg = arg.as_ref();
        let path = Path::new(arg);
        let buffer = match mode {
            InputMode::File => Self::from_file(path, limit)?,
            InputMode::Literal => Self::literal(arg),
            InputMode::Auto => {
                if is_regular_file(path) {
                    Self::from_file(path, limit)?
                } else {
                    tracing::debug!(
                        arg = %arg.to_string_lossy(),
                        "No regular file at argument, hashing it as a string"
                    );
                    Self::literal(arg)
                }
            }
        };

        check_limit(&buffer.label, buffer.len() as u64, limit)?;

        Ok(Self {
            label: arg.to_string_lossy().into_owned(),
            ..buffer
        })
    }

    /// Label printed after the digest.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Origin of the bytes.
    pub fn origin(&self) -> InputOrigin {
        self.origin
    }

    /// Raw content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

fn check_limit(label: &str, len: u64, limit: Option<u64>) -> Result<(), InputError> {
    match limit {
        Some(limit) if len > limit => Err(InputError::TooLarge {
            label: label.to_string(),
            len,
            limit,
        }),
        _ => Ok(()),
    }
}
