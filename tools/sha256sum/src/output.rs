// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Digest line formatters: coreutils-style text and JSON.

use crate::input::InputOrigin;
use serde::{Deserialize, Serialize};

/// Output format for digest lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `<hex>  <input>`, as printed by coreutils `sha256sum`.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// One computed digest, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestRecord {
    pub algorithm: &'static str,
    pub digest: String,
    pub input: String,
    pub source: InputOrigin,
    pub bytes: usize,
}

/// Digest formatter trait.
pub trait DigestFormatter {
    /// Format a record as a single line (no trailing newline).
    fn format(&self, record: &DigestRecord) -> String;
}

/// Text formatter.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter;

impl DigestFormatter for TextFormatter {
    fn format(&self, record: &DigestRecord) -> String {
        format!("{}  {}", record.digest, record.input)
    }
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl DigestFormatter for JsonFormatter {
    fn format(&self, record: &DigestRecord) -> String {
        serde_json::to_string(record).unwrap_or_else(|_| record.digest.clone())
    }
}

/// Create a formatter for the given format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn DigestFormatter + Send + Sync> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DigestRecord {
        DigestRecord {
            algorithm: "sha256",
            digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad".to_string(),
            input: "abc".to_string(),
            source: InputOrigin::Literal,
            bytes: 3,
        }
    }

    #[test]
    fn test_text_formatter() {
        let line = TextFormatter.format(&sample_record());
        assert_eq!(
            line,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  abc"
        );
    }

    #[test]
    fn test_json_formatter() {
        let line = JsonFormatter.format(&sample_record());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["algorithm"], "sha256");
        assert_eq!(value["input"], "abc");
        assert_eq!(value["source"], "literal");
        assert_eq!(value["bytes"], 3);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_create_formatter() {
        let record = sample_record();
        assert!(create_formatter(OutputFormat::Text)
            .format(&record)
            .ends_with("  abc"));
        assert!(create_formatter(OutputFormat::Json)
            .format(&record)
            .starts_with('{'));
    }
}
