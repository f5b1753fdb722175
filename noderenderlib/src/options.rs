//! Per-invocation rendering options.
//!
//! These are plain values resolved once by the caller (from flags, environment,
//! or anything else) and passed explicitly into the `describe_*` functions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output encoding for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Human-oriented bordered table (or log lines for status events)
    #[default]
    Table,
    /// Raw records as pretty-printed JSON
    Json,
    /// Raw records as YAML
    Yaml,
}

impl OutputMode {
    /// All accepted names, in the order shown to users
    pub const NAMES: [&'static str; 3] = ["table", "json", "yaml"];

    /// Whether this mode serializes raw records instead of deriving display text
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Table => "table",
            OutputMode::Json => "json",
            OutputMode::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "table" | "text" => Ok(OutputMode::Table),
            "json" => Ok(OutputMode::Json),
            "yaml" | "yml" => Ok(OutputMode::Yaml),
            other => Err(format!(
                "unknown output mode '{}', expected one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Options for the node table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeViewOptions {
    /// Append the free-text info blob as a fifth column
    pub show_info: bool,
}

impl NodeViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set info column inclusion
    pub fn with_info(mut self, include: bool) -> Self {
        self.show_info = include;
        self
    }
}
