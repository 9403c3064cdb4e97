// src/report/mod.rs
//! Output rendering for grouping results.

pub mod dot;
pub mod json;
pub mod terminal;

pub use dot::format_dot;
pub use json::format_json;
pub use terminal::{format_stats, format_text};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One group per line
    #[default]
    Text,
    /// JSON array of groups
    Json,
    /// Graphviz description of the match graph
    Dot,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Dot => "dot",
        };
        f.write_str(name)
    }
}
