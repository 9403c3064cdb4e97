//! Groups short strings (field or word names) into clusters of similar items.
//!
//! Every unordered pair of input items is scored with a normalized
//! edit-distance ratio, pairs at or above a threshold become edges of an
//! undirected graph, and each connected component of that graph is a group.
//!
//! ```rust
//! use levgroups_core::config::Threshold;
//! use levgroups_core::group::build_groups;
//! use levgroups_core::matcher::find_matches;
//!
//! let items: Vec<String> = ["cat", "cats", "dog"].iter().map(|s| s.to_string()).collect();
//! let pairs = find_matches(&items, Threshold::new(80).unwrap());
//! let groups = build_groups(&pairs);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].members, vec!["cat", "cats"]);
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod group;
pub mod input;
pub mod logging;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod similarity;

pub use error::{GroupError, Result};
