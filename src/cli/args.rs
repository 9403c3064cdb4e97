// src/cli/args.rs
use crate::config::Threshold;
use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "levgroups",
    version,
    about = "Prints groups of words or field names that are within a given edit-distance ratio of each other"
)]
pub struct Cli {
    /// Newline-separated input files; reads stdin when none are given (`-` also means stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Input files, as a flag; read after any positional files
    #[arg(long = "files", value_name = "FILE", num_args = 1..)]
    pub listed_files: Vec<PathBuf>,

    /// Minimum similarity ratio (0-100) for two entries to be linked [default: 80]
    #[arg(long, short, visible_alias = "threshold", value_name = "RATIO")]
    pub ratio: Option<Threshold>,

    /// Also print entries that matched nothing, as single-member groups
    #[arg(long, short)]
    pub all: bool,

    /// Output format [default: text]
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Worker threads for scoring (0 = all cores)
    #[arg(long, short, value_name = "N")]
    pub jobs: Option<usize>,

    /// Config file to use instead of ./levgroups.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print run statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Positional files followed by those given with `--files`.
    #[must_use]
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .chain(&self.listed_files)
            .cloned()
            .collect()
    }
}
