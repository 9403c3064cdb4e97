// src/input.rs
//! Line sources: named files or standard input.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where items are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means standard input, anything else is a path.
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Sources for a list of CLI paths; stdin when the list is empty.
    #[must_use]
    pub fn from_args(args: &[PathBuf]) -> Vec<Self> {
        if args.is_empty() {
            return vec![Self::Stdin];
        }
        args.iter().map(|p| Self::from_arg(p)).collect()
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A source that could not be read in full.
#[derive(Debug)]
pub struct SourceFailure {
    pub source: InputSource,
    pub error: io::Error,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.error)
    }
}

/// Items gathered from every readable source, plus the sources that failed.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub items: Vec<String>,
    pub failures: Vec<SourceFailure>,
}

/// Splits a reader into items: one per line, trimmed, blank lines dropped.
///
/// # Errors
/// Returns the first read error, including invalid UTF-8.
pub fn read_items<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            items.push(trimmed.to_string());
        }
    }
    Ok(items)
}

/// Reads one source completely.
///
/// # Errors
/// Returns error if the source cannot be opened or read.
pub fn read_source(source: &InputSource) -> io::Result<Vec<String>> {
    match source {
        InputSource::Stdin => read_items(io::stdin().lock()),
        InputSource::File(path) => read_items(BufReader::new(File::open(path)?)),
    }
}

/// Reads every source in order. A failing source contributes no items and is
/// reported in `failures`; the remaining sources are still read.
#[must_use]
pub fn read_sources(sources: &[InputSource]) -> ReadOutcome {
    let mut outcome = ReadOutcome::default();
    for source in sources {
        match read_source(source) {
            Ok(items) => {
                debug!(%source, lines = items.len(), "read source");
                outcome.items.extend(items);
            }
            Err(error) => {
                debug!(%source, %error, "skipping unreadable source");
                outcome.failures.push(SourceFailure {
                    source: source.clone(),
                    error,
                });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_trims_and_skips_blank() {
        let items = read_items(Cursor::new("  first_name \r\n\nlast_name\n   \n")).unwrap();
        assert_eq!(items, vec!["first_name", "last_name"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let items = read_items(Cursor::new("abc\nabc\n")).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_no_trailing_newline() {
        let items = read_items(Cursor::new("x\ny")).unwrap();
        assert_eq!(items, vec!["x", "y"]);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = read_items(Cursor::new(vec![b'o', b'k', b'\n', 0xff, 0xfe])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_source_args() {
        assert_eq!(InputSource::from_args(&[]), vec![InputSource::Stdin]);
        let srcs = InputSource::from_args(&[PathBuf::from("-"), PathBuf::from("a.txt")]);
        assert_eq!(srcs[0], InputSource::Stdin);
        assert_eq!(srcs[1], InputSource::File(PathBuf::from("a.txt")));
        assert_eq!(srcs[1].to_string(), "a.txt");
    }

    #[test]
    fn test_missing_file_reported() {
        let outcome = read_sources(&[InputSource::File(PathBuf::from(
            "/definitely/not/here/levgroups.txt",
        ))]);
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].error.kind(), io::ErrorKind::NotFound);
    }
}
