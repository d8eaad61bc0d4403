use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::cli::Cli;

#[derive(Debug)]
pub struct MissingFilename;

impl std::fmt::Display for MissingFilename {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "no input file specified")
    }
}

impl std::error::Error for MissingFilename {}

/// Run configuration derived from CLI arguments. Immutable once built.
#[derive(Debug, Clone)]
pub struct Config {
    pub filename: PathBuf,
    pub bytes_per_line: NonZeroUsize,
}

impl Config {
    /// Validate parsed arguments into a Config.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        // Several positional tokens are accepted; the last one wins.
        let filename = cli
            .files
            .last()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!(MissingFilename))?;
        Ok(Config {
            filename,
            bytes_per_line: cli.bytes_per_line,
        })
    }
}
