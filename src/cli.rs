//! Process bootstrap
//!
//! The program is a single interactive session, so there is no subcommand
//! surface; clap only parses bootstrap flags before the TUI takes over the
//! terminal.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::SessionConfig;
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{init_logging, LoggingConfig};

#[derive(Debug, Parser)]
#[command(name = "polysim")]
#[command(version)]
#[command(about = "Interactive prediction market mock-up for the terminal", long_about = None)]
pub struct Cli {
    /// Data directory path (default: ./data)
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the host shell integration even on a terminal
    #[arg(long)]
    pub no_host: bool,
}

impl Cli {
    /// Initialize logging and run the interactive session.
    pub async fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);
        init_logging(LoggingConfig::new(data_paths, self.verbose))?;

        crate::tui::run(SessionConfig::default(), self.no_host).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from(["polysim"]);
        assert_eq!(cli.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_host);
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["polysim", "--data-dir", "/tmp/d", "-vv", "--no-host"]);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/d"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_host);
    }
}
