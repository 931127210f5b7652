//! Command-line interface for the terminal frontend.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe with a navigable move history
#[derive(Parser, Debug, Default)]
#[command(name = "timetravel")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(long)]
    pub reversed: bool,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["timetravel", "--reversed", "-c", "game.toml"]);
        assert!(cli.reversed);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timetravel"]);
        assert!(!cli.reversed);
        assert!(cli.config.is_none());
    }
}
