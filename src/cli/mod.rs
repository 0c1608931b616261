//! Command-line interface.
//!
//! With no subcommand the binary opens the TUI. The subcommands print
//! catalog data without touching the terminal.

mod catalog;
mod completions;

pub use catalog::{catalog_json, catalog_text, leaderboard_json, leaderboard_text};

use crate::state::ScreenId;
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Ten minutes a day: a drawing mission and a brain game
#[derive(Parser, Debug)]
#[command(name = "proud100", version, about = "Ten minutes a day: a drawing mission and a brain game", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long = "config", id = "config_file", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Open this screen instead of the splash (e.g. home, drawing-canvas)
    #[arg(long, value_name = "ID", value_parser = parse_screen)]
    pub screen: Option<ScreenId>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List game types and premium packs
    Catalog {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show today's leaderboard
    Leaderboard {
        /// Your completion time in seconds
        #[arg(long, value_name = "SECONDS")]
        time: Option<u32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
    /// Print the log file location
    Logs,
    /// Print the config file location
    Config,
}

fn parse_screen(s: &str) -> Result<ScreenId, String> {
    s.parse()
}

impl Cli {
    /// Config path from `--config`, or the default location
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Run a subcommand. Returns `false` when there is none and the TUI
    /// should start instead.
    pub fn execute(&self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };
        match command {
            Commands::Catalog { json } => {
                let out = if *json { catalog_json()? } else { catalog_text() };
                println!("{}", out);
            }
            Commands::Leaderboard { time, json } => {
                let time = time.unwrap_or(crate::catalog::GAME_COMPLETION_TIME);
                let entries = crate::catalog::leaderboard(time);
                let out = if *json {
                    leaderboard_json(&entries)?
                } else {
                    leaderboard_text(&entries)
                };
                println!("{}", out);
            }
            Commands::Completions { shell } => completions::generate(*shell)?,
            Commands::Logs => {
                println!("{}", crate::utils::get_log_dir().join(crate::utils::LOG_FILE).display());
            }
            Commands::Config => println!("{}", self.config_path().display()),
        }
        Ok(true)
    }
}
