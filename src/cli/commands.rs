//! CLI command definitions

use crate::error::{PlannerError, Result};
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Parser, Debug)]
#[command(name = "tripplan")]
#[command(about = "Travel itinerary builder: collect ideas, then schedule them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $TRIPPLAN_CONFIG or ./tripplan.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the session banner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive planning session (default)
    Session,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

// One line typed into a planning session. `help` lists the commands only.
#[derive(Parser, Debug)]
#[command(multicall = true, help_template = "Commands:\n{subcommands}")]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a place to the bucket list
    Add {
        /// Place name (words are joined with spaces)
        #[arg(value_name = "PLACE")]
        place: Vec<String>,

        /// sightseeing, food, r&r, shopping or exploration
        #[arg(short, long)]
        category: Option<String>,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Show the unscheduled bucket list
    #[command(alias = "list")]
    Ideas,

    /// Move a bucket list entry onto the itinerary
    Schedule {
        /// Position shown by `ideas`
        position: usize,

        /// Day 1 to Day 5 (default: Day 1)
        #[arg(short, long)]
        day: Option<String>,

        /// HH:MM or HH:MM AM/PM (default from config)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Show the itinerary grouped by day
    #[command(alias = "show")]
    Itinerary,

    /// Write the itinerary as CSV
    Export {
        /// Output file (default from config)
        path: Option<PathBuf>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#""([^"]*)"|(\S+)"#).unwrap())
}

/// Split a session line into words. Double quotes group words and must
/// be balanced.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    if line.matches('"').count() % 2 != 0 {
        return Err(PlannerError::UnclosedQuote(line.trim().to_string()));
    }

    Ok(token_regex()
        .captures_iter(line)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|m| m.as_str().to_string())
        .collect())
}
