//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod repl;

pub use commands::{Cli, Commands, SessionCommand, SessionLine};
pub use output::{format_bucket_list, format_config, format_itinerary};
pub use repl::ReplOptions;
