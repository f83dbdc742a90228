//! Error types for tripplan

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tripplan
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No bucket list entry at position {position} (list has {len})")]
    InvalidSelection { position: usize, len: usize },

    #[error("{0}")]
    InvalidCategory(String),

    #[error("{0}")]
    InvalidDay(String),

    #[error("{0}")]
    InvalidTime(String),

    #[error("Nothing to export: the itinerary is empty")]
    NothingToExport,

    #[error("Could not write export to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unclosed quote in: {0}")]
    UnclosedQuote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PlannerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PlannerError::InvalidSelection { .. } => 2,
            PlannerError::InvalidCategory(_)
            | PlannerError::InvalidDay(_)
            | PlannerError::InvalidTime(_) => 3,
            PlannerError::NothingToExport => 4,
            _ => 1,
        }
    }

    /// Whether an interactive session can carry on after this error.
    /// Only terminal I/O failures end a session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PlannerError::Io(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PlannerError::InvalidSelection { len: 0, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Add a place first: add \"Osaka Castle\" --category sightseeing",
                    self
                )
            }
            PlannerError::InvalidSelection { len, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'ideas' to see the numbered bucket list\n\
                    • Pick a position between 1 and {}",
                    self, len
                )
            }
            PlannerError::InvalidTime(msg) => {
                format!(
                    "{}\n\n\
                    Examples:\n\
                    schedule 1 --day 2 --time 14:30\n\
                    schedule 1 --day 2 --time \"02:30 PM\"",
                    msg
                )
            }
            PlannerError::NothingToExport => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Schedule a bucket list entry first: schedule 1 --day 1 --time 09:00",
                    self
                )
            }
            PlannerError::Export { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the directory exists and is writable\n\
                    • Try another path: export my_trip.csv",
                    self
                )
            }
            PlannerError::UnclosedQuote(_) => {
                format!(
                    "{}\n\n\
                    Close every double quote, e.g. add \"Osaka Castle\"",
                    self
                )
            }
            PlannerError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: tripplan config default_time 10:00",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PlannerError
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_on_empty_list() {
        let err = PlannerError::InvalidSelection {
            position: 1,
            len: 0,
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("No bucket list entry at position 1"));
        assert!(msg.contains("Add a place first"));
    }

    #[test]
    fn test_invalid_selection_range_hint() {
        let err = PlannerError::InvalidSelection {
            position: 7,
            len: 3,
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'ideas'"));
        assert!(msg.contains("between 1 and 3"));
    }

    #[test]
    fn test_invalid_time_examples() {
        let err = PlannerError::InvalidTime("Invalid time: 'soon'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Invalid time: 'soon'"));
        assert!(msg.contains("--time 14:30"));
    }

    #[test]
    fn test_nothing_to_export_suggestion() {
        let msg = PlannerError::NothingToExport.display_with_suggestions();
        assert!(msg.contains("itinerary is empty"));
        assert!(msg.contains("schedule 1"));
    }

    #[test]
    fn test_config_unknown_key_example() {
        let err = PlannerError::Config("Unknown config key: 'x'".to_string());
        assert!(err
            .display_with_suggestions()
            .contains("tripplan config default_time 10:00"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            PlannerError::InvalidSelection {
                position: 1,
                len: 0
            }
            .exit_code(),
            2
        );
        assert_eq!(PlannerError::InvalidDay("x".to_string()).exit_code(), 3);
        assert_eq!(PlannerError::NothingToExport.exit_code(), 4);
        assert_eq!(PlannerError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_io_errors_end_session() {
        let err = PlannerError::Io(std::io::Error::other("broken pipe"));
        assert!(!err.is_recoverable());
        assert!(PlannerError::NothingToExport.is_recoverable());
    }

    #[test]
    fn test_export_write_failure_is_recoverable() {
        let err = PlannerError::Export {
            path: PathBuf::from("/missing/trip.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.exit_code(), 1);

        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Could not write export to /missing/trip.csv"));
        assert!(msg.contains("directory exists"));
    }

    #[test]
    fn test_unclosed_quote_suggestion() {
        let err = PlannerError::UnclosedQuote("add \"Osaka".to_string());
        assert!(err.is_recoverable());
        assert!(err
            .display_with_suggestions()
            .contains("Close every double quote"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = PlannerError::InvalidCategory("Invalid category: 'x'".to_string());
        assert_eq!(err.display_with_suggestions(), "Invalid category: 'x'");
    }
}
