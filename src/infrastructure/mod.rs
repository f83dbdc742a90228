//! Infrastructure layer - Config file, CSV encoding and logging

pub mod config;
pub mod csv_export;
pub mod logging;

pub use config::Config;
pub use csv_export::{itinerary_to_csv, CSV_MIME_TYPE};
pub use logging::init_logging;
