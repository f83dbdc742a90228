//! tripplan - Terminal travel itinerary builder
//!
//! Capture place ideas on a bucket list, promote them onto a day/time
//! itinerary kept in (day, time) order, and export the plan as CSV.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PlannerError;
