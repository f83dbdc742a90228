//! CSV encoding of the itinerary

use crate::domain::time_of_day::format_12h;
use crate::domain::{Itinerary, ScheduledEntry};
use crate::error::{PlannerError, Result};
use serde::Serialize;

/// Column headers, in export order
pub const CSV_HEADERS: [&str; 5] = ["Day", "Time", "Category", "Place", "Notes"];

/// MIME type of the export
pub const CSV_MIME_TYPE: &str = "text/csv";

#[derive(Debug, Serialize)]
struct ItineraryRow<'a> {
    day: &'static str,
    time: String,
    category: &'static str,
    place: &'a str,
    notes: &'a str,
}

impl<'a> From<&'a ScheduledEntry> for ItineraryRow<'a> {
    fn from(entry: &'a ScheduledEntry) -> Self {
        ItineraryRow {
            day: entry.day.label(),
            time: format_12h(entry.time),
            category: entry.category().label(),
            place: entry.place(),
            notes: entry.notes(),
        }
    }
}

/// Encode the itinerary, in stored order, as UTF-8 CSV with a header row
pub fn itinerary_to_csv(itinerary: &Itinerary) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for entry in itinerary.entries() {
        writer.serialize(ItineraryRow::from(entry))?;
    }

    writer
        .into_inner()
        .map_err(|e| PlannerError::Csv(csv::Error::from(e.into_error())))
}
