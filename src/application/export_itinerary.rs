//! Export itinerary use case

use crate::domain::Itinerary;
use crate::error::{PlannerError, Result};
use crate::infrastructure::{itinerary_to_csv, CSV_MIME_TYPE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A written export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub mime_type: &'static str,
    pub entries: usize,
    pub bytes: Vec<u8>,
}

/// Service for exporting the itinerary as CSV
pub struct ExportService {
    target: PathBuf,
}

impl ExportService {
    /// Create an export service writing to `target`
    pub fn new(target: impl Into<PathBuf>) -> Self {
        ExportService {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Encode and write the itinerary. An empty itinerary is not exported.
    pub fn execute(&self, itinerary: &Itinerary) -> Result<ExportArtifact> {
        if itinerary.is_empty() {
            return Err(PlannerError::NothingToExport);
        }

        let bytes = itinerary_to_csv(itinerary)?;
        fs::write(&self.target, &bytes).map_err(|source| PlannerError::Export {
            path: self.target.clone(),
            source,
        })?;
        info!(path = %self.target.display(), entries = itinerary.len(), "exported itinerary");

        Ok(ExportArtifact {
            path: self.target.clone(),
            mime_type: CSV_MIME_TYPE,
            entries: itinerary.len(),
            bytes,
        })
    }
}
