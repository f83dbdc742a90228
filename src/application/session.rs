//! Planning session use case
//!
//! A session owns one [`TripPlanner`] for the lifetime of the process and
//! translates user-facing selections (1-based positions, optional day and
//! time) into planner transitions. Positions are checked here so the
//! planner's index precondition never trips on user input.

use crate::application::export_itinerary::{ExportArtifact, ExportService};
use crate::application::view::PlannerView;
use crate::domain::{Category, Day, PlaceIdea, ScheduledEntry, TripPlanner};
use crate::error::{PlannerError, Result};
use crate::infrastructure::Config;
use chrono::NaiveTime;
use std::path::Path;
use tracing::{debug, warn};

pub struct Session {
    planner: TripPlanner,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            planner: TripPlanner::new(),
            config,
        }
    }

    pub fn planner(&self) -> &TripPlanner {
        &self.planner
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Recompute the view model from current state
    pub fn view(&self) -> PlannerView {
        PlannerView::from_planner(&self.planner)
    }

    /// Add an idea; `category` falls back to the configured default.
    /// Returns `None` when the place is blank.
    pub fn add_idea(
        &mut self,
        place: &str,
        category: Option<Category>,
        notes: &str,
    ) -> Option<&PlaceIdea> {
        let category = category.unwrap_or(self.config.default_category);
        let added = self.planner.add_idea(place, category, notes);
        if added.is_none() {
            debug!("add form submitted without a place name");
        }
        added
    }

    /// Schedule the idea shown at 1-based `position`.
    ///
    /// `day` defaults to Day 1 and `time` to the configured default time.
    pub fn schedule(
        &mut self,
        position: usize,
        day: Option<Day>,
        time: Option<NaiveTime>,
    ) -> Result<&ScheduledEntry> {
        let len = self.planner.bucket_list().len();
        if position == 0 || position > len {
            warn!(position, len, "rejected schedule of unknown bucket list position");
            return Err(PlannerError::InvalidSelection { position, len });
        }

        let day = day.unwrap_or_default();
        let time = time.unwrap_or(self.config.default_time);
        Ok(self.planner.schedule(position - 1, day, time))
    }

    /// Export to `path`, or to the configured export file
    pub fn export(&self, path: Option<&Path>) -> Result<ExportArtifact> {
        let target = path.unwrap_or(self.config.export_file.as_path());
        ExportService::new(target).execute(self.planner.itinerary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_add_uses_configured_category() {
        let config = Config {
            default_category: Category::Food,
            ..Config::default()
        };
        let mut session = Session::new(config);

        let idea = session.add_idea("Kuromon Market", None, "").unwrap();
        assert_eq!(idea.category, Category::Food);

        let idea = session
            .add_idea("Nara Park", Some(Category::Exploration), "")
            .unwrap();
        assert_eq!(idea.category, Category::Exploration);
    }

    #[test]
    fn test_add_blank_place() {
        let mut session = Session::new(Config::default());
        assert!(session.add_idea("  ", None, "notes").is_none());
        assert!(session.planner().bucket_list().is_empty());
    }

    #[test]
    fn test_schedule_defaults() {
        let mut session = Session::new(Config::default());
        session.add_idea("Osaka Castle", None, "");

        let entry = session.schedule(1, None, None).unwrap();
        assert_eq!(entry.day, Day::Day1);
        assert_eq!(entry.time, hm(9, 0));
    }

    #[test]
    fn test_schedule_uses_one_based_positions() {
        let mut session = Session::new(Config::default());
        session.add_idea("Osaka Castle", None, "");
        session.add_idea("Dotonbori", Some(Category::Food), "night view");

        let entry = session
            .schedule(2, Some(Day::Day1), Some(hm(18, 0)))
            .unwrap();
        assert_eq!(entry.place(), "Dotonbori");
        assert_eq!(session.planner().bucket_list().len(), 1);
    }

    #[test]
    fn test_schedule_rejects_unknown_position() {
        let mut session = Session::new(Config::default());
        session.add_idea("Osaka Castle", None, "");

        for position in [0, 2] {
            let err = session.schedule(position, None, None).unwrap_err();
            assert!(matches!(
                err,
                PlannerError::InvalidSelection { len: 1, .. }
            ));
        }
        assert_eq!(session.planner().bucket_list().len(), 1);
        assert!(session.planner().itinerary().is_empty());
    }

    #[test]
    fn test_export_to_configured_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("configured.csv");
        let config = Config {
            export_file: target.clone(),
            ..Config::default()
        };
        let mut session = Session::new(config);
        session.add_idea("Ichiran", Some(Category::Food), "no wait");
        session.schedule(1, Some(Day::Day2), Some(hm(14, 30))).unwrap();

        let artifact = session.export(None).unwrap();
        assert_eq!(artifact.path, target);
        assert!(target.exists());

        let other = temp.path().join("other.csv");
        session.export(Some(other.as_path())).unwrap();
        assert!(other.exists());
    }
}
