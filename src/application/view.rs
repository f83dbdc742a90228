//! View model recomputed from planner state after each change

use crate::domain::time_of_day::format_12h;
use crate::domain::{Day, ScheduledEntry, TripPlanner};

/// Snapshot of everything the UI shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerView {
    pub ideas: Vec<IdeaRow>,
    pub days: Vec<DaySection>,
}

/// One selectable bucket-list line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaRow {
    /// 1-based position as shown to the user
    pub position: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    pub day: Day,
    pub cards: Vec<ItineraryCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryCard {
    pub time: String,
    pub category: &'static str,
    pub place: String,
    pub notes: String,
}

impl From<&ScheduledEntry> for ItineraryCard {
    fn from(entry: &ScheduledEntry) -> Self {
        ItineraryCard {
            time: format_12h(entry.time),
            category: entry.category().label(),
            place: entry.place().to_string(),
            notes: entry.notes().to_string(),
        }
    }
}

impl PlannerView {
    pub fn from_planner(planner: &TripPlanner) -> Self {
        let ideas = planner
            .bucket_list()
            .ideas()
            .iter()
            .enumerate()
            .map(|(index, idea)| IdeaRow {
                position: index + 1,
                label: idea.display_name(),
            })
            .collect();

        let days = planner
            .itinerary()
            .grouped_by_day()
            .into_iter()
            .map(|group| DaySection {
                day: group.day,
                cards: group.entries.iter().map(ItineraryCard::from).collect(),
            })
            .collect();

        PlannerView { ideas, days }
    }
}
