//! Place ideas and scheduled entries

use crate::domain::{Category, Day};
use chrono::NaiveTime;
use std::fmt;

/// Identity of a place idea, unique for the lifetime of a planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdeaId(u64);

impl IdeaId {
    pub fn new(value: u64) -> Self {
        IdeaId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An unscheduled bucket-list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceIdea {
    pub id: IdeaId,
    pub place: String,
    pub category: Category,
    pub notes: String,
}

impl PlaceIdea {
    /// Caption used when picking an idea to schedule
    pub fn display_name(&self) -> String {
        format!("{} {}", self.category.label(), self.place)
    }

    /// Attach a day and time, turning the idea into an itinerary entry
    pub fn schedule(self, day: Day, time: NaiveTime) -> ScheduledEntry {
        ScheduledEntry {
            idea: self,
            day,
            time,
        }
    }
}

/// A place idea pinned to a day and time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEntry {
    pub idea: PlaceIdea,
    pub day: Day,
    pub time: NaiveTime,
}

impl ScheduledEntry {
    /// Itinerary ordering key
    pub fn sort_key(&self) -> (Day, NaiveTime) {
        (self.day, self.time)
    }

    pub fn place(&self) -> &str {
        &self.idea.place
    }

    pub fn category(&self) -> Category {
        self.idea.category
    }

    pub fn notes(&self) -> &str {
        &self.idea.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea() -> PlaceIdea {
        PlaceIdea {
            id: IdeaId::new(3),
            place: "Ichiran".to_string(),
            category: Category::Food,
            notes: "no wait".to_string(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(idea().display_name(), "🍜 Food Ichiran");
    }

    #[test]
    fn test_schedule_keeps_idea() {
        let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let entry = idea().schedule(Day::Day2, time);

        assert_eq!(entry.idea, idea());
        assert_eq!(entry.sort_key(), (Day::Day2, time));
        assert_eq!(entry.place(), "Ichiran");
        assert_eq!(entry.category(), Category::Food);
        assert_eq!(entry.notes(), "no wait");
    }

    #[test]
    fn test_idea_id_display() {
        assert_eq!(IdeaId::new(7).to_string(), "#7");
        assert_eq!(IdeaId::new(7).value(), 7);
    }
}
