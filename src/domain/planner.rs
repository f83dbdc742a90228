//! Trip planner state: the bucket list and the itinerary

use crate::domain::{BucketList, Category, Day, Itinerary, PlaceIdea, ScheduledEntry};
use chrono::NaiveTime;
use tracing::info;

/// Owns both stores. An idea lives in exactly one of them.
#[derive(Debug, Default, Clone)]
pub struct TripPlanner {
    bucket_list: BucketList,
    itinerary: Itinerary,
}

impl TripPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket_list(&self) -> &BucketList {
        &self.bucket_list
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Capture a new idea on the bucket list. Blank places are ignored.
    pub fn add_idea(&mut self, place: &str, category: Category, notes: &str) -> Option<&PlaceIdea> {
        self.bucket_list.add(place, category, notes)
    }

    /// Move the bucket-list idea at `index` onto the itinerary.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid bucket-list position. Neither store
    /// is modified in that case.
    pub fn schedule(&mut self, index: usize, day: Day, time: NaiveTime) -> &ScheduledEntry {
        let idea = self.bucket_list.remove_at(index);
        info!(id = %idea.id, place = %idea.place, %day, %time, "scheduled idea");
        self.itinerary.insert(idea.schedule(day, time))
    }
}
