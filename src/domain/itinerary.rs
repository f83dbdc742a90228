//! The scheduled, time-ordered itinerary

use crate::domain::{Day, ScheduledEntry};

/// Scheduled entries, always sorted by day then time
#[derive(Debug, Default, Clone)]
pub struct Itinerary {
    entries: Vec<ScheduledEntry>,
}

/// One day's slice of the itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub day: Day,
    pub entries: &'a [ScheduledEntry],
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the (day, time) order.
    ///
    /// Entries sharing a day and time stay in insertion order.
    pub fn insert(&mut self, entry: ScheduledEntry) -> &ScheduledEntry {
        let key = entry.sort_key();
        // Same result as push + stable sort, since entries is already sorted
        let position = self.entries.partition_point(|e| e.sort_key() <= key);
        self.entries.insert(position, entry);
        &self.entries[position]
    }

    /// Entries partitioned by day, ascending. Days without entries are skipped.
    pub fn grouped_by_day(&self) -> Vec<DayGroup<'_>> {
        self.entries
            .chunk_by(|a, b| a.day == b.day)
            .map(|entries| DayGroup {
                day: entries[0].day,
                entries,
            })
            .collect()
    }

    pub fn entries(&self) -> &[ScheduledEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
