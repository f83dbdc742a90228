//! The unscheduled pool of place ideas

use crate::domain::{Category, IdeaId, PlaceIdea};
use tracing::debug;

/// Place ideas awaiting a day and time, in insertion order
#[derive(Debug, Default, Clone)]
pub struct BucketList {
    ideas: Vec<PlaceIdea>,
    next_id: u64,
}

impl BucketList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new idea.
    ///
    /// Returns `None` without touching the list when `place` is blank.
    pub fn add(&mut self, place: &str, category: Category, notes: &str) -> Option<&PlaceIdea> {
        let place = place.trim();
        if place.is_empty() {
            debug!("ignoring bucket list entry with blank place name");
            return None;
        }

        let id = IdeaId::new(self.next_id);
        self.next_id += 1;

        self.ideas.push(PlaceIdea {
            id,
            place: place.to_string(),
            category,
            notes: notes.to_string(),
        });
        debug!(%id, place, "added bucket list entry");

        self.ideas.last()
    }

    /// Remove and return the idea at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Callers only pass positions they
    /// have just displayed.
    pub fn remove_at(&mut self, index: usize) -> PlaceIdea {
        assert!(
            index < self.ideas.len(),
            "bucket list index {} out of range (len {})",
            index,
            self.ideas.len()
        );
        self.ideas.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&PlaceIdea> {
        self.ideas.get(index)
    }

    pub fn ideas(&self) -> &[PlaceIdea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }
}
