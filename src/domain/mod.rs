//! Domain layer - Planner state and transitions

pub mod bucket_list;
pub mod category;
pub mod day;
pub mod idea;
pub mod itinerary;
pub mod planner;
pub mod time_of_day;

pub use bucket_list::BucketList;
pub use category::Category;
pub use day::Day;
pub use idea::{IdeaId, PlaceIdea, ScheduledEntry};
pub use itinerary::{DayGroup, Itinerary};
pub use planner::TripPlanner;
