//! Application layer - Use cases and orchestration

pub mod export_itinerary;
pub mod manage_config;
pub mod session;
pub mod view;

pub use export_itinerary::{ExportArtifact, ExportService};
pub use manage_config::ConfigService;
pub use session::Session;
pub use view::{DaySection, IdeaRow, ItineraryCard, PlannerView};
