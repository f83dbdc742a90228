//! Output formatting utilities

use crate::application::{DaySection, ExportArtifact, IdeaRow};
use crate::domain::time_of_day::{format_12h, format_24h};
use crate::domain::ScheduledEntry;
use crate::infrastructure::Config;

/// Session greeting
pub fn format_banner() -> String {
    "✈️ Dynamic Travel Itinerary Builder\n\
    Capture ideas first, then schedule them when you're ready. Type 'help' for commands."
        .to_string()
}

/// Format the bucket list for selection
pub fn format_bucket_list(ideas: &[IdeaRow]) -> String {
    if ideas.is_empty() {
        return "Your bucket list is empty.".to_string();
    }

    ideas
        .iter()
        .map(|row| format!("{}. {}", row.position, row.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the itinerary grouped by day
pub fn format_itinerary(days: &[DaySection]) -> String {
    if days.is_empty() {
        return "No items scheduled yet. Move items from the bucket list to see them here."
            .to_string();
    }

    let mut lines = Vec::new();
    for section in days {
        lines.push(format!("🗓️ {}", section.day));
        for card in &section.cards {
            lines.push(format!("  {} | {}", card.time, card.category));
            lines.push(format!("    {}", card.place));
            if !card.notes.is_empty() {
                lines.push(format!("    {}", card.notes));
            }
        }
    }
    lines.join("\n")
}

pub fn format_scheduled(entry: &ScheduledEntry) -> String {
    format!(
        "Scheduled {} on {} at {}",
        entry.place(),
        entry.day,
        format_12h(entry.time)
    )
}

pub fn format_export(artifact: &ExportArtifact) -> String {
    format!(
        "Exported {} {} to {} ({})",
        artifact.entries,
        if artifact.entries == 1 { "entry" } else { "entries" },
        artifact.path.display(),
        artifact.mime_type
    )
}

/// Format all config values, one `key = value` per line
pub fn format_config(config: &Config) -> String {
    format!(
        "export_file = {}\ndefault_time = {}\ndefault_category = {}",
        config.export_file.display(),
        format_24h(config.default_time),
        config.default_category.name().to_lowercase()
    )
}
