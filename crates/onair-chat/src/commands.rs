//! Command handlers for non-interactive subcommands.

use onair_core::{EventDirectory, EventFilter, EventQuery};
use onair_models::Event;
use tracing::info;

use crate::cli::OutputFormat;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Print the filtered event directory to stdout.
pub fn cmd_events(
    directory: &EventDirectory,
    search: Option<&str>,
    filter: EventFilter,
    format: OutputFormat,
) -> Result<()> {
    let query = EventQuery::new()
        .with_search(search.unwrap_or_default())
        .with_filter(filter);
    let events = directory.filtered(&query);

    info!(search = %query.search, filter = %filter, count = events.len(), "Listing events");

    print!("{}", format_events(&events, format)?);
    Ok(())
}

/// Render events in the requested format.
pub fn format_events(events: &[&Event], format: OutputFormat) -> Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Table => {
            if events.is_empty() {
                out.push_str("No events found.\n");
                return Ok(out);
            }

            out.push_str(&format!(
                "{:<4}  {:<10}  {:<6}  {:<12}  NAME\n",
                "ID", "STATUS", "TIME", "CATEGORY"
            ));
            out.push_str(&"-".repeat(72));
            out.push('\n');
            for event in events {
                out.push_str(&format!(
                    "{:<4}  {:<10}  {:<6}  {:<12}  {}\n",
                    event.id,
                    event.badge(),
                    event.time,
                    truncate(&event.category, 12),
                    truncate(&event.name, 40)
                ));
            }
            out.push_str(&format!("\n{} event(s)\n", events.len()));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(events)?;
            out.push_str(&json);
            out.push('\n');
        }
        OutputFormat::Brief => {
            for event in events {
                out.push_str(&format!("{}\t{}\n", event.id, event.name));
            }
        }
    }

    Ok(out)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
