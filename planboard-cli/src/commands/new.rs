use std::collections::BTreeMap;

use anyhow::Result;
use chrono::Duration;
use owo_colors::OwoColorize;
use planboard_core::{Board, EventDraft, EventStamp};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    board: &Board,
    title: String,
    start: String,
    end: Option<String>,
    calendar: String,
    location: Option<String>,
    description: Option<String>,
    meta: Vec<String>,
) -> Result<()> {
    let start = super::parse_stamp(&start)?;
    let end = match end {
        Some(raw) => super::parse_stamp(&raw)?,
        None => default_end(&start),
    };
    let metadata = parse_metadata(&meta)?;

    let calendar_url = super::resolve_calendar_url(board, &calendar).await?;

    let draft = EventDraft {
        title,
        start,
        end,
        location,
        description,
        metadata,
    };

    let spinner = super::create_spinner("Creating event");
    let result = board.create_event(&calendar_url, &draft).await;
    spinner.finish_and_clear();

    let record = result?;
    println!("{}", format!("  Created: {}", record.title).green());
    println!("  {}", format!("uid: {}", record.remote_uid).dimmed());

    Ok(())
}

/// One hour for timed events, the start day itself for all-day ones.
fn default_end(start: &EventStamp) -> EventStamp {
    match start {
        EventStamp::DateTime(dt) => EventStamp::DateTime(*dt + Duration::hours(1)),
        EventStamp::Date(d) => EventStamp::Date(*d),
    }
}

fn parse_metadata(entries: &[String]) -> Result<BTreeMap<String, String>> {
    let mut metadata = BTreeMap::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((key, value)) => {
                metadata.insert(key.to_string(), value.to_string());
            }
            None => anyhow::bail!("Invalid --meta entry '{}'. Expected KEY=VALUE", entry),
        }
    }
    Ok(metadata)
}
