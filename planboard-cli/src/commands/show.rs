use std::collections::HashMap;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use owo_colors::OwoColorize;
use planboard_core::transform::inclusive_end;
use planboard_core::{Board, BoardSnapshot, BoardStatus, EventRecord, EventStamp};

pub async fn run(
    board: &Board,
    from: Option<String>,
    to: Option<String>,
    json: bool,
) -> Result<()> {
    let window = board.default_window();
    let from = from.unwrap_or_else(|| window.from.to_string());
    let to = to.unwrap_or_else(|| window.to.to_string());

    let spinner = super::create_spinner("Loading board");
    board.reconcile(&from, &to).await;
    spinner.finish_and_clear();

    let status = board.status();
    if status.is_failure() {
        anyhow::bail!("{status}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
        return Ok(());
    }

    if matches!(status, BoardStatus::NoCalendars) {
        println!("{}", status.to_string().dimmed());
        return Ok(());
    }

    render(&board.snapshot());
    Ok(())
}

fn render(snapshot: &BoardSnapshot) {
    let lane_names: HashMap<&str, &str> = snapshot
        .lanes
        .iter()
        .map(|lane| (lane.id.as_str(), lane.name.as_str()))
        .collect();

    let mut records: Vec<&EventRecord> = snapshot.items.iter().collect();
    records.sort_by_key(|record| record.start.to_utc());

    if records.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    // Group events by day and print
    let mut current_day: Option<String> = None;

    for record in records {
        let label = day_label(record.start.date());

        if current_day.as_ref() != Some(&label) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", label.bold());
            current_day = Some(label);
        }

        let lane = lane_names
            .get(record.lane_id.as_str())
            .copied()
            .unwrap_or(record.lane_id.as_str());
        let tag = format!("[{}]", lane);
        let mut line = format!(
            "  {} {} {}",
            format_time(&record.start),
            record.title,
            tag.dimmed()
        );

        if record.all_day {
            let last_day = inclusive_end(record).date();
            if last_day > record.start.date() {
                let span = format!("(until {})", last_day.format("%b %-d"));
                line.push_str(&format!(" {}", span.dimmed()));
            }
        }
        if record.is_optimistic() {
            line.push_str(&format!(" {}", "(pending)".yellow()));
        }

        println!("{}", line);
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn day_label(date: NaiveDate) -> String {
    let today = Utc::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time portion of a record (e.g. "15:00" or "all-day")
fn format_time(start: &EventStamp) -> String {
    match start {
        EventStamp::Date(_) => "all-day".to_string(),
        EventStamp::DateTime(dt) => format!("{:>7}", dt.format("%H:%M").to_string()),
    }
}
