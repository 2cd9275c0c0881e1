pub mod calendars;
pub mod delete;
pub mod new;
pub mod show;
pub mod update;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use indicatif::{ProgressBar, ProgressStyle};
use planboard_core::{Board, EventStamp};

pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Parse a user-supplied stamp. A bare date means all-day.
pub fn parse_stamp(input: &str) -> Result<EventStamp> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(EventStamp::Date(date));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(EventStamp::DateTime(dt.and_utc()));
        }
    }
    anyhow::bail!(
        "Could not parse \"{}\". Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM",
        input
    )
}

/// Resolve a calendar given by name or URL against the backend's list.
pub async fn resolve_calendar_url(board: &Board, wanted: &str) -> Result<String> {
    let calendars = board.calendars().await?;
    match calendars
        .iter()
        .find(|c| c.url == wanted || c.name == wanted)
    {
        Some(calendar) => Ok(calendar.url.clone()),
        None => {
            let available: Vec<_> = calendars.iter().map(|c| c.name.as_str()).collect();
            anyhow::bail!(
                "Calendar '{}' not found. Available: {}",
                wanted,
                available.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stamp_bare_date_is_all_day() {
        let stamp = parse_stamp("2025-06-01").unwrap();
        assert!(stamp.is_date());
    }

    #[test]
    fn test_parse_stamp_accepts_times_with_and_without_seconds() {
        assert!(!parse_stamp("2025-06-01T09:30").unwrap().is_date());
        assert!(!parse_stamp("2025-06-01T09:30:15").unwrap().is_date());
    }

    #[test]
    fn test_parse_stamp_rejects_garbage() {
        assert!(parse_stamp("next tuesday").is_err());
        assert!(parse_stamp("2025-13-01").is_err());
    }
}
