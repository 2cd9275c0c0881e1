use anyhow::Result;
use owo_colors::OwoColorize;
use planboard_core::{Board, EventPatch};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    board: &Board,
    uid: String,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    location: Option<String>,
    description: Option<String>,
    calendar: Option<String>,
) -> Result<()> {
    if title.is_none()
        && start.is_none()
        && end.is_none()
        && location.is_none()
        && description.is_none()
        && calendar.is_none()
    {
        anyhow::bail!("Nothing to update. Pass at least one field flag.");
    }

    let start = match start {
        Some(raw) => Some(super::parse_stamp(&raw)?),
        None => None,
    };
    let end = match end {
        Some(raw) => Some(super::parse_stamp(&raw)?),
        None => None,
    };
    let target_calendar = match calendar {
        Some(wanted) => Some(super::resolve_calendar_url(board, &wanted).await?),
        None => None,
    };

    let patch = EventPatch {
        title,
        start,
        end,
        location,
        description,
        metadata: None,
        target_calendar,
    };

    let spinner = super::create_spinner("Updating event");
    let result = board.update_event(&uid, &patch).await;
    spinner.finish_and_clear();
    result?;

    println!("{}", format!("  Updated: {}", uid).yellow());

    Ok(())
}
