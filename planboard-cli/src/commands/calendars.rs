use anyhow::Result;
use owo_colors::OwoColorize;
use planboard_core::Board;

pub async fn run(board: &Board) -> Result<()> {
    let spinner = super::create_spinner("Fetching calendars");
    let result = board.calendars().await;
    spinner.finish_and_clear();

    let calendars = result?;
    if calendars.is_empty() {
        println!("{}", "No calendars connected".dimmed());
        return Ok(());
    }

    for calendar in &calendars {
        println!("  {} {}", calendar.name.bold(), calendar.url.dimmed());
    }

    Ok(())
}
