use anyhow::Result;
use owo_colors::OwoColorize;
use planboard_core::Board;

pub async fn run(board: &Board, uid: String) -> Result<()> {
    let spinner = super::create_spinner("Deleting event");
    let result = board.delete_event(&uid).await;
    spinner.finish_and_clear();
    result?;

    println!("{}", format!("  Deleted: {}", uid).red());

    Ok(())
}
