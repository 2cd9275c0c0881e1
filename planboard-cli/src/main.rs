mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planboard_core::{Board, BoardConfig};

#[derive(Parser)]
#[command(name = "planboard")]
#[command(about = "View and edit your scheduling board from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch events from the backend and print the board
    Show {
        /// Show events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Show events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Print the raw board as JSON instead of the rendered view
        #[arg(long)]
        json: bool,
    },
    /// List the calendars the backend is connected to
    Calendars,
    /// Create an event
    New {
        title: String,

        /// Start (YYYY-MM-DD for all-day, or YYYY-MM-DDTHH:MM)
        #[arg(short, long)]
        start: String,

        /// End (same formats; defaults to one hour after start, or the start day)
        #[arg(short, long)]
        end: Option<String>,

        /// Calendar to create the event in (by name or URL)
        #[arg(short, long)]
        calendar: String,

        /// Where the event takes place
        #[arg(short, long)]
        location: Option<String>,

        /// Free-form notes
        #[arg(short, long)]
        description: Option<String>,

        /// Attach a metadata entry (repeatable), e.g. --meta order=4711
        #[arg(long, value_name = "KEY=VALUE")]
        meta: Vec<String>,
    },
    /// Edit fields of an existing event
    Update {
        uid: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New start (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// New end (same formats)
        #[arg(short, long)]
        end: Option<String>,

        /// New location
        #[arg(short, long)]
        location: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// Move the event to another calendar (by name or URL)
        #[arg(long)]
        calendar: Option<String>,
    },
    /// Delete an event
    Delete {
        uid: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Engine logs stay off unless asked for, so they cannot garble the
    // spinner output.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let board = connect()?;

    match cli.command {
        Commands::Show { from, to, json } => commands::show::run(&board, from, to, json).await,
        Commands::Calendars => commands::calendars::run(&board).await,
        Commands::New {
            title,
            start,
            end,
            calendar,
            location,
            description,
            meta,
        } => {
            commands::new::run(
                &board, title, start, end, calendar, location, description, meta,
            )
            .await
        }
        Commands::Update {
            uid,
            title,
            start,
            end,
            location,
            description,
            calendar,
        } => {
            commands::update::run(
                &board, uid, title, start, end, location, description, calendar,
            )
            .await
        }
        Commands::Delete { uid } => commands::delete::run(&board, uid).await,
    }
}

fn connect() -> Result<Board> {
    let config = BoardConfig::load()?;
    Ok(Board::from_config(config))
}
