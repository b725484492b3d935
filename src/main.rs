use clap::Parser;
use std::{io, path::PathBuf};
use tracing_subscriber::EnvFilter;

use projects::{ProjectDb, ProjectsApp};

#[derive(Parser)]
#[command(name = "projects")]
#[command(about = "Add, list, select, update and delete projects from a menu")]
struct Cli {
    /// SQLite database holding the project table
    #[arg(long, value_name = "PATH", env = "PROJECTS_DB", default_value = "projects.db")]
    database: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let db = ProjectDb::new(&args.database).await?;
    let mut app = ProjectsApp::new(db, io::stdin().lock(), io::stdout());
    let result = app.run().await;

    let (db, _) = app.into_parts();
    db.close().await?;
    result
}
