use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use quicktask::gui::QuickTaskApp;
use quicktask::{ApiClient, FileSessionStore, Route};

#[derive(Parser)]
#[command(name = "quicktask")]
#[command(about = "Desktop client for the QuickTask task tracker")]
struct Cli {
    /// Base URL of the QuickTask API
    #[arg(long, value_name = "URL", default_value = "http://localhost:5000/api")]
    api_url: String,

    /// Where the login session is stored
    #[arg(long, value_name = "FILE")]
    session_file: Option<PathBuf>,

    /// Start path, e.g. /admin/tasks (access rules still apply)
    #[arg(long, value_name = "PATH", default_value = "/dashboard")]
    route: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn default_session_file() -> PathBuf {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".quicktask").join("session.json")
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose {
        "quicktask=debug"
    } else {
        "quicktask=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let api = ApiClient::new(&args.api_url)?;
    let session_file = args.session_file.unwrap_or_else(default_session_file);
    let store = FileSessionStore::new(session_file);
    let start = Route::from_path(&args.route);
    tracing::info!(api_url = %api.base_url(), session_file = %store.path().display(), "starting");

    iced::application(
        move || QuickTaskApp::new(api.clone(), store.clone(), start),
        QuickTaskApp::update,
        QuickTaskApp::view,
    )
    .title(QuickTaskApp::title)
    .theme(QuickTaskApp::theme)
    .run()?;

    Ok(())
}
