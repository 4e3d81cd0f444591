use colored::*;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use github_repo_browser::app::{self, App};
use github_repo_browser::fetch::GitHubClient;
use github_repo_browser::theme::Theme;
use github_repo_browser::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // The terminal belongs to the UI, so logs go to a file in the temp dir.
    let log_guard = init_tracing()?;

    let client = GitHubClient::new()?;
    let theme = Theme::default();
    let mut app = App::new();

    let mut terminal = setup_terminal()?;
    let result = app::run(&mut terminal, &mut app, client, &theme).await;
    restore_terminal(&mut terminal)?;

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        drop(log_guard);
        std::process::exit(1);
    }
    info!("terminal restored, exiting");
    Ok(())
}

fn init_tracing() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_path = std::env::temp_dir().join("github-repo-browser.log");
    let log_file = std::fs::File::create(&log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(log_file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    info!(path = %log_path.display(), "logging initialized");
    Ok(guard)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
