//! Application state and the message dispatch loop.

use crate::error::{RepoBrowserError, Result};
use crate::fetch::GitHubClient;
use crate::theme::Theme;
use crate::types::Repository;
use crate::ui;
use crate::widgets::spinner::TICK_INTERVAL;
use crate::widgets::{InputField, RepoTable, Spinner};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{error, info};

/// Everything that can happen, as seen by the dispatch loop. State changes
/// only in response to one of these.
#[derive(Debug)]
pub enum Msg {
    /// A key press from the terminal.
    Key(KeyEvent),
    /// A fetch task finished with a decoded result set.
    FetchCompleted(Vec<Repository>),
    /// A fetch task failed at transport, status, or decode stage.
    FetchFailed(RepoBrowserError),
    /// Spinner heartbeat.
    Tick,
    /// Terminal resized; nothing to do but repaint.
    Redraw,
}

/// Follow-up work requested by an update. Commands are interpreted by the
/// dispatch loop as spawned tasks whose outcome re-enters as a [`Msg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchRepos(String),
    ScheduleTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Table,
}

pub struct App {
    pub input: InputField,
    pub table: RepoTable,
    pub spinner: Spinner,
    /// At most one component holds focus; `None` while a fetch is pending.
    pub focus: Option<Focus>,
    /// Username captured at the moment of submission.
    pub username: String,
    pub repos: Vec<Repository>,
    pub error: Option<RepoBrowserError>,
    pub loading: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            input: InputField::new(),
            table: RepoTable::new(),
            spinner: Spinner::new(),
            focus: Some(Focus::Input),
            username: String::new(),
            repos: Vec::new(),
            error: None,
            loading: false,
            should_quit: false,
        }
    }

    /// Apply one message to the state and return the follow-up commands.
    /// This is the only place application state changes.
    pub fn update(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::Key(key) => return self.handle_key(key),
            Msg::FetchCompleted(repos) => {
                info!(count = repos.len(), username = %self.username, "repository fetch completed");
                self.table.set_repos(&repos);
                self.repos = repos;
                self.loading = false;
                self.focus = Some(Focus::Table);
            }
            Msg::FetchFailed(err) => {
                error!(error = %err, username = %self.username, "repository fetch failed");
                self.error = Some(err);
                self.loading = false;
            }
            Msg::Tick => {
                self.spinner.advance();
                if self.loading {
                    return vec![Command::ScheduleTick];
                }
            }
            Msg::Redraw => {}
        }
        Vec::new()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Vec::new();
            }
            (KeyCode::Esc, _) => {
                self.toggle_focus();
                return Vec::new();
            }
            (KeyCode::Enter, _) if self.focus == Some(Focus::Input) => {
                return self.submit();
            }
            _ => {}
        }

        match self.focus {
            Some(Focus::Input) => self.input.handle_key(key),
            Some(Focus::Table) => self.table.handle_key(key),
            None => {}
        }
        Vec::new()
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Some(Focus::Input) => Some(Focus::Table),
            // From the table, or from the unfocused stretch while a fetch is
            // pending, Escape lands on the input field.
            Some(Focus::Table) | None => Some(Focus::Input),
        };
    }

    fn submit(&mut self) -> Vec<Command> {
        // At most one fetch in flight: Enter is inert until the outcome
        // message arrives.
        if self.loading {
            return Vec::new();
        }
        self.username = self.input.value();
        self.loading = true;
        self.error = None;
        self.focus = None;
        info!(username = %self.username, "starting repository fetch");
        vec![
            Command::FetchRepos(self.username.clone()),
            Command::ScheduleTick,
        ]
    }
}

/// Drive the application: draw, wait for the next message, update, and
/// interpret the returned commands. Messages are consumed strictly one at a
/// time, so every update sees the state its predecessor left behind.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: GitHubClient,
    theme: &Theme,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());

    loop {
        terminal.draw(|frame| ui::render(frame, app, theme))?;

        let Some(msg) = rx.recv().await else {
            break;
        };
        let commands = app.update(msg);
        if app.should_quit {
            break;
        }
        for command in commands {
            dispatch(command, &client, &tx);
        }
    }

    Ok(())
}

/// Forward terminal events into the message channel. Only key presses count:
/// release and repeat events would double keystrokes on Windows terminals.
fn spawn_event_reader(tx: UnboundedSender<Msg>) {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(Ok(event)) = events.next().await {
            let msg = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Msg::Key(key),
                Event::Resize(_, _) => Msg::Redraw,
                _ => continue,
            };
            if tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn dispatch(command: Command, client: &GitHubClient, tx: &UnboundedSender<Msg>) {
    match command {
        Command::FetchRepos(username) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let msg = match client.fetch_user_repos(&username).await {
                    Ok(repos) => Msg::FetchCompleted(repos),
                    Err(err) => Msg::FetchFailed(err),
                };
                let _ = tx.send(msg);
            });
        }
        Command::ScheduleTick => {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(TICK_INTERVAL).await;
                let _ = tx.send(Msg::Tick);
            });
        }
    }
}
