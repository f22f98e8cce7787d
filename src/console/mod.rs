//! Administrative console
//!
//! Reads one command per line, resolves it through the [`Registry`] and runs
//! it against a single staged [`Session`]. Nothing is saved until `commit`;
//! any failure other than a syntax error rolls back everything staged since
//! the last commit.

mod commands;
pub mod editor;
pub mod pager;
pub mod registry;
pub mod table;
pub mod terminal;

use tokio::{
    io::{AsyncBufRead, AsyncWrite},
    sync::watch,
};

use crate::{bulletin::Bulletin, config::ConsoleConfig, error::AppError, repository::Session, services::Services};

pub use registry::{Registry, Resolution};
pub use terminal::Terminal;

pub const PROMPT: &str = " CATA > ";
pub const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    Running,
    Terminating,
}

pub struct Console<R, W> {
    terminal: Terminal<R, W>,
    session: Session,
    services: Services,
    registry: Registry,
    config: ConsoleConfig,
    bulletin: Bulletin,
    shutdown: Option<watch::Sender<bool>>,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(terminal: Terminal<R, W>, session: Session, services: Services, config: ConsoleConfig) -> Self {
        Self {
            terminal,
            session,
            services,
            registry: Registry::default(),
            config,
            bulletin: Bulletin::default(),
            shutdown: None,
        }
    }

    /// Publish `set` values on `bulletin`
    pub fn with_bulletin(mut self, bulletin: Bulletin) -> Self {
        self.bulletin = bulletin;
        self
    }

    /// Notify `shutdown` with `true` when the console quits
    pub fn with_shutdown(mut self, shutdown: watch::Sender<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn terminal(&self) -> &Terminal<R, W> {
        &self.terminal
    }

    /// Run until `quit` or end of input
    pub async fn run(&mut self) -> Result<(), AppError> {
        tracing::info!("Console started");
        loop {
            self.terminal.write(PROMPT).await?;
            let Some(line) = self.terminal.read_line().await? else {
                tracing::info!("Input closed, leaving console");
                self.signal_shutdown();
                break;
            };
            if self.handle_line(&line).await == ConsoleState::Terminating {
                break;
            }
        }
        Ok(())
    }

    /// Execute one line, reporting failures instead of returning them
    pub async fn handle_line(&mut self, line: &str) -> ConsoleState {
        let state = self.report(line).await;
        if let Err(e) = self.session.release().await {
            tracing::warn!("Could not close read transaction: {}", e);
        }
        state
    }

    async fn report(&mut self, line: &str) -> ConsoleState {
        match self.execute(line).await {
            Ok(state) => state,
            Err(AppError::Syntax(usage)) => {
                self.say(&format!("invalid syntax, usage: {usage}")).await;
                ConsoleState::Running
            }
            Err(e) => {
                tracing::error!("Command '{}' failed: {}", line.trim(), e);
                self.say(&format!(
                    "something went wrong, please check your command in the help menu\nrolling back changes\n{e}"
                ))
                .await;
                match self.session.rollback().await {
                    Ok(discarded) => {
                        self.say(&format!("discarded {discarded} staged change(s)")).await;
                    }
                    Err(e) => {
                        tracing::error!("Rollback failed: {}", e);
                        self.say(&format!("rollback failed: {e}")).await;
                    }
                }
                ConsoleState::Running
            }
        }
    }

    /// Execute one line
    pub async fn execute(&mut self, line: &str) -> Result<ConsoleState, AppError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [verb] if verb.eq_ignore_ascii_case("quit") => return self.quit().await,
            [verb, ..] if verb.eq_ignore_ascii_case("quit") => return Err(AppError::Syntax("quit".to_string())),
            [verb, ..] if verb.eq_ignore_ascii_case("help") => {
                self.help().await?;
                return Ok(ConsoleState::Running);
            }
            _ => {}
        }

        match self.registry.resolve(&tokens)? {
            Resolution::Command { spec, args } => {
                tracing::debug!("Dispatching {:?} with {:?}", spec.action, args);
                self.dispatch(spec.action, &args).await?;
            }
            Resolution::UnknownVerb(verb) => {
                tracing::debug!("Unknown command '{}'", verb);
                if self.config.report_unknown_commands {
                    self.terminal
                        .println(&format!("unknown command '{verb}', type help for a list of commands"))
                        .await?;
                }
            }
            Resolution::UnknownNoun { verb, noun } => {
                tracing::debug!("Ignoring unknown '{}' target '{}'", verb, noun);
            }
            Resolution::Empty => {}
        }

        Ok(ConsoleState::Running)
    }

    async fn quit(&mut self) -> Result<ConsoleState, AppError> {
        self.terminal.println("shutting down...").await?;
        let staged = self.session.staged();
        if staged > 0 {
            tracing::warn!("Quitting with {} uncommitted change(s)", staged);
            self.terminal
                .println(&format!("{staged} uncommitted change(s) will be discarded"))
                .await?;
        }
        self.signal_shutdown();
        Ok(ConsoleState::Terminating)
    }

    fn signal_shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            // The web task may already be gone
            let _ = shutdown.send(true);
        }
    }

    async fn help(&mut self) -> Result<(), AppError> {
        let mut rows = vec![
            vec!["help".to_string(), String::new(), "show this table".to_string()],
            vec![
                "quit".to_string(),
                String::new(),
                "stop the console and the web server".to_string(),
            ],
        ];
        rows.extend(self.registry.help_rows());
        let table = table::render(&["command", "arguments", "description"], &rows, usize::MAX);
        self.terminal.write(&table).await
    }

    /// Print a message, logging instead if the terminal itself is failing
    async fn say(&mut self, message: &str) {
        if let Err(e) = self.terminal.println(message).await {
            tracing::error!("Could not write to terminal: {}", e);
        }
    }
}
