//! Shell context construction, dispatch, and error reporting.

use std::io;

use dialoguer::theme::ColorfulTheme;

use crate::{
    config::ConfigManager,
    core::{errors::BudgetError, state_store::PersistedStateStore},
    storage::{JsonStorage, StorageBackend},
    validation::FieldValidationEngine,
};

pub use crate::cli::shell_context::{CliMode, ShellContext};
pub use crate::core::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};

const PROMPT: &str = "dream-calc> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl ShellContext {
    /// Opens the default data directory and loads the saved budget.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let storage = JsonStorage::new_default()?;
        Ok(Self::with_storage(mode, storage))
    }

    /// Builds a context over any storage backend; `storage` is shared by the
    /// budget snapshot and the preference records.
    pub fn with_storage<S>(mode: CliMode, storage: S) -> Self
    where
        S: StorageBackend + Clone + 'static,
    {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let (store, _) = PersistedStateStore::open(Box::new(storage.clone()));
        let config_manager = ConfigManager::new(Box::new(storage));
        let config = config_manager.load();
        output::set_preferences(OutputPreferences {
            plain: mode == CliMode::Script,
            theme: config_manager.load_theme(),
        });

        let engine = FieldValidationEngine::from_state(store.state());
        ShellContext {
            mode,
            registry,
            store,
            engine,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        }
    }

    pub(crate) fn prompt(&self) -> String {
        PROMPT.to_string()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let raw = &tokens[0];
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = self.registry.suggest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match cli_io::confirm_action(&self.theme, "Exit shell?", true) {
            Ok(answer) => Ok(answer),
            Err(CommandError::Io(err)) => Err(CliError::Io(err)),
            Err(_) => Ok(true),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(BudgetError::StorageError(message)) => {
                cli_io::print_error(format!("Could not save: {message}"));
                cli_io::print_hint("The change is kept for this session only.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    storage: crate::storage::MemoryStorage,
    lines: &[&str],
) -> Result<ShellContext, CommandError> {
    let mut app = ShellContext::with_storage(CliMode::Script, storage);
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(app)
}
