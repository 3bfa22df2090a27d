use std::io::{self, BufRead};
use std::path::PathBuf;

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use tracing::debug;

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output::info as output_info;
use crate::config::Theme;
use crate::core::utils::PathResolver;
use crate::ledger::Period;
use crate::validation::Field;

const SCRIPT_ENV: &str = "DREAM_CALC_CLI_SCRIPT";
const HISTORY_FILE: &str = "history.txt";

/// Runs the shell: a line editor on a terminal, or stdin commands when
/// `DREAM_CALC_CLI_SCRIPT` is set.
pub fn run_cli() -> Result<(), CliError> {
    if std::env::var_os(SCRIPT_ENV).is_some() {
        let mut context = ShellContext::new(CliMode::Script)?;
        return run_script(&mut context);
    }

    let mut context = ShellContext::new(CliMode::Interactive)?;
    output_info("Dream Calc. Type `help` for commands, Tab to complete.");
    run_interactive(&mut context)
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<BudgetHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(BudgetHelper::new(context)));

    let history = history_path();
    if let Err(err) = editor.load_history(&history) {
        debug!(error = %err, "no shell history loaded");
    }

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => {
                let _ = editor.add_history_entry(line.trim());
                if run_line(context, &line)? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) if context.confirm_exit()? => break,
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(err) = editor.save_history(&history) {
        debug!(error = %err, "shell history not saved");
    }
    Ok(())
}

/// Each stdin line is one command; a failing command does not stop the script.
fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if run_line(context, &line?)? == LoopControl::Exit || !context.running {
            break;
        }
    }
    Ok(())
}

fn run_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match context.process_line(line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

fn history_path() -> PathBuf {
    PathResolver::base_dir().join(HISTORY_FILE)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}

/// Completes command names, then the fixed choices some commands take:
/// periods for `add`, field keys for `focus`, themes and languages.
struct BudgetHelper {
    commands: Vec<&'static str>,
    usages: Vec<(&'static str, &'static str)>,
}

impl BudgetHelper {
    fn new(context: &ShellContext) -> Self {
        let entries = context.registry.list();
        Self {
            commands: entries.iter().map(|entry| entry.name).collect(),
            usages: entries
                .iter()
                .map(|entry| (entry.name, entry.usage))
                .collect(),
        }
    }

    /// Values accepted by argument `position` (0-based) of `command`.
    fn argument_choices(command: &str, position: usize) -> Vec<String> {
        match (command, position) {
            ("add", 2) => Period::SELECTABLE
                .iter()
                .map(|period| period.as_str().to_string())
                .collect(),
            ("focus", 0) => Field::ALL.iter().map(|field| field.key().to_string()).collect(),
            ("theme", 0) => [Theme::Light, Theme::Dark]
                .iter()
                .map(|theme| theme.as_str().to_string())
                .chain(std::iter::once("toggle".to_string()))
                .collect(),
            ("language", 0) => vec!["en".into(), "ru".into()],
            _ => Vec::new(),
        }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let start = line.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
        let needle = line[start..].to_ascii_lowercase();
        let words: Vec<&str> = line[..start].split_whitespace().collect();

        let pool: Vec<String> = match words.split_first() {
            None => self.commands.iter().map(|name| name.to_string()).collect(),
            Some((&"help", [])) => self.commands.iter().map(|name| name.to_string()).collect(),
            Some((command, rest)) => {
                Self::argument_choices(&command.to_ascii_lowercase(), rest.len())
            }
        };
        let matches = pool
            .into_iter()
            .filter(|choice| choice.starts_with(&needle))
            .collect();
        (start, matches)
    }
}

impl Helper for BudgetHelper {}

impl Completer for BudgetHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|choice| Pair {
                display: choice.clone(),
                replacement: choice,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for BudgetHelper {
    type Hint = String;

    /// After `<command> ` shows the rest of its usage line.
    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos != line.len() || !line.ends_with(' ') {
            return None;
        }
        let command = line.trim().to_ascii_lowercase();
        self.usages
            .iter()
            .find(|(name, _)| *name == command)
            .and_then(|(name, usage)| usage.strip_prefix(*name))
            .map(|rest| rest.trim_start().to_string())
            .filter(|rest| !rest.is_empty())
    }
}

impl Highlighter for BudgetHelper {}

impl Validator for BudgetHelper {}
