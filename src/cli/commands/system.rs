use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::commands::{budget, fields, preferences};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Dream Calc {}", meta.version));
    io::print_info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    io::print_info(format!("  Built at     : {}", meta.timestamp));
    io::print_info(format!("  Target       : {}", meta.target));
    io::print_info(format!("  Profile      : {}", meta.profile));
    io::print_info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => {
                output_section(format!("Help: {}", entry.name));
                command_lines(entry).into_iter().for_each(io::print_info);
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output_section("Dream Calc commands");
    overview_lines(context).into_iter().for_each(io::print_info);
    Ok(())
}

/// Commands grouped the way they are registered, each with its usage line.
fn overview_lines(context: &ShellContext) -> Vec<String> {
    let groups = [
        ("Budget", budget::definitions()),
        ("Fields", fields::definitions()),
        ("Preferences", preferences::definitions()),
        ("Shell", definitions()),
    ];
    let mut lines = Vec::new();
    for (title, entries) in groups {
        lines.push(format!("{title}:"));
        for entry in entries.iter().filter_map(|entry| context.command(entry.name)) {
            lines.push(format!("  {:<38} {}", entry.usage, entry.description));
        }
    }
    lines.push("Amounts accept spaces and a decimal comma, e.g. `income 75 000`.".into());
    lines.push("Use `help <command>` for details; Tab completes names and values.".into());
    lines
}

fn command_lines(entry: &CommandEntry) -> Vec<String> {
    let mut lines = vec![
        format!("  {}", entry.description),
        format!("  Usage: {}", entry.usage),
    ];
    let note = match entry.name {
        "income" | "goal" => Some("Missing values are asked for, starting from the current input."),
        "add" => Some("Amounts are per period; the last chosen period is kept, month at first."),
        "remove" => Some("Use the number from `list` or at least 8 characters of the id."),
        "focus" => Some("Only the feedback is cleared; the typed value stays."),
        "reset" => Some("Asks for confirmation in the interactive shell."),
        _ => None,
    };
    lines.extend(note.map(|note| format!("  {note}")));
    lines
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::CliMode;
    use crate::storage::MemoryStorage;

    fn context() -> ShellContext {
        ShellContext::with_storage(CliMode::Script, MemoryStorage::new())
    }

    #[test]
    fn overview_groups_budget_commands_with_usage() {
        let lines = overview_lines(&context());
        assert_eq!(lines.first().map(String::as_str), Some("Budget:"));
        assert!(lines
            .iter()
            .any(|line| line.contains("add [name] [amount] [day|week|month]")));
        let fields_at = lines.iter().position(|line| line == "Fields:").unwrap();
        let focus_at = lines
            .iter()
            .position(|line| line.trim_start().starts_with("focus <income"))
            .unwrap();
        assert!(focus_at > fields_at);
        assert!(lines.iter().any(|line| line == "Shell:"));
    }

    #[test]
    fn command_help_adds_budget_notes() {
        let context = context();
        let lines = command_lines(context.command("remove").unwrap());
        assert_eq!(lines[1], "  Usage: remove <#|id>");
        assert!(lines[2].contains("8 characters"));
        assert_eq!(command_lines(context.command("show").unwrap()).len(), 2);
    }
}
