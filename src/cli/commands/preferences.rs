use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandEntry;
use crate::config::Theme;
use crate::format::Language;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "theme",
            "Show or change the colour theme",
            "theme [light|dark|toggle]",
            cmd_theme,
        ),
        CommandEntry::new(
            "language",
            "Show or change the language of durations",
            "language [en|ru]",
            cmd_language,
        ),
    ]
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let theme = match args.first().map(|arg| arg.to_ascii_lowercase()) {
        None => {
            io::print_info(format!("Theme: {}", context.config_manager.load_theme()));
            return Ok(());
        }
        Some(arg) if arg == "toggle" => context.config_manager.toggle_theme()?,
        Some(arg) => {
            let theme: Theme = arg.parse().map_err(|_| {
                CommandError::InvalidArguments("usage: theme [light|dark|toggle]".into())
            })?;
            context.config_manager.save_theme(theme)?;
            theme
        }
    };
    output::set_preferences(OutputPreferences {
        theme,
        ..output::preferences()
    });
    io::print_success(format!("theme set to {theme}"));
    Ok(())
}

fn cmd_language(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(code) = args.first() else {
        io::print_info(format!("Language: {}", context.config.language.code()));
        return Ok(());
    };
    let language = Language::from_code(code)
        .ok_or_else(|| CommandError::InvalidArguments("usage: language [en|ru]".into()))?;
    context.config.language = language;
    context.config_manager.save(&context.config)?;
    io::print_success(format!("language set to {}", language.code()));
    Ok(())
}
