use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::render;
use crate::validation::Field;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "focus",
            "Clear the feedback of a field",
            "focus <income|category-name|category-amount|goal-name|goal-amount>",
            cmd_focus,
        ),
        CommandEntry::new(
            "feedback",
            "Show every field with its input and feedback",
            "feedback",
            cmd_feedback,
        ),
    ]
}

fn cmd_focus(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let field = args
        .first()
        .and_then(|key| Field::from_key(key))
        .ok_or_else(|| {
            let keys: Vec<_> = Field::ALL.iter().map(Field::key).collect();
            CommandError::InvalidArguments(format!("choose a field: {}", keys.join(", ")))
        })?;
    context.engine.focus(field);
    io::print_info(format!("{field}: feedback cleared"));
    Ok(())
}

fn cmd_feedback(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Fields");
    for line in render::feedback_lines(&context.engine) {
        io::print_info(line);
    }
    io::print_info(format!("period           {}", context.engine.period()));
    Ok(())
}
