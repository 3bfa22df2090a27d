//! Commands that read or change the budget itself.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::render;
use crate::ledger::{CategoryId, Period};
use crate::validation::{Field, FieldFeedback, Submission};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("show", "Show the monthly summary", "show", cmd_show),
        CommandEntry::new("list", "List expense categories", "list", cmd_list),
        CommandEntry::new(
            "income",
            "Set the monthly income",
            "income [amount]",
            cmd_income,
        ),
        CommandEntry::new(
            "add",
            "Add an expense category",
            "add [name] [amount] [day|week|month]",
            cmd_add,
        ),
        CommandEntry::new(
            "remove",
            "Remove a category by list number or id",
            "remove <#|id>",
            cmd_remove,
        ),
        CommandEntry::new(
            "goal",
            "Set the savings goal",
            "goal [name] [amount]",
            cmd_goal,
        ),
        CommandEntry::new("reset", "Erase all budget data", "reset", cmd_reset),
    ]
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Budget");
    for line in render::summary_lines(context.store.state(), &context.config) {
        io::print_info(line);
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let categories = &context.store.state().categories;
    if categories.is_empty() {
        io::print_info("No categories yet. Use `add <name> <amount> [period]`.");
        return Ok(());
    }
    output_section("Categories");
    for line in render::category_lines(categories, &context.config) {
        io::print_info(line);
    }
    Ok(())
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 1, "income [amount]")?;
    fill_field(context, Field::Income, args.first().copied(), "Monthly income")?;
    let submission = context.engine.submit_income(&mut context.store)?;
    report_submission(context, &[Field::Income], &submission);
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 3, "add [name] [amount] [day|week|month]")?;
    fill_field(context, Field::CategoryName, args.first().copied(), "Category name")?;
    fill_field(context, Field::CategoryAmount, args.get(1).copied(), "Amount")?;
    match args.get(2) {
        Some(raw) => {
            let period = raw
                .parse::<Period>()
                .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
            context.engine.select_period(period);
        }
        None if args.len() < 2 && context.is_interactive() => {
            let items: Vec<String> = Period::SELECTABLE.iter().map(Period::label).collect();
            let current = Period::SELECTABLE
                .iter()
                .position(|period| period == context.engine.period())
                .unwrap_or(2);
            let choice = io::select_index(&context.theme, "Period", &items, current)?;
            if let Some(period) = Period::SELECTABLE.get(choice) {
                context.engine.select_period(period.clone());
            }
        }
        None => {}
    }

    let submission = context.engine.submit_category(&mut context.store)?;
    report_submission(
        context,
        &[Field::CategoryName, Field::CategoryAmount],
        &submission,
    );
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [target] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: remove <#|id>".into(),
        ));
    };
    let id = resolve_category(context, target)?;
    let submission = context.engine.delete_category(&mut context.store, &id)?;
    if submission.committed {
        io::print_success("category removed");
        print_projection_hint(context);
    } else {
        io::print_warning(format!("No category matches `{}`.", target));
    }
    Ok(())
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_at_most(args, 2, "goal [name] [amount]")?;
    fill_field(context, Field::GoalName, args.first().copied(), "Goal name")?;
    fill_field(context, Field::GoalAmount, args.get(1).copied(), "Goal amount")?;
    let submission = context.engine.submit_goal(&mut context.store)?;
    report_submission(context, &[Field::GoalName, Field::GoalAmount], &submission);
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.is_interactive()
        && !io::confirm_action(&context.theme, "Erase income, categories and goal?", false)?
    {
        io::print_info("Reset cancelled.");
        return Ok(());
    }
    context.engine.reset(&mut context.store)?;
    io::print_success("budget cleared");
    Ok(())
}

/// Puts `value` into `field`; without a value, interactive sessions prompt for one
/// and script sessions reuse whatever the field already holds.
fn fill_field(
    context: &mut ShellContext,
    field: Field,
    value: Option<&str>,
    prompt: &str,
) -> CommandResult {
    context.engine.focus(field);
    match value {
        Some(value) => context.engine.input(field, value),
        None if context.is_interactive() => {
            let initial = context.engine.input_value(field).to_string();
            let answer = io::prompt_text(&context.theme, prompt, &initial)?;
            context.engine.input(field, answer);
        }
        None => {}
    }
    Ok(())
}

fn report_submission(context: &ShellContext, fields: &[Field], submission: &Submission) {
    let mut reported = Vec::new();
    for field in fields {
        match context.engine.feedback(*field) {
            FieldFeedback::Error(message) => io::print_error(format!("{field}: {message}")),
            FieldFeedback::Success(message) if !reported.contains(message) => {
                io::print_success(message);
                reported.push(message.clone());
            }
            _ => {}
        }
    }
    if submission.committed {
        print_projection_hint(context);
    }
}

fn print_projection_hint(context: &ShellContext) {
    for line in render::summary_lines(context.store.state(), &context.config) {
        io::print_info(format!("  {line}"));
    }
}

/// A 1-based list position, an exact id, or a unique id prefix at least as long
/// as the id shown by `list`.
fn resolve_category(context: &ShellContext, target: &str) -> Result<CategoryId, CommandError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: remove <#|id>".into(),
        ));
    }

    let categories = &context.store.state().categories;
    if let Ok(position) = target.parse::<usize>() {
        if let Some(category) = position.checked_sub(1).and_then(|i| categories.get(i)) {
            return Ok(category.id.clone());
        }
    }
    if target.len() < render::SHORT_ID_LEN
        || categories.iter().any(|category| category.id.as_str() == target)
    {
        return Ok(CategoryId::from(target));
    }

    let mut matches = categories
        .iter()
        .filter(|category| category.id.as_str().starts_with(target));
    match (matches.next(), matches.next()) {
        (Some(category), None) => Ok(category.id.clone()),
        _ => Ok(CategoryId::from(target)),
    }
}

fn expect_at_most(args: &[&str], max: usize, usage: &str) -> CommandResult {
    if args.len() > max {
        return Err(CommandError::InvalidArguments(format!("usage: {usage}")));
    }
    Ok(())
}
