use crate::commands::{name_arg, pair_args, CommandResult, Context};
use crate::error::CommandError;

const NAME_AND_DATE: &str = "Give me name and date of birth, separated by a space.";

pub fn add_birthday(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, date) = pair_args(args, NAME_AND_DATE)?;
    let record = ctx.book.find_mut(name).ok_or(CommandError::NotFound)?;
    record.add_birthday(date)?;
    Ok(format!("Birthday for {} added.", name))
}

pub fn show_birthday(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let name = name_arg(args)?;
    match ctx.book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
        None => Ok("No birthday found for this contact.".to_string()),
    }
}

pub fn days_to_birthday(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let name = name_arg(args)?;
    let record = ctx.book.find(name).ok_or(CommandError::NotFound)?;
    let days = record.days_to_birthday(ctx.today)?;
    Ok(format!("{} days until {}'s birthday.", days, name))
}

pub fn upcoming_birthdays(ctx: &mut Context<'_>) -> CommandResult {
    let window = ctx.config.upcoming_days;
    let upcoming = ctx.book.upcoming_birthdays(ctx.today, window);
    if upcoming.is_empty() {
        return Ok(format!("No upcoming birthdays in the next {} days.", window));
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for record in upcoming {
        if let Some(birthday) = record.birthday() {
            lines.push(format!("{}: {}", record.name(), birthday));
        }
    }
    Ok(lines.join("\n"))
}
