use crate::error::{invalid_input, CommandError};
use chrono::NaiveDate;
use contactbook_config::AppConfig;
use contactbook_core::AddressBook;

pub mod birthdays;
pub mod contacts;

pub type CommandResult = Result<String, CommandError>;

pub const GREETING: &str = "How can I help you?";

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
    pub config: &'a AppConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Delete,
    Phone,
    All,
    RemovePhone,
    EditPhone,
    AddBirthday,
    ShowBirthday,
    DaysToBirthday,
    Birthdays,
}

impl Command {
    const ALL: [Command; 13] = [
        Command::Hello,
        Command::Help,
        Command::Add,
        Command::Change,
        Command::Delete,
        Command::Phone,
        Command::All,
        Command::RemovePhone,
        Command::EditPhone,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::DaysToBirthday,
        Command::Birthdays,
    ];

    /// Looks up an already lowercased command word.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.word() == word)
    }

    pub fn word(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Delete => "delete",
            Command::Phone => "phone",
            Command::All => "all",
            Command::RemovePhone => "remove-phone",
            Command::EditPhone => "edit-phone",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::DaysToBirthday => "days-to-birthday",
            Command::Birthdays => "birthdays",
        }
    }

    fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <new phone>",
            Command::Delete => "delete <name>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::EditPhone => "edit-phone <name> <old phone> <new phone>",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::DaysToBirthday => "days-to-birthday <name>",
            Command::Birthdays => "birthdays",
        }
    }
}

pub fn execute(ctx: &mut Context<'_>, command: Command, args: &[String]) -> CommandResult {
    match command {
        Command::Hello => Ok(GREETING.to_string()),
        Command::Help => Ok(help_text()),
        Command::Add => contacts::add_contact(ctx, args),
        Command::Change => contacts::change_contact(ctx, args),
        Command::Delete => contacts::delete_contact(ctx, args),
        Command::Phone => contacts::show_phones(ctx, args),
        Command::All => contacts::show_all(ctx),
        Command::RemovePhone => contacts::remove_phone(ctx, args),
        Command::EditPhone => contacts::edit_phone(ctx, args),
        Command::AddBirthday => birthdays::add_birthday(ctx, args),
        Command::ShowBirthday => birthdays::show_birthday(ctx, args),
        Command::DaysToBirthday => birthdays::days_to_birthday(ctx, args),
        Command::Birthdays => birthdays::upcoming_birthdays(ctx),
    }
}

fn help_text() -> String {
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(
        Command::ALL
            .iter()
            .map(|command| format!("  {}", command.usage())),
    );
    lines.push("  close | exit".to_string());
    lines.join("\n")
}

pub(crate) fn name_arg(args: &[String]) -> Result<&str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument)
}

pub(crate) fn pair_args<'a>(
    args: &'a [String],
    hint: &str,
) -> Result<(&'a str, &'a str), CommandError> {
    match args {
        [first, second, ..] => Ok((first.as_str(), second.as_str())),
        _ => Err(invalid_input(hint)),
    }
}
