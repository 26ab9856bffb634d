use crate::commands::{name_arg, pair_args, CommandResult, Context};
use crate::error::{invalid_input, CommandError, CONTACT_NOT_FOUND};
use contactbook_core::{Phone, Record};

const NAME_AND_PHONE: &str = "Give me name and phone please, separated by a space.";
const NAME_AND_TWO_PHONES: &str = "Give me name, old phone and new phone, separated by spaces.";

pub fn add_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, phone) = pair_args(args, NAME_AND_PHONE)?;
    let mut record = Record::new(name);
    record.add_phone(phone)?;
    ctx.book.add_record(record);
    Ok(format!("Contact {} added with phone {}.", name, phone))
}

/// Replaces the contact's first stored phone.
pub fn change_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, new_phone) = pair_args(args, NAME_AND_PHONE)?;
    let record = ctx.book.find_mut(name).ok_or(CommandError::NotFound)?;
    let Some(first) = record.phones().first().map(|phone| phone.as_str().to_string()) else {
        return Ok(format!("Contact {} has no phones.", name));
    };
    Ok(record.edit_phone(&first, new_phone)?.to_string())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let name = name_arg(args)?;
    match ctx.book.delete(name) {
        Some(_) => Ok(format!("Contact {} deleted.", name)),
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

pub fn show_phones(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let name = name_arg(args)?;
    let record = ctx.book.find(name).ok_or(CommandError::NotFound)?;
    Ok(format!("Phones for {}: {}", name, join_phones(record.phones())))
}

pub fn show_all(ctx: &mut Context<'_>) -> CommandResult {
    if ctx.book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    let lines: Vec<String> = ctx.book.iter().map(Record::to_string).collect();
    Ok(lines.join("\n"))
}

pub fn remove_phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let (name, phone) = pair_args(args, NAME_AND_PHONE)?;
    let record = ctx.book.find_mut(name).ok_or(CommandError::NotFound)?;
    Ok(record.remove_phone(phone).to_string())
}

pub fn edit_phone(ctx: &mut Context<'_>, args: &[String]) -> CommandResult {
    let [name, old, new, ..] = args else {
        return Err(invalid_input(NAME_AND_TWO_PHONES));
    };
    let record = ctx.book.find_mut(name).ok_or(CommandError::NotFound)?;
    Ok(record.edit_phone(old, new)?.to_string())
}

fn join_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}
