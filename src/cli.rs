pub mod command;
pub mod run;

use std::io::{BufRead, Write};

use crate::domain::{Contact, UpcomingBirthday, birthdays::format_date};
use crate::errors::AppError;

pub const HELP_TEXT: &str = "\
'add [name] [phone]'                      to add a new contact (phone must be 10 digits).
'add-birthday [name] [birth date]'        to add a date of birth (format 'DD.MM.YYYY').
'all'                                     to review all contacts.
'birthdays'                               to show upcoming birthdays.
'change [name] [old phone] [new phone]'   to change a contact's phone number.
'del [name]'                              to delete a contact.
'phone [name]'                            to review a contact's phone numbers.
'find-phone [phone]'                      to find who a phone number belongs to.
'remove-phone [name] [phone]'             to remove a phone number from a contact.
'show-birthday [name]'                    to show a contact's birth date.
'hello'                                   to get a greeting.
'help'                                    to show this list.
'close' or 'exit'                         to save and leave.";

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    let phones = contact
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<&str>>()
        .join("; ");

    let mut output = format!(
        "Contact name: {:.<30} phones: {}",
        contact.name().as_str(),
        phones
    );
    if let Some(birthday) = contact.get_birthday() {
        output.push_str(&format!(" birthday: {}", birthday));
    }
    output
}

pub fn display_upcoming(birthdays: &[UpcomingBirthday]) -> String {
    birthdays
        .iter()
        .map(|b| {
            format!(
                "{:.<30}{}",
                b.name.as_str(),
                format_date(b.congratulation_date)
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn prompt<W: Write>(output: &mut W, message: &str) -> Result<(), AppError> {
    write!(output, "{}", message)?;
    output.flush()?;
    Ok(())
}

// INPUT FUNCTIONS

/// Next trimmed line, or `None` at end of input.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Next line with only its line ending removed, or `None` at end of input.
/// Surrounding spaces belong to the password.
pub fn get_password<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Splits a shell line into a normalized verb and its arguments. The verb is
/// lowercased with everything but letters stripped, so `add-birthday` and
/// `addbirthday` are the same command.
pub fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut parts = line.split_whitespace();
    let verb = parts
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    (verb, parts.collect())
}
