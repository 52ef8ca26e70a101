use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{debug, info, warn};

use crate::{
    cli::{
        HELP_TEXT,
        command::{Cli, Commands},
        display_contact, display_upcoming, get_input, get_password, parse_input, prompt,
    },
    domain::{AddressBook, Contact, birthdays::format_date, upcoming},
    errors::AppError,
    store::{ContactStore, EncryptedStore},
    validation::{validate_name, validate_phone},
};

pub const MAX_PASSWORD_ATTEMPTS: usize = 3;

/// Per-run values the birthday verb depends on.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub today: NaiveDate,
    pub days: u32,
}

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Run(Commands),
    Help,
    Close,
}

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let settings = Settings {
        today: cli.today.unwrap_or_else(|| Local::now().date_naive()),
        days: cli.days,
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout();

    let (store, mut book) = unlock(&cli.database, cli.password, &mut input, &mut output)?;
    info!(
        contacts = book.len(),
        medium = store.get_medium(),
        "contact book unlocked"
    );

    match cli.command {
        Some(command) => run_once(&mut book, &store, command, &settings),
        None => shell(&mut book, &store, &settings, &mut input, &mut output),
    }
}

/// Opens the store at `database`. A password given up front gets one try;
/// otherwise the user is prompted up to [`MAX_PASSWORD_ATTEMPTS`] times.
pub fn unlock<R: BufRead, W: Write>(
    database: &Path,
    password: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<(EncryptedStore, AddressBook), AppError> {
    if let Some(password) = password {
        let store = EncryptedStore::new(database, &password)?;
        let book = store.load()?;
        return Ok((store, book));
    }

    for attempt in 1..=MAX_PASSWORD_ATTEMPTS {
        prompt(output, "Please, enter password to AddressBook: ")?;
        let Some(password) = get_password(input)? else {
            break;
        };

        let store = EncryptedStore::new(database, &password)?;
        match store.load() {
            Ok(book) => return Ok((store, book)),
            Err(AppError::WrongPassword) => {
                warn!(attempt, "wrong password");
                writeln!(
                    output,
                    "Incorrect password. {} attempts left.",
                    MAX_PASSWORD_ATTEMPTS - attempt
                )?;
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::AccessDenied)
}

pub fn run_once(
    book: &mut AddressBook,
    store: &dyn ContactStore,
    command: Commands,
    settings: &Settings,
) -> Result<(), AppError> {
    let read_only = command.is_read_only();

    match execute(book, command, settings) {
        Ok(message) => println!("{}", message),
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            eprintln!("{}", e);
            return Ok(());
        }
    }

    if read_only {
        return Ok(());
    }
    store.save(book)
}

/// Interactive session. Saves and returns on `close`, `exit` or end of input.
pub fn shell<R: BufRead, W: Write>(
    book: &mut AddressBook,
    store: &dyn ContactStore,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    writeln!(output, "Welcome to the assistant bot!")?;

    loop {
        prompt(output, "Enter a command: ")?;
        let Some(line) = get_input(input)? else {
            writeln!(output)?;
            writeln!(output, "{}", close(store, book)?)?;
            return Ok(());
        };

        let (verb, args) = parse_input(&line);
        if verb.is_empty() {
            continue;
        }

        match parse_command(&verb, &args) {
            Ok(ShellCommand::Close) => {
                writeln!(output, "{}", close(store, book)?)?;
                return Ok(());
            }
            Ok(ShellCommand::Help) => writeln!(output, "{}", HELP_TEXT)?,
            Ok(ShellCommand::Run(command)) => match execute(book, command, settings) {
                Ok(message) => writeln!(output, "{}", message)?,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => writeln!(output, "{}", e)?,
            },
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

/// Checks the argument count for `verb` before anything runs.
pub fn parse_command(verb: &str, args: &[&str]) -> Result<ShellCommand, AppError> {
    let command = match (verb, args) {
        ("close" | "exit", []) => return Ok(ShellCommand::Close),
        ("help", []) => return Ok(ShellCommand::Help),
        ("hello", []) => Commands::Hello,
        ("add", [name, phone]) => Commands::Add {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("addbirthday", [name, date]) => Commands::AddBirthday {
            name: name.to_string(),
            date: date.to_string(),
        },
        ("change", [name, old_phone, new_phone]) => Commands::Change {
            name: name.to_string(),
            old_phone: old_phone.to_string(),
            new_phone: new_phone.to_string(),
        },
        ("del", [name]) => Commands::Del {
            name: name.to_string(),
        },
        ("phone", [name]) => Commands::Phone {
            name: name.to_string(),
        },
        ("findphone", [phone]) => Commands::FindPhone {
            phone: phone.to_string(),
        },
        ("removephone", [name, phone]) => Commands::RemovePhone {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("all", []) => Commands::All,
        ("showbirthday", [name]) => Commands::ShowBirthday {
            name: name.to_string(),
        },
        ("birthdays", []) => Commands::Birthdays,
        (verb, _) => {
            return Err(match usage(verb) {
                Some(usage) => AppError::InvalidArgs(usage.to_string()),
                None => AppError::ParseCommand(verb.to_string()),
            });
        }
    };
    Ok(ShellCommand::Run(command))
}

fn usage(verb: &str) -> Option<&'static str> {
    let usage = match verb {
        "close" | "exit" => "close",
        "help" => "help",
        "hello" => "hello",
        "add" => "add [name] [phone]",
        "addbirthday" => "add-birthday [name] [DD.MM.YYYY]",
        "change" => "change [name] [old phone] [new phone]",
        "del" => "del [name]",
        "phone" => "phone [name]",
        "findphone" => "find-phone [phone]",
        "removephone" => "remove-phone [name] [phone]",
        "all" => "all",
        "showbirthday" => "show-birthday [name]",
        "birthdays" => "birthdays",
        _ => return None,
    };
    Some(usage)
}

pub fn execute(
    book: &mut AddressBook,
    command: Commands,
    settings: &Settings,
) -> Result<String, AppError> {
    debug!(?command, "executing command");

    match command {
        Commands::Add { name, phone } => add(book, &name, &phone),
        Commands::AddBirthday { name, date } => add_birthday(book, &name, &date),
        Commands::Change {
            name,
            old_phone,
            new_phone,
        } => change(book, &name, &old_phone, &new_phone),
        Commands::Del { name } => delete(book, &name),
        Commands::Phone { name } => phone(book, &name),
        Commands::FindPhone { phone } => find_phone(book, &phone),
        Commands::RemovePhone { name, phone } => remove_phone(book, &name, &phone),
        Commands::All => all(book),
        Commands::ShowBirthday { name } => show_birthday(book, &name),
        Commands::Birthdays => Ok(birthdays(book, settings.today, settings.days)),
        Commands::Hello => Ok(hello()),
    }
}

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<String, AppError> {
    let mut contact = Contact::from_name(validate_name(name)?);
    contact.add_phone(phone)?;
    book.add(contact)?;
    Ok("Contact added.".to_string())
}

pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> Result<String, AppError> {
    let status = book.find_mut(name)?.set_birthday(date)?;
    Ok(status.to_string())
}

pub fn change(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> Result<String, AppError> {
    let status = book.find_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok(status.to_string())
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<String, AppError> {
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

pub fn phone(book: &AddressBook, name: &str) -> Result<String, AppError> {
    Ok(display_contact(book.find(name)?))
}

pub fn find_phone(book: &AddressBook, phone: &str) -> Result<String, AppError> {
    let phone = validate_phone(phone)?;
    Ok(match book.find_by_phone(phone.as_str()) {
        Some(name) => name.to_string(),
        None => "No contact found with this phone number.".to_string(),
    })
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<String, AppError> {
    book.find_mut(name)?.remove_phone(phone)?;
    Ok("Phone removed.".to_string())
}

pub fn all(book: &AddressBook) -> Result<String, AppError> {
    if book.is_empty() {
        return Ok("No contacts yet.".to_string());
    }
    Ok(book
        .list_all()
        .map(display_contact)
        .collect::<Vec<String>>()
        .join("\n"))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> Result<String, AppError> {
    Ok(match book.find(name)?.get_birthday() {
        Some(birthday) => format_date(birthday.date()),
        None => "No birthday date added.".to_string(),
    })
}

pub fn birthdays(book: &AddressBook, today: NaiveDate, days: u32) -> String {
    let found = upcoming(book, today, days);
    if found.is_empty() {
        return format!("No birthdays expected in the next {} days.", days);
    }
    display_upcoming(&found)
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// Persists the book and says goodbye.
pub fn close(store: &dyn ContactStore, book: &AddressBook) -> Result<String, AppError> {
    store.save(book)?;
    Ok("Good bye!".to_string())
}
