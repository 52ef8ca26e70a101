use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::birthdays::DEFAULT_WINDOW_DAYS;
use crate::store::DEFAULT_DATABASE_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex-vault",
    version,
    about = "Encrypted contact book with birthday reminders"
)]
pub struct Cli {
    /// Encrypted contact file
    #[arg(long, env = "ROLODEX_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Password for the contact file; prompted for when omitted
    #[arg(long, env = "ROLODEX_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// How many days ahead `birthdays` looks
    #[arg(long, env = "ROLODEX_BIRTHDAY_WINDOW", default_value_t = DEFAULT_WINDOW_DAYS)]
    pub days: u32,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, env = "ROLODEX_TODAY", hide = true)]
    pub today: Option<NaiveDate>,

    /// Run a single command; without one an interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One subcommand per verb of the interactive session.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a new contact with a phone number (10 digits)
    Add { name: String, phone: String },

    /// Set a contact's birthday once (DD.MM.YYYY)
    AddBirthday { name: String, date: String },

    /// Replace one of a contact's phone numbers
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Delete a contact
    Del { name: String },

    /// Show a contact's phone numbers
    Phone { name: String },

    /// Find who owns a phone number
    FindPhone { phone: String },

    /// Remove one phone number from a contact
    RemovePhone { name: String, phone: String },

    /// List every contact
    All,

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// List birthdays coming up within the lookahead window
    Birthdays,

    /// Greet
    Hello,
}

impl Commands {
    /// Commands that leave the book untouched need no save afterwards.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Commands::Phone { .. }
                | Commands::FindPhone { .. }
                | Commands::All
                | Commands::ShowBirthday { .. }
                | Commands::Birthdays
                | Commands::Hello
        )
    }
}
