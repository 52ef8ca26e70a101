pub mod birthdays;
pub mod book;
pub mod contact;

pub use birthdays::{UpcomingBirthday, upcoming};
pub use book::AddressBook;
pub use contact::{BirthdayStatus, Contact, PhoneStatus};
