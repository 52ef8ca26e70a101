pub use crate::cli::{
    command::{self, Cli, Commands},
    run::{self, Settings, run_app},
};
pub use crate::domain::{
    AddressBook, BirthdayStatus, Contact, PhoneStatus, UpcomingBirthday,
    birthdays::{self, adjust_for_weekend, project_onto_year},
    book, contact, upcoming,
};
pub use crate::errors::{AppError, Field};
pub use crate::helper;
pub use crate::store::{
    self, Cipher, ContactStore, EncryptedStore, EncryptionKey, MemStore, derive_key,
};
pub use crate::validation::{
    Birthday, Name, Phone, validate_birthday, validate_name, validate_phone,
};
