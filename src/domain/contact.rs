use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
pub use crate::validation::{Birthday, Name, Phone};
use crate::validation::{validate_birthday, validate_name, validate_phone};

/// Outcome of a phone mutation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneStatus {
    Added,
    AlreadyPresent,
    Changed,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayStatus {
    Added,
    AlreadySet,
}

impl fmt::Display for PhoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneStatus::Added => write!(f, "Phone added."),
            PhoneStatus::AlreadyPresent => write!(f, "This phone is already in the list."),
            PhoneStatus::Changed => write!(f, "Phone changed."),
            PhoneStatus::NotFound => write!(f, "Phone not found."),
        }
    }
}

impl fmt::Display for BirthdayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BirthdayStatus::Added => write!(f, "Birthday added."),
            BirthdayStatus::AlreadySet => write!(f, "Birthday already written."),
        }
    }
}

/// One person in the book: a name, an ordered set of phones and an
/// optional birthday that can only be written once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredContact")]
pub struct Contact {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Contact as read from disk, before the phone list is checked.
#[derive(Deserialize)]
struct StoredContact {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<StoredContact> for Contact {
    type Error = AppError;

    fn try_from(stored: StoredContact) -> Result<Self, Self::Error> {
        for (idx, phone) in stored.phones.iter().enumerate() {
            if stored.phones[..idx].contains(phone) {
                return Err(AppError::DuplicatePhone(phone.to_string()));
            }
        }
        Ok(Contact {
            name: stored.name,
            phones: stored.phones,
            birthday: stored.birthday,
        })
    }
}

impl Contact {
    pub fn new(name: &str) -> Result<Self, AppError> {
        Ok(Self::from_name(validate_name(name)?))
    }

    pub fn from_name(name: Name) -> Self {
        Contact {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<PhoneStatus, AppError> {
        let phone = validate_phone(phone)?;

        if self.phones.contains(&phone) {
            return Ok(PhoneStatus::AlreadyPresent);
        }
        self.phones.push(phone);
        Ok(PhoneStatus::Added)
    }

    /// Replaces `old` with `new` in place. A missing `old` leaves the record
    /// untouched and reports [`PhoneStatus::NotFound`].
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneStatus, AppError> {
        let new = validate_phone(new)?;
        let old_idx = self.phones.iter().position(|p| p == old);

        if let Some(dup_idx) = self.phones.iter().position(|p| *p == new)
            && Some(dup_idx) != old_idx
        {
            return Err(AppError::DuplicatePhone(new.to_string()));
        }

        match old_idx {
            Some(idx) => {
                self.phones[idx] = new;
                Ok(PhoneStatus::Changed)
            }
            None => Ok(PhoneStatus::NotFound),
        }
    }

    pub fn find_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    pub fn remove_phone(&mut self, phone: &str) -> Result<(), AppError> {
        match self.phones.iter().position(|p| p == phone) {
            Some(idx) => {
                self.phones.remove(idx);
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Phone {}", phone))),
        }
    }

    pub fn set_birthday(&mut self, date: &str) -> Result<BirthdayStatus, AppError> {
        let birthday = validate_birthday(date)?;

        if self.birthday.is_some() {
            return Ok(BirthdayStatus::AlreadySet);
        }
        self.birthday = Some(birthday);
        Ok(BirthdayStatus::Added)
    }

    /// `None` means no birthday has been written yet.
    pub fn get_birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}
