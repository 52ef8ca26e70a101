use core::fmt;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Field};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Number must contain exactly 10 digits".to_string()
    }

    pub fn date_req() -> String {
        "Date must exist and be written as DD.MM.YYYY".to_string()
    }
}

/// A contact name. Only obtainable through [`validate_name`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

/// A ten digit phone number. Only obtainable through [`validate_phone`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

pub fn validate_name(name: &str) -> Result<Name, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation(Field::Name, ValidationReq::name_req()));
    }
    Ok(Name(name.to_string()))
}

pub fn validate_phone(phone: &str) -> Result<Phone, AppError> {
    // ASCII digits only; `\d` would also accept other Unicode digits
    let re = Regex::new(r"^[0-9]{10}$")?;
    if !re.is_match(phone) {
        return Err(AppError::validation(
            Field::Phone,
            format!("'{}'. {}", phone, ValidationReq::phone_req()),
        ));
    }
    Ok(Phone(phone.to_string()))
}

pub fn validate_birthday(date: &str) -> Result<Birthday, AppError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map(Birthday)
        .map_err(|_| {
            AppError::validation(
                Field::Date,
                format!("'{}'. {}", date, ValidationReq::date_req()),
            )
        })
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<String> for Name {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_name(&value)
    }
}

impl TryFrom<String> for Phone {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_phone(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert_eq!(validate_name(" Uche ").unwrap().as_str(), "Uche");
    }

    #[test]
    fn phone_must_be_exactly_ten_ascii_digits() {
        for valid in ["0123456789", "0000000000", "9999999999"] {
            assert!(validate_phone(valid).is_ok(), "{valid} should pass");
        }

        for invalid in [
            "",
            "012345678",
            "01234567890",
            "01234 6789",
            "+123456789",
            "012345678a",
            "0123456789\n",
            "０１２３４５６７８９", // fullwidth digits
            "٠١٢٣٤٥٦٧٨٩",           // arabic-indic digits
        ] {
            assert!(validate_phone(invalid).is_err(), "{invalid:?} should fail");
        }
    }

    #[test]
    fn phone_error_names_the_field() {
        let err = validate_phone("123").unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation {
                field: Field::Phone,
                ..
            }
        ));
    }

    #[test]
    fn birthday_validation() -> Result<(), AppError> {
        let birthday = validate_birthday("15.06.1990")?;
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
        assert_eq!(birthday.to_string(), "15.06.1990");

        assert!(validate_birthday("29.02.2024").is_ok());
        assert!(validate_birthday("29.02.2023").is_err());
        assert!(validate_birthday("31.04.2020").is_err());
        assert!(validate_birthday("1990-06-15").is_err());
        assert!(validate_birthday("").is_err());
        Ok(())
    }

    #[test]
    fn deserializing_rejects_invalid_phone() {
        let phone: Result<Phone, _> = serde_json::from_str("\"12345\"");
        assert!(phone.is_err());

        let phone: Phone = serde_json::from_str("\"0123456789\"").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
    }
}
