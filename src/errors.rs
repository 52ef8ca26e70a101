use core::fmt;

/// Which user-supplied field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Phone => write!(f, "phone"),
            Field::Date => write!(f, "date"),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Regex(regex::Error),
    Validation { field: Field, message: String },
    NotFound(String),
    DuplicateContact(String),
    DuplicatePhone(String),
    WrongPassword,
    AccessDenied,
    Crypto(String),
    ParseCommand(String),
    InvalidArgs(String),
}

impl AppError {
    pub fn validation(field: Field, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Errors after which the session cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Crypto(_) | AppError::AccessDenied
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serde(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::Crypto(format!("malformed key encoding: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Serde(e) => {
                write!(f, "Stored contact data is unreadable: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Validation { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            AppError::NotFound(item) => {
                write!(f, "{} not found", item)
            }
            AppError::DuplicateContact(name) => {
                write!(f, "Contact '{}' already exists", name)
            }
            AppError::DuplicatePhone(phone) => {
                write!(f, "Phone {} is already in the list", phone)
            }
            AppError::WrongPassword => {
                write!(f, "Incorrect password")
            }
            AppError::AccessDenied => {
                write!(f, "Access denied.")
            }
            AppError::Crypto(msg) => {
                write!(f, "Encryption failure: {}", msg)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Invalid command: '{}'", cmd)
            }
            AppError::InvalidArgs(usage) => {
                write!(f, "Invalid arguments. Usage: {}", usage)
            }
        }
    }
}

impl std::error::Error for AppError {}
