pub mod cipher;
pub mod memory;
pub mod vault;

use std::fs;
use std::path::Path;

use crate::domain::AddressBook;
use crate::errors::AppError;

pub use cipher::{Cipher, EncryptionKey, derive_key};
pub use memory::MemStore;
pub use vault::EncryptedStore;

pub const DEFAULT_DATABASE_PATH: &str = "data/contacts.bin";

pub trait ContactStore {
    fn load(&self) -> Result<AddressBook, AppError>;

    fn save(&self, book: &AddressBook) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

/// Reads the book at `path` with a key derived from `password`. A missing
/// file yields an empty book.
pub fn load(path: &Path, password: &str) -> Result<AddressBook, AppError> {
    EncryptedStore::new(path, password)?.load()
}

/// Encrypts `book` and replaces whatever is stored at `path`.
pub fn save(path: &Path, book: &AddressBook, password: &str) -> Result<(), AppError> {
    EncryptedStore::new(path, password)?.save(book)
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
