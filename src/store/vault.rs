use std::ffi::OsString;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{AddressBook, AppError, Cipher, ContactStore, create_file_parent};

/// The book on disk, encrypted with a password-derived key.
pub struct EncryptedStore {
    pub medium: String,
    pub path: PathBuf,
    cipher: Cipher,
}

impl EncryptedStore {
    pub fn new(path: &Path, password: &str) -> Result<Self, AppError> {
        Ok(Self::with_cipher(path, Cipher::from_password(password)?))
    }

    pub fn with_cipher(path: &Path, cipher: Cipher) -> Self {
        Self {
            medium: "encrypted".to_string(),
            path: path.to_path_buf(),
            cipher,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_atomic(&self, temp: &Path, blob: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp)?;
        file.write_all(blob)?;
        file.sync_all()?;
        fs::rename(temp, &self.path)
    }
}

impl fmt::Debug for EncryptedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedStore")
            .field("medium", &self.medium)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ContactStore for EncryptedStore {
    fn load(&self) -> Result<AddressBook, AppError> {
        if !fs::exists(&self.path)? {
            info!(path = %self.path.display(), "no contact file yet, starting empty");
            return Ok(AddressBook::new());
        }

        let blob = fs::read(&self.path)?;
        let data = match self.cipher.decrypt_data(&blob) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.path.display(), "contact file failed authentication");
                return Err(e);
            }
        };

        let book: AddressBook = serde_json::from_slice(&data)?;
        debug!(contacts = book.len(), "loaded contact book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = serde_json::to_vec(book)?;
        let blob = self.cipher.encrypt_data(&data)?;

        // Write next to the target and rename so a crash never leaves half a file.
        let temp = self.temp_path();
        if let Err(e) = self.write_atomic(&temp, &blob) {
            warn!(path = %self.path.display(), error = %e, "saving contact book failed");
            if let Err(cleanup) = fs::remove_file(&temp)
                && cleanup.kind() != io::ErrorKind::NotFound
            {
                warn!(temp = %temp.display(), error = %cleanup, "could not remove temp file");
            }
            return Err(e.into());
        }

        debug!(contacts = book.len(), path = %self.path.display(), "saved contact book");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
