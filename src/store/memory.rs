use std::cell::RefCell;

use super::*;

/// Keeps the last saved snapshot in memory only.
#[derive(Default)]
pub struct MemStore {
    pub data: RefCell<AddressBook>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<AddressBook, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, book: &AddressBook) -> Result<(), AppError> {
        *self.data.borrow_mut() = book.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
