use gloo::storage::{LocalStorage, Storage};
use shared::{KeyValueStorage, StoreError};

/// `window.localStorage` as the event store's durable record
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }
}
