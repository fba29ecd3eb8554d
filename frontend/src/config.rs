// Customers view settings stored in the browser

use customers_shared::CustomersConfig;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

pub const CONFIG_STORAGE_KEY: &str = "customers_config";

/// Reads the stored config. A missing key is not an error and yields the defaults.
pub fn load() -> Result<CustomersConfig, StorageError> {
    match LocalStorage::get::<CustomersConfig>(CONFIG_STORAGE_KEY) {
        Err(StorageError::KeyNotFound(_)) => Ok(CustomersConfig::default()),
        other => other,
    }
}
