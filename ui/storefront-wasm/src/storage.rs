//! localStorage-backed cart persistence.

use anyhow::{Result, anyhow};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use sf_catalog::ProductId;
use sf_storage::{CART_STORAGE_KEY, CartStore};

#[derive(Clone, Copy, Default)]
pub struct LocalCartStore;

impl CartStore for LocalCartStore {
    fn load_cart(&self) -> Result<Option<Vec<ProductId>>> {
        match LocalStorage::get::<Vec<ProductId>>(CART_STORAGE_KEY) {
            Ok(ids) => Ok(Some(ids)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(anyhow!("read localStorage[{CART_STORAGE_KEY}]: {err}")),
        }
    }

    fn save_cart(&self, ids: &[ProductId]) -> Result<()> {
        LocalStorage::set(CART_STORAGE_KEY, ids)
            .map_err(|err| anyhow!("write localStorage[{CART_STORAGE_KEY}]: {err}"))
    }
}
