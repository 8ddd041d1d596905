use anyhow::{Context, Result};
use sf_catalog::ProductId;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key under which the cart is persisted.
pub const CART_STORAGE_KEY: &str = "cart";

/// Durable home of the cart's product IDs.
///
/// Writes always replace the whole stored value.
pub trait CartStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load_cart(&self) -> Result<Option<Vec<ProductId>>>;
    fn save_cart(&self, ids: &[ProductId]) -> Result<()>;
}

pub fn encode_cart(ids: &[ProductId]) -> Result<String> {
    serde_json::to_string(ids).context("encode cart")
}

pub fn decode_cart(raw: &str) -> Result<Vec<ProductId>> {
    serde_json::from_str::<Vec<ProductId>>(raw).context("decode cart")
}

/// Keeps the encoded cart in memory. Clones share the same slot, so a
/// clone handed to a fresh membership store behaves like a page reload.
#[derive(Clone, Default)]
pub struct InMemoryCartStore {
    raw: Rc<RefCell<Option<String>>>,
}

impl InMemoryCartStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: Rc::new(RefCell::new(Some(raw.to_owned()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl CartStore for InMemoryCartStore {
    fn load_cart(&self) -> Result<Option<Vec<ProductId>>> {
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(Some(decode_cart(raw)?)),
            None => Ok(None),
        }
    }

    fn save_cart(&self, ids: &[ProductId]) -> Result<()> {
        let encoded = encode_cart(ids)?;
        *self.raw.borrow_mut() = Some(encoded);
        Ok(())
    }
}

/// Stores the cart as a JSON array in `<dir>/cart.json`.
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{CART_STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileCartStore {
    fn load_cart(&self) -> Result<Option<Vec<ProductId>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        Ok(Some(decode_cart(&raw)?))
    }

    fn save_cart(&self, ids: &[ProductId]) -> Result<()> {
        let encoded = encode_cart(ids)?;
        std::fs::write(&self.path, encoded)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
