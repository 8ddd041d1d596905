//! Global application state.
//!
//! Uses a `RefCell`-wrapped `thread_local!` (WASM is single-threaded). The
//! storefront is created on first access, which restores the cart from
//! localStorage. Never hold a borrow across an `.await`.

use crate::storage::LocalCartStore;
use sf_storefront_core::Storefront;
use std::cell::RefCell;

thread_local! {
    static STOREFRONT: RefCell<Storefront<LocalCartStore>> =
        RefCell::new(Storefront::new(LocalCartStore));
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&Storefront<LocalCartStore>) -> R,
{
    STOREFRONT.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Storefront<LocalCartStore>) -> R,
{
    STOREFRONT.with(|s| f(&mut s.borrow_mut()))
}
