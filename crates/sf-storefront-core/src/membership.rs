//! Cart and wishlist membership.
//!
//! Both are ordered ID sets mutated only by toggling. The cart is written
//! through to a `CartStore` on every toggle; the wishlist lives for the
//! session only.

use sf_catalog::ProductId;
use sf_storage::CartStore;
use tracing::{info, warn};

pub struct MembershipStore<K> {
    cart: Vec<ProductId>,
    wishlist: Vec<ProductId>,
    store: K,
}

impl<K> MembershipStore<K>
where
    K: CartStore,
{
    /// Restore the cart from `store`. An unreadable value starts an empty cart.
    pub fn restore(store: K) -> Self {
        let cart = match store.load_cart() {
            Ok(Some(ids)) => dedup(ids),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "stored cart unreadable; starting with an empty cart");
                Vec::new()
            }
        };
        info!(items = cart.len(), "cart restored");

        Self {
            cart,
            wishlist: Vec::new(),
            store,
        }
    }

    pub fn in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(&id)
    }

    pub fn in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.contains(&id)
    }

    pub fn cart(&self) -> &[ProductId] {
        &self.cart
    }

    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    /// Flip cart membership and persist the whole cart. Returns the new membership.
    pub fn toggle_cart(&mut self, id: ProductId) -> bool {
        let now_in_cart = toggle(&mut self.cart, id);
        if let Err(err) = self.store.save_cart(&self.cart) {
            warn!(error = %err, product = %id, "failed to persist cart");
        }
        now_in_cart
    }

    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        toggle(&mut self.wishlist, id)
    }
}

fn toggle(set: &mut Vec<ProductId>, id: ProductId) -> bool {
    match set.iter().position(|x| *x == id) {
        Some(index) => {
            set.remove(index);
            false
        }
        None => {
            set.push(id);
            true
        }
    }
}

fn dedup(ids: Vec<ProductId>) -> Vec<ProductId> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sf_storage::InMemoryCartStore;

    /// Reads nothing and rejects every write.
    pub(crate) struct UnwritableCartStore;

    impl CartStore for UnwritableCartStore {
        fn load_cart(&self) -> anyhow::Result<Option<Vec<ProductId>>> {
            Ok(None)
        }

        fn save_cart(&self, _ids: &[ProductId]) -> anyhow::Result<()> {
            anyhow::bail!("disk full")
        }
    }

    #[test]
    fn failed_cart_write_keeps_the_toggle() {
        let mut store = MembershipStore::restore(UnwritableCartStore);

        assert!(store.toggle_cart(ProductId(1)));
        assert!(store.in_cart(ProductId(1)));
        assert_eq!(store.cart(), &[ProductId(1)]);
        assert_eq!(store.cart_count(), 1);

        assert!(!store.toggle_cart(ProductId(1)));
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn double_toggle_restores_membership() {
        let mut store = MembershipStore::restore(InMemoryCartStore::default());
        let id = ProductId(4);

        assert!(store.toggle_cart(id));
        assert!(!store.toggle_cart(id));
        assert!(!store.in_cart(id));

        assert!(store.toggle_wishlist(id));
        assert!(!store.toggle_wishlist(id));
        assert!(!store.in_wishlist(id));
    }

    #[test]
    fn cart_survives_reload_wishlist_does_not() {
        let backing = InMemoryCartStore::default();
        let mut store = MembershipStore::restore(backing.clone());
        store.toggle_cart(ProductId(1));
        store.toggle_cart(ProductId(2));
        store.toggle_wishlist(ProductId(3));

        let reloaded = MembershipStore::restore(backing);
        assert_eq!(reloaded.cart(), &[ProductId(1), ProductId(2)]);
        assert!(reloaded.wishlist().is_empty());
    }

    #[test]
    fn every_toggle_overwrites_stored_value() {
        let backing = InMemoryCartStore::default();
        let mut store = MembershipStore::restore(backing.clone());
        store.toggle_cart(ProductId(9));
        assert_eq!(backing.raw().as_deref(), Some("[9]"));
        store.toggle_cart(ProductId(9));
        assert_eq!(backing.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn corrupt_or_duplicated_cart_is_tolerated() {
        let store = MembershipStore::restore(InMemoryCartStore::with_raw("{oops"));
        assert_eq!(store.cart_count(), 0);

        let store = MembershipStore::restore(InMemoryCartStore::with_raw("[2,2,5]"));
        assert_eq!(store.cart(), &[ProductId(2), ProductId(5)]);
    }
}
