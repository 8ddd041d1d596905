use crate::membership::MembershipStore;
use crate::view::{CardView, View, cart_control, wishlist_control};
use sf_catalog::Product;
use sf_storage::CartStore;
use tracing::debug;

pub const NO_RESULTS_MESSAGE: &str = "No products found matching your criteria.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Replace the products area with one card per product, then restore each
/// card's cart and wishlist state.
pub fn render_products<V, K>(view: &mut V, products: &[&Product], membership: &MembershipStore<K>)
where
    V: View + ?Sized,
    K: CartStore,
{
    view.clear_products();

    if products.is_empty() {
        view.show_message(NO_RESULTS_MESSAGE);
        return;
    }

    for product in products {
        view.append_card(&CardView::from_product(product));
        view.set_cart_control(product.id, cart_control(membership.in_cart(product.id)));
        view.set_wishlist_control(product.id, wishlist_control(membership.in_wishlist(product.id)));
    }

    debug!(cards = products.len(), "products rendered");
}

pub fn render_fetch_failure<V: View + ?Sized>(view: &mut V) {
    view.clear_products();
    view.show_message(FETCH_FAILED_MESSAGE);
}
