use sf_catalog::ProductId;

/// UI interactions the storefront reacts to, independent of how the front
/// end delivers them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    ToggleCart(ProductId),
    ToggleWishlist(ProductId),
    /// Search button pressed with the current search field contents.
    Search { query: String },
    /// Key pressed inside the search field; only Enter searches.
    SearchKey { key: String, query: String },
    /// Price filter button pressed with the raw min/max field contents.
    FilterPrice { min: String, max: String },
}

pub const ENTER_KEY: &str = "Enter";

/// Per-card controls. Front ends listen once on the products area and map
/// a click back to the control and the card's `data-id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardControl {
    Cart,
    Wishlist,
}

impl CardControl {
    pub const ALL: [CardControl; 2] = [CardControl::Cart, CardControl::Wishlist];

    pub fn selector(self) -> &'static str {
        match self {
            CardControl::Cart => ".btn.add",
            CardControl::Wishlist => ".btn.wish",
        }
    }

    /// The toggle for the card whose `data-id` is `data_id`; `None` when the
    /// attribute is not a product ID.
    pub fn event(self, data_id: &str) -> Option<UiEvent> {
        let id = ProductId(data_id.trim().parse().ok()?);
        Some(match self {
            CardControl::Cart => UiEvent::ToggleCart(id),
            CardControl::Wishlist => UiEvent::ToggleWishlist(id),
        })
    }
}
