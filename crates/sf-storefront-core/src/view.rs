//! Abstract UI surface the storefront renders into.
//!
//! The browser front end implements `View` over the DOM; `HeadlessView`
//! keeps the same state in memory.

use sf_catalog::{Product, ProductId};

pub const CART_ACTIVE_CLASS: &str = "in-cart";
pub const WISHLIST_ACTIVE_CLASS: &str = "active";

/// Everything a card slot displays for one product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: ProductId,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub old_price: String,
}

impl CardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: product.image.clone(),
            image_alt: product.title.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_price(product.price_after_sale),
            old_price: format_price(product.old_price),
        }
    }
}

pub fn format_price(amount: i64) -> String {
    format!("${amount}")
}

/// Visual state of a card's cart or wishlist control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub class: &'static str,
    pub active: bool,
    /// Button caption; the wishlist control is icon-only.
    pub text: Option<&'static str>,
    pub aria_label: &'static str,
}

pub fn cart_control(in_cart: bool) -> ControlState {
    let label = if in_cart { "Remove from cart" } else { "Add to cart" };
    ControlState {
        class: CART_ACTIVE_CLASS,
        active: in_cart,
        text: Some(label),
        aria_label: label,
    }
}

pub fn wishlist_control(in_wishlist: bool) -> ControlState {
    ControlState {
        class: WISHLIST_ACTIVE_CLASS,
        active: in_wishlist,
        text: None,
        aria_label: if in_wishlist {
            "Remove from wishlist"
        } else {
            "Add to wishlist"
        },
    }
}

pub trait View {
    /// Remove every card and message from the products area.
    fn clear_products(&mut self);
    /// Append one card, wiring its controls to the given product.
    fn append_card(&mut self, card: &CardView);
    /// Show a single message in the products area.
    fn show_message(&mut self, message: &str);
    /// Cart count indicator; zero hides it.
    fn set_cart_badge(&mut self, count: usize);
    /// No-op when no card for `id` is displayed.
    fn set_cart_control(&mut self, id: ProductId, control: ControlState);
    /// No-op when no card for `id` is displayed.
    fn set_wishlist_control(&mut self, id: ProductId, control: ControlState);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlessCard {
    pub card: CardView,
    pub cart: ControlState,
    pub wishlist: ControlState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadlessEntry {
    Card(HeadlessCard),
    Message(String),
}

/// In-memory `View`.
#[derive(Clone, Debug, Default)]
pub struct HeadlessView {
    pub entries: Vec<HeadlessEntry>,
    pub badge_count: usize,
    pub badge_hidden: bool,
    /// Number of times the products area was cleared.
    pub clears: usize,
}

impl HeadlessView {
    pub fn cards(&self) -> Vec<&HeadlessCard> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                HeadlessEntry::Card(c) => Some(c),
                HeadlessEntry::Message(_) => None,
            })
            .collect()
    }

    pub fn titles(&self) -> Vec<String> {
        self.cards().iter().map(|c| c.card.title.clone()).collect()
    }

    pub fn message(&self) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            HeadlessEntry::Message(m) => Some(m.as_str()),
            HeadlessEntry::Card(_) => None,
        })
    }

    pub fn card(&self, id: ProductId) -> Option<&HeadlessCard> {
        self.cards().into_iter().find(|c| c.card.id == id)
    }

    fn card_mut(&mut self, id: ProductId) -> Option<&mut HeadlessCard> {
        self.entries.iter_mut().find_map(|e| match e {
            HeadlessEntry::Card(c) if c.card.id == id => Some(c),
            _ => None,
        })
    }
}

impl View for HeadlessView {
    fn clear_products(&mut self) {
        self.entries.clear();
        self.clears += 1;
    }

    fn append_card(&mut self, card: &CardView) {
        self.entries.push(HeadlessEntry::Card(HeadlessCard {
            card: card.clone(),
            cart: cart_control(false),
            wishlist: wishlist_control(false),
        }));
    }

    fn show_message(&mut self, message: &str) {
        self.entries.push(HeadlessEntry::Message(message.to_owned()));
    }

    fn set_cart_badge(&mut self, count: usize) {
        self.badge_count = count;
        self.badge_hidden = count == 0;
    }

    fn set_cart_control(&mut self, id: ProductId, control: ControlState) {
        if let Some(card) = self.card_mut(id) {
            card.cart = control;
        }
    }

    fn set_wishlist_control(&mut self, id: ProductId, control: ControlState) {
        if let Some(card) = self.card_mut(id) {
            card.wishlist = control;
        }
    }
}
