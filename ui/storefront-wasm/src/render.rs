//! DOM implementation of the storefront `View`.
//!
//! Cards are deep clones of `#card-template .card` tagged with `data-id`.
//! Their controls are handled by one delegated listener bound in `events`.

use crate::dom::{self, Elements};
use sf_catalog::ProductId;
use sf_storefront_core::CardControl;
use sf_storefront_core::view::{CardView, ControlState, View};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

pub struct DomView {
    els: Elements,
}

impl DomView {
    pub fn new(els: &Elements) -> Self {
        Self { els: els.clone() }
    }

    fn fill_card(card: &Element, view: &CardView) {
        if let Some(img) = dom::query_within(card, ".card-media img")
            .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
        {
            img.set_src(&view.image);
            img.set_alt(&view.image_alt);
        }
        let slots = [
            (".product-title", &view.title),
            (".product-desc", &view.description),
            (".price", &view.price),
            (".old-price", &view.old_price),
        ];
        for (selector, text) in slots {
            if let Some(el) = dom::query_within(card, selector) {
                dom::set_text(&el, text);
            }
        }
    }

    fn apply_control(btn: &Element, control: ControlState) {
        dom::toggle_class(btn, control.class, control.active);
        if let Some(text) = control.text {
            if let Some(label) = dom::query_within(btn, ".btn-text") {
                dom::set_text(&label, text);
            }
        }
        let _ = btn.set_attribute("aria-label", control.aria_label);
    }

    fn control(&self, id: ProductId, control: CardControl) -> Option<Element> {
        let card = self.els.card_by_id(&id.to_string())?;
        dom::query_within(&card, control.selector())
    }
}

impl View for DomView {
    fn clear_products(&mut self) {
        self.els.products_grid.set_inner_html("");
    }

    fn append_card(&mut self, view: &CardView) {
        let Some(card) = self.els.clone_card() else {
            return;
        };
        let _ = card.set_attribute("data-id", &view.id.to_string());
        Self::fill_card(&card, view);
        let _ = self.els.products_grid.append_child(&card);
    }

    fn show_message(&mut self, message: &str) {
        let Some(p) = dom::create_element("p") else {
            return;
        };
        p.set_class_name("no-results");
        dom::set_text(&p, message);
        let _ = self.els.products_grid.append_child(&p);
    }

    fn set_cart_badge(&mut self, count: usize) {
        dom::set_text(&self.els.cart_badge, &count.to_string());
        if count == 0 {
            dom::add_class(&self.els.cart_badge, "hidden");
        } else {
            dom::remove_class(&self.els.cart_badge, "hidden");
        }
    }

    fn set_cart_control(&mut self, id: ProductId, control: ControlState) {
        if let Some(btn) = self.control(id, CardControl::Cart) {
            Self::apply_control(&btn, control);
        }
    }

    fn set_wishlist_control(&mut self, id: ProductId, control: ControlState) {
        if let Some(btn) = self.control(id, CardControl::Wishlist) {
            Self::apply_control(&btn, control);
        }
    }
}
