//! DOM element bindings.
//!
//! All fixed elements are resolved once at startup. Per-card slots are
//! looked up inside each cloned card.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTemplateElement};

// ── Helpers ──

pub fn window() -> web_sys::Window {
    web_sys::window().expect("no global window")
}

fn doc() -> Document {
    window().document().expect("window has no document")
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn create_element(tag: &str) -> Option<Element> {
    doc().create_element(tag).ok()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

// ── Elements struct ──

/// Fixed DOM references used by the storefront.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub products_grid: Element,
    pub card_template: HtmlTemplateElement,
    pub cart_badge: Element,

    // Search
    pub search_input: HtmlInputElement,
    pub search_btn: HtmlElement,

    // Price filter
    pub min_price: HtmlInputElement,
    pub max_price: HtmlInputElement,
    pub filter_btn: HtmlElement,

    // Countdown
    pub hours: Element,
    pub minutes: Element,
    pub seconds: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id).ok_or_else(|| {
            JsValue::from_str(&format!("missing {} #{}", stringify!($ty), $id))
        })?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            products_grid: query(".products-grid")
                .ok_or_else(|| JsValue::from_str("missing .products-grid"))?,
            card_template: get_typed!(HtmlTemplateElement, "card-template"),
            cart_badge: get_el!("cart-badge"),

            search_input: get_typed!(HtmlInputElement, "search-input"),
            search_btn: get_typed!(HtmlElement, "search-btn"),

            min_price: get_typed!(HtmlInputElement, "min-price"),
            max_price: get_typed!(HtmlInputElement, "max-price"),
            filter_btn: get_typed!(HtmlElement, "filter-btn"),

            hours: get_el!("hours"),
            minutes: get_el!("minutes"),
            seconds: get_el!("seconds"),
        })
    }

    /// A fresh deep copy of the template's `.card`.
    pub fn clone_card(&self) -> Option<Element> {
        let prototype = self.card_template.content().query_selector(".card").ok()??;
        prototype.clone_node_with_deep(true).ok()?.dyn_into::<Element>().ok()
    }

    /// The displayed card for a product, if any.
    pub fn card_by_id(&self, id: &str) -> Option<Element> {
        query_within(&self.products_grid, &format!(r#".card[data-id="{id}"]"#))
    }
}
