//! Event binding.
//!
//! Translates DOM events into `UiEvent`s and runs them against the shared
//! storefront. Validation failures are shown with `alert`.

use crate::dom::{self, Elements};
use crate::render::DomView;
use crate::state;
use sf_storefront_core::{CardControl, UiEvent};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Helper: attach a click handler that builds a `UiEvent` from the elements.
macro_rules! on_click {
    ($el:expr, $els:expr, $make_event:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let event = $make_event(&els);
            dispatch(&els, event);
        }) as Box<dyn FnMut(_)>);
        let _ = $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }};
}

/// Run one event against the storefront, rendering into the DOM.
pub fn dispatch(els: &Elements, event: UiEvent) {
    let mut view = DomView::new(els);
    // The borrow ends before `alert` blocks.
    let result = state::with_mut(|storefront| storefront.handle(event, &mut view));
    if let Err(err) = result {
        dom::alert(&err.to_string());
    }
}

/// Map a click inside the products grid to the card control it landed on.
fn card_click_event(target: &web_sys::Element) -> Option<UiEvent> {
    let card = target.closest(".card").ok()??;
    let data_id = card.get_attribute("data-id")?;
    CardControl::ALL.into_iter().find_map(|control| {
        target.closest(control.selector()).ok()??;
        control.event(&data_id)
    })
}

/// Bind the fixed UI controls, including one delegated listener for every
/// card's cart and wishlist buttons.
pub fn bind_events(els: &Elements) {
    // ── Search ──
    on_click!(els.search_btn, els, |els: &Elements| UiEvent::Search {
        query: els.search_input.value(),
    });
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            dispatch(
                &els2,
                UiEvent::SearchKey {
                    key: e.key(),
                    query: els2.search_input.value(),
                },
            );
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .search_input
            .add_event_listener_with_callback("keypress", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // ── Card controls ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            if let Some(event) = target.as_ref().and_then(card_click_event) {
                dispatch(&els2, event);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = els
            .products_grid
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        cb.forget();
    }

    // ── Price filter ──
    on_click!(els.filter_btn, els, |els: &Elements| UiEvent::FilterPrice {
        min: els.min_price.value(),
        max: els.max_price.value(),
    });
}
