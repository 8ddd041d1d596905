//! Shopfront WASM widget
//!
//! Browser front end for the storefront core: binds the page's DOM, wires
//! its controls, loads the catalog and runs the sale countdown.

pub mod api;
pub mod countdown;
pub mod dom;
pub mod events;
pub mod render;
pub mod state;
pub mod storage;

use sf_catalog::CatalogSource;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Restores the cart on first access
    state::with(|storefront| storefront.sync_cart_badge(&mut render::DomView::new(&els)));

    countdown::start(&els);
    events::bind_events(&els);

    // Fetch outside the state borrow; filters and toggles stay usable meanwhile
    let outcome = api::BrowserCatalogSource::default().fetch_products().await;
    let mut view = render::DomView::new(&els);
    if let Err(err) = state::with_mut(|storefront| storefront.load_products(outcome, &mut view)) {
        gloo_console::error!("Error fetching products:", err.to_string());
    }

    Ok(())
}
