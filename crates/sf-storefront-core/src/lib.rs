//! Product-list state machine behind the storefront widget.
//!
//! `Storefront` owns the catalog and membership state; every operation takes
//! the `View` to render into, so the same logic drives the DOM and tests.

pub mod events;
pub mod membership;
pub mod render;
pub mod view;

pub use events::{CardControl, UiEvent};
pub use membership::MembershipStore;
pub use view::{HeadlessView, View};

use view::{cart_control, wishlist_control};

use sf_api_types::ProductsResponse;
use sf_catalog::{Catalog, CatalogError, CatalogSource, Product, ProductId};
use sf_filter::FilterError;
use sf_storage::CartStore;
use tracing::{error, info};

pub struct Storefront<K> {
    catalog: Catalog,
    membership: MembershipStore<K>,
}

impl<K> Storefront<K>
where
    K: CartStore,
{
    /// Start with an empty catalog and the cart restored from `cart_store`.
    pub fn new(cart_store: K) -> Self {
        Self {
            catalog: Catalog::default(),
            membership: MembershipStore::restore(cart_store),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn membership(&self) -> &MembershipStore<K> {
        &self.membership
    }

    /// Push startup state that does not depend on the catalog.
    pub fn sync_cart_badge<V: View + ?Sized>(&self, view: &mut V) {
        view.set_cart_badge(self.membership.cart_count());
    }

    /// Fetch once from `source`, then load or report the outcome.
    pub async fn fetch_products<S, V>(&mut self, source: &S, view: &mut V) -> Result<usize, CatalogError>
    where
        S: CatalogSource + ?Sized,
        V: View + ?Sized,
    {
        let outcome = source.fetch_products().await;
        self.load_products(outcome, view)
    }

    /// Apply a finished fetch. On success the catalog is replaced and fully
    /// rendered; on failure the catalog is left untouched and the view shows
    /// the failure message. The error is returned for logging only.
    pub fn load_products<V>(
        &mut self,
        outcome: Result<ProductsResponse, CatalogError>,
        view: &mut V,
    ) -> Result<usize, CatalogError>
    where
        V: View + ?Sized,
    {
        match outcome {
            Ok(response) => {
                self.catalog = Catalog::from_response(&response);
                info!(products = self.catalog.len(), "catalog loaded");
                self.display_products(None, view);
                Ok(self.catalog.len())
            }
            Err(err) => {
                error!(error = %err, "error fetching products");
                render::render_fetch_failure(view);
                Err(err)
            }
        }
    }

    /// Render `list`, or the whole catalog when `None`.
    pub fn display_products<V>(&self, list: Option<&[&Product]>, view: &mut V)
    where
        V: View + ?Sized,
    {
        match list {
            Some(products) => render::render_products(view, products, &self.membership),
            None => {
                let all: Vec<&Product> = self.catalog.products().iter().collect();
                render::render_products(view, &all, &self.membership);
            }
        }
    }

    pub fn toggle_cart<V: View + ?Sized>(&mut self, id: ProductId, view: &mut V) -> bool {
        let in_cart = self.membership.toggle_cart(id);
        view.set_cart_badge(self.membership.cart_count());
        view.set_cart_control(id, cart_control(in_cart));
        in_cart
    }

    pub fn toggle_wishlist<V: View + ?Sized>(&mut self, id: ProductId, view: &mut V) -> bool {
        let in_wishlist = self.membership.toggle_wishlist(id);
        view.set_wishlist_control(id, wishlist_control(in_wishlist));
        in_wishlist
    }

    /// Render titles matching `query`. Returns the number of matches.
    pub fn filter_by_search<V: View + ?Sized>(&self, query: &str, view: &mut V) -> Result<usize, FilterError> {
        let matched = sf_filter::filter_by_text(self.catalog.products(), query)?;
        self.display_products(Some(matched.as_slice()), view);
        Ok(matched.len())
    }

    /// Render products priced within the raw min/max inputs. Returns the number of matches.
    pub fn filter_by_price<V: View + ?Sized>(&self, min: &str, max: &str, view: &mut V) -> Result<usize, FilterError> {
        let matched = sf_filter::filter_by_price(self.catalog.products(), min, max)?;
        self.display_products(Some(matched.as_slice()), view);
        Ok(matched.len())
    }

    /// Dispatch one UI event. Validation failures leave the view untouched.
    pub fn handle<V: View + ?Sized>(&mut self, event: UiEvent, view: &mut V) -> Result<(), FilterError> {
        match event {
            UiEvent::ToggleCart(id) => {
                self.toggle_cart(id, view);
            }
            UiEvent::ToggleWishlist(id) => {
                self.toggle_wishlist(id, view);
            }
            UiEvent::Search { query } => {
                self.filter_by_search(&query, view)?;
            }
            UiEvent::SearchKey { key, query } => {
                if key == events::ENTER_KEY {
                    self.filter_by_search(&query, view)?;
                }
            }
            UiEvent::FilterPrice { min, max } => {
                self.filter_by_price(&min, &max, view)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
    use async_trait::async_trait;
    use sf_api_types::RawProduct;
    use sf_catalog::StaticCatalogSource;
    use sf_storage::InMemoryCartStore;

    fn raw(id: u64, title: &str, price: f64, discount: Option<f64>) -> RawProduct {
        RawProduct {
            id,
            title: title.to_owned(),
            description: format!("{title} description"),
            thumbnail: format!("https://cdn.example/{id}.png"),
            price,
            discount_percentage: discount,
        }
    }

    fn phones() -> StaticCatalogSource {
        StaticCatalogSource::new(vec![
            raw(1, "Phone A", 100.0, Some(20.0)),
            raw(2, "Phone B", 200.0, None),
        ])
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl CatalogSource for FailingSource {
        async fn fetch_products(&self) -> Result<ProductsResponse, CatalogError> {
            Err(CatalogError::Transport("connection refused".to_owned()))
        }
    }

    async fn loaded(store: InMemoryCartStore) -> anyhow::Result<(Storefront<InMemoryCartStore>, HeadlessView)> {
        let mut storefront = Storefront::new(store);
        let mut view = HeadlessView::default();
        storefront.sync_cart_badge(&mut view);
        storefront.fetch_products(&phones(), &mut view).await?;
        Ok((storefront, view))
    }

    #[tokio::test]
    async fn fetch_renders_full_catalog_once() -> anyhow::Result<()> {
        let (storefront, view) = loaded(InMemoryCartStore::default()).await?;

        assert_eq!(storefront.catalog().len(), 2);
        assert_eq!(view.clears, 1);
        assert_eq!(view.titles(), vec!["Phone A", "Phone B"]);

        let card = view.card(ProductId(1)).expect("card for product 1");
        assert_eq!(card.card.price, "$100");
        assert_eq!(card.card.old_price, "$125");
        assert_eq!(card.card.image_alt, "Phone A");
        assert_eq!(card.cart.text, Some("Add to cart"));
        assert!(view.badge_hidden);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_failure_shows_message_and_keeps_catalog_empty() -> anyhow::Result<()> {
        let mut storefront = Storefront::new(InMemoryCartStore::default());
        let mut view = HeadlessView::default();

        let result = storefront.fetch_products(&FailingSource, &mut view).await;
        assert!(matches!(result, Err(CatalogError::Transport(_))));
        assert!(storefront.catalog().is_empty());
        assert!(view.cards().is_empty());
        assert_eq!(view.message(), Some(FETCH_FAILED_MESSAGE));

        storefront.handle(UiEvent::Search { query: "phone".to_owned() }, &mut view)?;
        assert_eq!(view.message(), Some(NO_RESULTS_MESSAGE));
        Ok(())
    }

    #[tokio::test]
    async fn toggles_update_badge_and_card_controls() -> anyhow::Result<()> {
        let (mut storefront, mut view) = loaded(InMemoryCartStore::default()).await?;

        storefront.handle(UiEvent::ToggleCart(ProductId(2)), &mut view)?;
        assert_eq!(view.badge_count, 1);
        assert!(!view.badge_hidden);
        let card = view.card(ProductId(2)).expect("card for product 2");
        assert!(card.cart.active);
        assert_eq!(card.cart.text, Some("Remove from cart"));
        assert_eq!(card.cart.aria_label, "Remove from cart");

        storefront.handle(UiEvent::ToggleWishlist(ProductId(2)), &mut view)?;
        let card = view.card(ProductId(2)).expect("card for product 2");
        assert!(card.wishlist.active);
        assert_eq!(card.wishlist.aria_label, "Remove from wishlist");

        storefront.handle(UiEvent::ToggleCart(ProductId(2)), &mut view)?;
        storefront.handle(UiEvent::ToggleWishlist(ProductId(2)), &mut view)?;
        let card = view.card(ProductId(2)).expect("card for product 2");
        assert_eq!(card.cart, cart_control(false));
        assert_eq!(card.wishlist, wishlist_control(false));
        assert!(view.badge_hidden);
        Ok(())
    }

    #[tokio::test]
    async fn failed_cart_write_still_updates_badge_and_card() -> anyhow::Result<()> {
        let mut storefront = Storefront::new(crate::membership::tests::UnwritableCartStore);
        let mut view = HeadlessView::default();
        storefront.fetch_products(&phones(), &mut view).await?;

        assert!(storefront.toggle_cart(ProductId(1), &mut view));
        assert!(storefront.membership().in_cart(ProductId(1)));
        assert_eq!(view.badge_count, 1);
        assert!(!view.badge_hidden);
        let card = view.card(ProductId(1)).expect("card for product 1");
        assert_eq!(card.cart, cart_control(true));
        Ok(())
    }

    #[tokio::test]
    async fn toggling_an_undisplayed_product_only_changes_membership() -> anyhow::Result<()> {
        let (mut storefront, mut view) = loaded(InMemoryCartStore::default()).await?;
        storefront.filter_by_search("Phone A", &mut view)?;
        let before = view.entries.clone();

        assert!(storefront.toggle_cart(ProductId(2), &mut view));
        assert_eq!(view.entries, before);
        assert_eq!(view.badge_count, 1);
        assert!(storefront.membership().in_cart(ProductId(2)));
        Ok(())
    }

    #[tokio::test]
    async fn rerender_keeps_membership_state() -> anyhow::Result<()> {
        let (mut storefront, mut view) = loaded(InMemoryCartStore::default()).await?;
        storefront.toggle_cart(ProductId(1), &mut view);
        storefront.toggle_wishlist(ProductId(2), &mut view);

        storefront.filter_by_price("50", "", &mut view)?;
        assert!(view.card(ProductId(1)).expect("card 1").cart.active);
        assert!(view.card(ProductId(2)).expect("card 2").wishlist.active);
        Ok(())
    }

    #[tokio::test]
    async fn cart_state_is_rendered_after_reload() -> anyhow::Result<()> {
        let backing = InMemoryCartStore::default();
        {
            let (mut storefront, mut view) = loaded(backing.clone()).await?;
            storefront.toggle_cart(ProductId(1), &mut view);
            storefront.toggle_wishlist(ProductId(2), &mut view);
        }

        let (storefront, view) = loaded(backing).await?;
        assert_eq!(view.badge_count, 1);
        assert!(view.card(ProductId(1)).expect("card 1").cart.active);
        assert!(!view.card(ProductId(2)).expect("card 2").wishlist.active);
        assert!(storefront.membership().wishlist().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn price_filter_selects_range() -> anyhow::Result<()> {
        let (mut storefront, mut view) = loaded(InMemoryCartStore::default()).await?;

        storefront.handle(
            UiEvent::FilterPrice {
                min: "150".to_owned(),
                max: "250".to_owned(),
            },
            &mut view,
        )?;
        assert_eq!(view.titles(), vec!["Phone B"]);
        Ok(())
    }

    #[tokio::test]
    async fn rejected_filters_leave_the_view_alone() -> anyhow::Result<()> {
        let (mut storefront, mut view) = loaded(InMemoryCartStore::default()).await?;
        let before = view.entries.clone();
        let clears = view.clears;

        let err = storefront
            .handle(
                UiEvent::FilterPrice {
                    min: "10".to_owned(),
                    max: "5".to_owned(),
                },
                &mut view,
            )
            .expect_err("max below min");
        assert_eq!(err, FilterError::MaxNotAboveMin);

        let err = storefront
            .handle(UiEvent::Search { query: "   ".to_owned() }, &mut view)
            .expect_err("blank search");
        assert_eq!(err, FilterError::EmptySearch);

        assert_eq!(view.entries, before);
        assert_eq!(view.clears, clears);
        Ok(())
    }

    #[tokio::test]
    async fn only_enter_triggers_search_from_the_keyboard() -> anyhow::Result<()> {
        let (mut storefront, mut view) = loaded(InMemoryCartStore::default()).await?;

        storefront.handle(
            UiEvent::SearchKey {
                key: "b".to_owned(),
                query: "phone b".to_owned(),
            },
            &mut view,
        )?;
        assert_eq!(view.cards().len(), 2);

        storefront.handle(
            UiEvent::SearchKey {
                key: "Enter".to_owned(),
                query: "phone b".to_owned(),
            },
            &mut view,
        )?;
        assert_eq!(view.titles(), vec!["Phone B"]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_result_shows_placeholder() -> anyhow::Result<()> {
        let (storefront, mut view) = loaded(InMemoryCartStore::default()).await?;

        let matched = storefront.filter_by_search("tablet", &mut view)?;
        assert_eq!(matched, 0);
        assert!(view.cards().is_empty());
        assert_eq!(view.message(), Some(NO_RESULTS_MESSAGE));
        Ok(())
    }
}
