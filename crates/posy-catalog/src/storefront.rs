// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The storefront screens.
//!
//! [`Storefront`] turns an [`Intent`] plus the session's catalog snapshot
//! into a [`Reply`]. It never talks to a chat API; channel adapters render
//! the views it returns. When no catalog source is configured every product
//! screen degrades to the "unavailable" view while menus and FAQ keep working.

use std::sync::Arc;

use posy_config::PosyConfig;
use posy_core::{
    Button, Category, FilterKey, Intent, Navigation, PRODUCT_PREFIX, Product, Reply, SessionId,
    View,
};
use tracing::{debug, info, warn};

use crate::cache::CatalogCache;
use crate::filter;
use crate::links::Links;
use crate::shortener;

const UNAVAILABLE: &str = "⚠️ Product browsing is currently unavailable.";
const NO_PRODUCTS: &str = "❌ Currently no products available.";
const SIMILAR_TITLE_CHARS: usize = 20;

/// Renders storefront screens from the session's catalog snapshot.
pub struct Storefront {
    config: Arc<PosyConfig>,
    cache: Option<Arc<CatalogCache>>,
    links: Links,
}

impl Storefront {
    /// `cache` is `None` when product browsing is disabled.
    pub fn new(config: Arc<PosyConfig>, cache: Option<Arc<CatalogCache>>) -> Self {
        let links = Links::new(&config.contact, &config.shopify);
        Self {
            config,
            cache,
            links,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn cache(&self) -> Option<&Arc<CatalogCache>> {
        self.cache.as_ref()
    }

    /// Answers one button press.
    pub async fn handle(&self, session: &SessionId, intent: &Intent, first_name: &str) -> Reply {
        debug!(session = %session, intent = %intent, "handling intent");
        match intent {
            Intent::CategoryFilter(category) => {
                Reply::edit(self.category_menu(session, *category).await)
            }
            Intent::ApplyFilter(key) => Reply::edit(self.apply_filter(session, *key).await),
            Intent::ShowProduct(payload) => self.show_product(session, payload).await,
            Intent::Navigation(Navigation::MainMenu) => Reply::edit(self.main_menu(first_name, true)),
            Intent::Navigation(Navigation::AllProducts) => Reply::edit(self.show_all(session).await),
            Intent::Navigation(Navigation::ProductList) => {
                Reply::replace(self.product_list(session).await)
            }
            Intent::Faq(None) => Reply::edit(self.faq_menu()),
            Intent::Faq(Some(topic)) => Reply::edit(self.faq_answer(topic)),
        }
    }

    /// Welcome screen. First visits also offer the FAQ.
    pub fn main_menu(&self, first_name: &str, returning: bool) -> View {
        let greeting = if returning {
            format!("🌸 Welcome back, {first_name}! 🌸\n\nHow can I help you today?\n\n")
        } else {
            format!(
                "🌸 Welcome to {}, {first_name}! 🌸\n\nI'm your floral assistant! How can I help you today?\n\n",
                self.config.bot.shop_name
            )
        };

        let mut view = View::new()
            .text(greeting)
            .text("Browse our collection by category:")
            .button(Button::callback(
                "💰 Filter by Price",
                Intent::CategoryFilter(Category::Price),
            ))
            .button(Button::callback(
                "🎉 Filter by Occasion",
                Intent::CategoryFilter(Category::Occasion),
            ))
            .button(Button::callback(
                "🌷 Filter by Flower Type",
                Intent::CategoryFilter(Category::Flowers),
            ))
            .button(Button::callback(
                "💐 Show All Bouquets",
                Intent::Navigation(Navigation::AllProducts),
            ));

        let contact_row: Vec<Button> = [
            self.links.instagram().map(|url| Button::url("📸 Instagram", url)),
            self.links.whatsapp(None).map(|url| Button::url("💬 WhatsApp", url)),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !contact_row.is_empty() {
            view = view.row(contact_row);
        }

        if !returning && !self.config.faq.is_empty() {
            view = view.button(Button::callback("❓ FAQ", Intent::Faq(None)));
        }
        view
    }

    /// Option menu of one category. Warms the session's snapshot so the
    /// following filter is served from cache.
    pub async fn category_menu(&self, session: &SessionId, category: Category) -> View {
        if let Some(cache) = &self.cache {
            cache.get(session).await;
        }

        let currency = &self.config.bot.currency;
        let mut view = View::new().text(category.title());
        for key in category.keys() {
            view = view.button(Button::callback(
                key.menu_label(currency),
                Intent::ApplyFilter(*key),
            ));
        }
        view.button(back_to_main())
    }

    /// Products of the snapshot matching `key`.
    pub async fn apply_filter(&self, session: &SessionId, key: FilterKey) -> View {
        let Some(cache) = &self.cache else {
            return unavailable();
        };
        let products = cache.get(session).await;
        let matches = filter::apply(&products, key);
        let label = key.label(&self.config.bot.currency);
        info!(session = %session, filter = %key, matches = matches.len(), "filter applied");

        if matches.is_empty() {
            return View::new()
                .text(format!(
                    "❌ No bouquets found in '{label}' category\n\nWe're adding new arrangements daily! Please check back soon or browse other categories."
                ))
                .button(Button::callback(
                    "🔙 Back to Categories",
                    Intent::Navigation(Navigation::MainMenu),
                ));
        }

        let mut view = View::new().text(format!("💐 Bouquets in '{label}' category:"));
        for product in matches {
            view = view.button(self.product_button(product));
        }
        view.button(Button::callback(
            "🔙 Back to Categories",
            Intent::CategoryFilter(key.category()),
        ))
    }

    /// Every product of the snapshot.
    pub async fn show_all(&self, session: &SessionId) -> View {
        let Some(cache) = &self.cache else {
            return unavailable();
        };
        let products = cache.get(session).await;
        if products.is_empty() {
            return View::new().text(NO_PRODUCTS).button(back_to_main());
        }

        let mut view = View::new().text("✨ All Available Bouquets ✨");
        for product in products.iter() {
            view = view.button(self.product_button(product));
        }
        view.button(back_to_main())
    }

    /// Freshly fetched list of products that have a store page. Used by
    /// `/products` and by "Back to Menu" on a product page.
    pub async fn product_list(&self, session: &SessionId) -> View {
        let Some(cache) = &self.cache else {
            return unavailable();
        };
        cache.invalidate(session);
        let products = cache.get(session).await;

        let listed: Vec<&Product> = products
            .iter()
            .filter(|p| p.online_store_url.is_some())
            .collect();
        if listed.is_empty() {
            return View::new()
                .text(format!("{NO_PRODUCTS} Please check back later!"))
                .button(back_to_main());
        }

        let mut view = View::new().text("✨ Our Available Bouquets ✨");
        for product in listed {
            view = view.button(Button::callback(
                product.title.clone(),
                product_intent(&product.handle),
            ));
        }
        view.row(vec![
            Button::callback("🏠 Main Menu", Intent::Navigation(Navigation::MainMenu)),
            Button::callback("🔄 Refresh", Intent::Navigation(Navigation::ProductList)),
        ])
    }

    /// Product page, followed by suggestions when there are any.
    ///
    /// Suggestions come straight from the source, so their tokens may
    /// name products the session snapshot lacks. See [`Self::lookup`].
    pub async fn show_product(&self, session: &SessionId, payload: &str) -> Reply {
        let Some(cache) = &self.cache else {
            return Reply::edit(unavailable());
        };

        let product = self.lookup(cache, session, payload).await;
        let Some(product) = product else {
            info!(session = %session, payload, "product not found");
            return Reply::edit(
                View::new()
                    .text("⚠️ Product not found in our system")
                    .button(back_to_main()),
            );
        };

        let similar = self.similar_products(&product).await;
        Reply::replace(self.product_view(&product)).then(similar)
    }

    /// Resolves a product token payload.
    ///
    /// Tries the session snapshot, then (for digests) a refetched snapshot,
    /// then the source by handle. A digest-shaped payload may also be a
    /// literal 8-hex handle, so it reaches the source lookup too.
    async fn lookup(
        &self,
        cache: &CatalogCache,
        session: &SessionId,
        payload: &str,
    ) -> Option<Product> {
        let products = cache.get(session).await;
        if let Some(product) = shortener::resolve(payload, &products) {
            return Some(product.clone());
        }

        if shortener::looks_like_digest(payload) {
            debug!(session = %session, payload, "digest missed the snapshot, refetching");
            cache.invalidate(session);
            let products = cache.get(session).await;
            if let Some(product) = shortener::resolve(payload, &products) {
                return Some(product.clone());
            }
        }

        match cache.source().fetch_by_identifier(payload).await {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, handle = payload, "product lookup failed");
                None
            }
        }
    }

    /// The product page itself.
    pub fn product_view(&self, product: &Product) -> View {
        let description = if product.description.trim().is_empty() {
            "No description available"
        } else {
            product.description.as_str()
        };
        let page = self.links.product_page(product);

        let mut view = View::new()
            .text("💐 ")
            .bold(product.title.clone())
            .text(format!(" 💐\n\n{description}\n\n"))
            .bold("Price:")
            .text(format!(" {}{}", self.config.bot.currency, product.price))
            .photo(product.image_url.clone());
        if let Some(page) = &page {
            view = view.text("\n\n").link("View on our website", page.clone());
        }

        let mut first_row = vec![Button::callback(
            "🔙 Back to Menu",
            Intent::Navigation(Navigation::ProductList),
        )];
        first_row.extend(page.map(|url| Button::url("🛒 Order Now", url)));

        let order_row: Vec<Button> = [
            self.links
                .instagram()
                .map(|url| Button::url("📸 Order via Instagram", url)),
            self.links
                .whatsapp(Some(&product.title))
                .map(|url| Button::url("💬 Order via WhatsApp", url)),
        ]
        .into_iter()
        .flatten()
        .collect();

        view = view.row(first_row);
        if !order_row.is_empty() {
            view = view.row(order_row);
        }
        view
    }

    /// "You Might Also Like" suggestions sharing a tag with `product`.
    ///
    /// `None` when the product has no tags or nothing matches. Source
    /// failures count as no matches.
    pub async fn similar_products(&self, product: &Product) -> Option<View> {
        let cache = self.cache.as_ref()?;
        let tags: Vec<String> = product.tag_list().map(str::to_string).collect();
        if tags.is_empty() {
            return None;
        }

        let similar = match cache
            .source()
            .fetch_by_tags(&tags, &product.handle, self.config.catalog.similar_limit)
            .await
        {
            Ok(similar) => similar,
            Err(e) => {
                warn!(error = %e, handle = %product.handle, "similar products lookup failed");
                return None;
            }
        };
        if similar.is_empty() {
            return None;
        }

        let mut view = View::new()
            .text("🌸 ")
            .bold("You Might Also Like")
            .text(" 🌸\n\n")
            .without_link_preview();
        for item in &similar {
            view = view.text("• ");
            view = match self.links.product_page(item) {
                Some(url) => view.link(item.title.clone(), url),
                None => view.text(item.title.clone()),
            };
            view = view.text("\n");
        }
        for item in &similar {
            view = view.button(Button::callback(
                format!("🌷 {}", truncate_title(&item.title, SIMILAR_TITLE_CHARS)),
                product_intent(&item.handle),
            ));
        }
        Some(view.button(Button::callback(
            "🔙 Back to All Products",
            Intent::Navigation(Navigation::ProductList),
        )))
    }

    /// Index of the configured FAQ topics.
    pub fn faq_menu(&self) -> View {
        let mut view = View::new()
            .text("❓ ")
            .bold("Frequently Asked Questions")
            .text(" ❓\n\nSelect a topic:");
        for entry in &self.config.faq {
            view = view.button(Button::callback(
                entry.question.clone(),
                Intent::Faq(Some(entry.key.clone())),
            ));
        }
        view.button(Button::callback(
            "🔙 Back to Main Menu",
            Intent::Navigation(Navigation::MainMenu),
        ))
    }

    pub fn faq_answer(&self, topic: &str) -> View {
        let Some(entry) = self.config.faq.iter().find(|e| e.key == topic) else {
            return View::new()
                .text("⚠️ Question not found")
                .button(Button::callback("🔙 Back to FAQ", Intent::Faq(None)));
        };

        let mut view = View::new()
            .bold(entry.question.clone())
            .text(format!("\n\n{}", entry.answer))
            .button(Button::callback("🔙 Back to FAQ", Intent::Faq(None)));
        if let Some(url) = self.links.whatsapp(None) {
            view = view.button(Button::url("💬 Contact Us", url));
        }
        view
    }

    /// Reply to `/instagram`.
    pub fn instagram_view(&self) -> View {
        let view = View::new()
            .text("🌸 ")
            .bold("Our Instagram Gallery")
            .text(" 🌸\n\n");
        match self.links.instagram() {
            Some(url) => view
                .text("See our latest floral creations:")
                .button(Button::url("📸 View Instagram", url)),
            None => view.text("Our gallery is coming soon."),
        }
    }

    /// Reply to `/contact`.
    pub fn contact_view(&self) -> View {
        let view = View::new().text("💌 ").bold("Contact Us").text("\n\n");
        match self.links.whatsapp(None) {
            Some(url) => view
                .text("We're available on WhatsApp:")
                .button(Button::url("💬 Chat on WhatsApp", url)),
            None => view.text(format!("Visit {} in store or online.", self.config.bot.shop_name)),
        }
    }

    /// Reply to a payload that does not decode to an intent.
    pub fn invalid_request(&self) -> View {
        View::new().text("⚠️ Invalid request").button(back_to_main())
    }

    fn product_button(&self, product: &Product) -> Button {
        let title = truncate_title(&product.title, self.config.catalog.title_max_chars);
        let label = match product.price_value() {
            Ok(price) => format!("{title} - {}{price:.2}", self.config.bot.currency),
            Err(e) => {
                debug!(error = %e, "listing product without price");
                title
            }
        };
        Button::callback(label, product_intent(&product.handle))
    }
}

fn product_intent(handle: &str) -> Intent {
    let token = shortener::encode(PRODUCT_PREFIX, handle);
    Intent::ShowProduct(token.payload().to_string())
}

/// Keeps the first `max` characters, marking the cut with `...`.
fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let mut cut: String = title.chars().take(max).collect();
    cut.push_str("...");
    cut
}

fn back_to_main() -> Button {
    Button::callback("🔙 Back to Main Menu", Intent::Navigation(Navigation::MainMenu))
}

fn unavailable() -> View {
    View::new().text(UNAVAILABLE)
}
