// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound links: Instagram profile, WhatsApp chat, product pages.

use posy_config::{ContactConfig, ShopifyConfig};
use posy_core::Product;
use url::Url;

const WHATSAPP_GREETING: &str = "Hello Florist!";

/// Link builder for the configured contact channels and store.
#[derive(Debug, Clone, Default)]
pub struct Links {
    instagram: Option<Url>,
    whatsapp: Option<Url>,
    storefront: Option<String>,
}

impl Links {
    pub fn new(contact: &ContactConfig, shopify: &ShopifyConfig) -> Self {
        let instagram = contact
            .instagram_username
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .and_then(|u| Url::parse(&format!("https://www.instagram.com/{u}/")).ok());
        let whatsapp = contact
            .whatsapp_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .and_then(|n| Url::parse(&format!("https://wa.me/{n}")).ok());

        Self {
            instagram,
            whatsapp,
            storefront: shopify.storefront_url(),
        }
    }

    pub fn instagram(&self) -> Option<String> {
        self.instagram.as_ref().map(Url::to_string)
    }

    /// WhatsApp chat link with a prefilled message, mentioning the
    /// bouquet when a title is given.
    pub fn whatsapp(&self, title: Option<&str>) -> Option<String> {
        let mut url = self.whatsapp.clone()?;
        let text = match title {
            Some(title) => format!(
                "{WHATSAPP_GREETING} I'm interested in the '{title}' bouquet. Could you tell me more about it?"
            ),
            None => format!(
                "{WHATSAPP_GREETING} I'm interested in your bouquets. Could you tell me more?"
            ),
        };
        url.query_pairs_mut().append_pair("text", &text);
        Some(url.to_string())
    }

    /// The product's public page: its store URL, else the storefront
    /// path derived from the handle.
    pub fn product_page(&self, product: &Product) -> Option<String> {
        product.online_store_url.clone().or_else(|| {
            self.storefront
                .as_ref()
                .map(|base| format!("{base}/products/{}", product.handle))
        })
    }
}
