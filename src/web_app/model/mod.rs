// web_app/model/mod.rs - Shared data models for client and server
//
// Two record shapes exist on purpose: `Book` is what the shopping list keeps
// in localStorage (named purchase links), `CatalogBook` is what the catalog
// endpoint returns (an object of purchase links).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::web_app::pagination::{PAGE_SIZE, VISIBLE_PAGES};

/// Store name matched against `BuyLink::name` for the Amazon link
pub const AMAZON: &str = "Amazon";
/// Store name matched against `BuyLink::name` for the Apple Books link
pub const APPLE_BOOKS: &str = "Apple Books";

/// Book saved to the shopping list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "book_image", default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Category tag
    #[serde(default, deserialize_with = "null_as_default")]
    pub list_name: String,
    #[serde(default, deserialize_with = "lenient_named_links")]
    pub buy_links: Vec<BuyLink>,
}

impl Book {
    /// Purchase URL for the named store.
    ///
    /// When a store appears more than once the last entry wins.
    pub fn buy_link(&self, store: &str) -> Option<&str> {
        self.buy_links
            .iter()
            .rev()
            .find(|link| link.name == store)
            .and_then(|link| link.url.as_deref())
    }

    pub fn amazon_link(&self) -> Option<&str> {
        self.buy_link(AMAZON)
    }

    pub fn apple_books_link(&self) -> Option<&str> {
        self.buy_link(APPLE_BOOKS)
    }
}

/// A named purchase link ("Amazon", "Apple Books", ...)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Book as returned by the remote catalog endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogBook {
    #[serde(default, deserialize_with = "null_as_default")]
    pub book_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_buy_links")]
    pub buy_links: CatalogBuyLinks,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBuyLinks {
    #[serde(default)]
    pub amazon_link: Option<String>,
    #[serde(default)]
    pub apple_books_link: Option<String>,
}

// `null` reads like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A record whose buy_links has some other shape still renders, with inert links.
fn lenient_buy_links<'de, D>(deserializer: D) -> Result<CatalogBuyLinks, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

// Keeps the well-formed entries of a named link list; anything else is no links.
fn lenient_named_links<'de, D>(deserializer: D) -> Result<Vec<BuyLink>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Decode every record that parses, logging and skipping the rest.
///
/// One bad record must not hide the others.
pub fn decode_records<T: DeserializeOwned>(values: Vec<serde_json::Value>, kind: &str) -> Vec<T> {
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping malformed {} record at index {}: {}", kind, index, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!("Kept {} of {} {} records", records.len(), total, kind);
    }
    records
}

/// Explicit shopping list view state
///
/// Tracks what the pagination widget shows so rendering never has to read
/// it back from the DOM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// 1-indexed
    pub current_page: u32,
    pub total_items: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_items: 0,
        }
    }
}

impl ViewState {
    pub fn new(current_page: u32, total_items: usize) -> Self {
        Self {
            current_page,
            total_items,
        }
    }
}

/// Construction options for a pagination widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationOptions {
    pub total_items: usize,
    pub items_per_page: usize,
    /// Number of numbered page buttons shown at once
    pub visible_pages: u32,
    pub usage_statistics: bool,
}

impl PaginationOptions {
    /// Options used by the shopping list for a collection of `total_items`
    pub fn for_total(total_items: usize) -> Self {
        Self {
            total_items,
            items_per_page: PAGE_SIZE,
            visible_pages: VISIBLE_PAGES,
            usage_statistics: false,
        }
    }
}
