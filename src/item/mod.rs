/// Item Resolution System
///
/// Resolves (identifier, flavor) pairs to item content, serving repeat
/// lookups from an in-memory cache owned by each resolver.

pub mod cache;
pub mod fetcher;
pub mod resolver;

pub use cache::ItemCache;
pub use fetcher::{FetchError, HttpItemFetcher, ItemFetcher, ItemPayload};
pub use resolver::ItemResolver;

use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;

/// Message attached to every successful envelope
pub const SUCCESS_MESSAGE: &str = "Success";

/// Message attached to the envelope when no identifier is given
pub const MISSING_IDENTIFIER_MESSAGE: &str = "Item identifier is null";

/// Rendering separator for [`ItemFlavorKey`]; never valid inside an identifier or flavor
pub const KEY_SEPARATOR: char = '\u{1f}';

/// Cache key for one flavor of one item
///
/// Equality is structural, so `("a", "b")` and `("ab", "")` are different keys
/// even though their bare concatenations match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemFlavorKey {
    identifier: String,
    flavor: String,
}

impl ItemFlavorKey {
    pub fn new(identifier: impl Into<String>, flavor: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            flavor: flavor.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }
}

impl fmt::Display for ItemFlavorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.identifier, KEY_SEPARATOR, self.flavor)
    }
}

/// Uniform result envelope returned for every resolve outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse<T> {
    pub status: u16,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ItemResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: Some(SUCCESS_MESSAGE.to_string()),
            data: Some(data),
        }
    }

    /// Transport success that carried no item body
    pub fn success_without_data() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: Some(SUCCESS_MESSAGE.to_string()),
            data: None,
        }
    }

    pub fn failure(status: u16, message: Option<String>) -> Self {
        Self {
            status,
            message,
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Tag a transport error message with the item it was fetching
///
/// Every occurrence of `Request` becomes `Request for Item Identifier [<id>]`.
/// An absent message stays absent.
pub fn annotate_error_message(message: Option<&str>, identifier: &str) -> Option<String> {
    let message = message?;
    Some(message.replace(
        "Request",
        &format!("Request for Item Identifier [{}]", identifier),
    ))
}
