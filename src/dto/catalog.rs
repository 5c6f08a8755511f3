//! Request and error payloads exchanged with the catalog service.

use serde::{Deserialize, Serialize};

use crate::domain::filter::ProductFilter;
use crate::repository::ProductPageQuery;

/// Body of the page and count queries. The service expects the price bounds
/// as strings, with "0" and the maximum double standing in for an unbounded
/// range, so unset filter fields are filled in here rather than omitted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryBody {
    pub page: u32,
    pub min_price: String,
    pub max_price: String,
    pub name: String,
    pub gender: String,
}

impl ProductQueryBody {
    #[must_use]
    pub fn new(page: u32, filter: &ProductFilter) -> Self {
        Self {
            page,
            min_price: filter
                .min_price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "0".to_string()),
            max_price: filter
                .max_price
                .map(|p| p.to_string())
                .unwrap_or_else(|| format!("{:e}", f64::MAX)),
            name: filter.name.clone().unwrap_or_default(),
            gender: filter.gender.clone().unwrap_or_default(),
        }
    }
}

impl From<&ProductPageQuery> for ProductQueryBody {
    fn from(query: &ProductPageQuery) -> Self {
        Self::new(query.page, &query.filter)
    }
}

/// Body sent when creating or renaming a category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBody {
    pub category_name: String,
}

/// The `message` field of an error response: a single string or an ordered
/// list, one entry per invalid field.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiMessage {
    /// Flattens into lines, preserving response order.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            ApiMessage::One(line) => vec![line],
            ApiMessage::Many(lines) => lines,
        }
    }
}

/// Error body shape returned by the catalog service on 4xx responses.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub message: ApiMessage,
}
