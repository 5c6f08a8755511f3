use serde::{Deserialize, Serialize};

/// A category record as the catalog service reports it. The name is the
/// unique key; the id is server-assigned and may be absent on older records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    pub category_name: String,
}

impl Category {
    #[must_use]
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_id: None,
            category_name: category_name.into(),
        }
    }
}
