use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// Secondary product attributes grouped by the catalog service. The
/// `parameters_id` is a transient server-side identifier threaded through an
/// edit session so the update lands on the existing parameters row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters_id: Option<i32>,
    pub product_gender: String,
    pub product_age: String,
    #[serde(default)]
    pub product_weight: String,
    pub product_lifespan: String,
}

/// Read-only snapshot of a catalog product, owned by the server and held by
/// the client only for the duration of one rendered page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub product_title: String,
    pub product_price: f64,
    pub product_quantity: i32,
    /// Current category of the product, used to preselect the edit form's
    /// category control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub parameters: ProductParameters,
    /// Image filename as stored by the catalog service.
    pub foto_id: String,
}

/// An in-progress create/update payload. `product_id` of `None` signals
/// create, `Some` signals update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub product_id: Option<i32>,
    pub product_title: String,
    pub product_price: f64,
    pub category: Category,
    pub parameters: ProductParameters,
    pub foto_id: String,
    pub product_quantity: i32,
}

impl ProductDraft {
    pub fn is_update(&self) -> bool {
        self.product_id.is_some()
    }
}
