//! View models handed to the product templates.

use serde::Serialize;

use crate::domain::filter::ProductFilter;
use crate::domain::product::Product;
use crate::pagination::PageWindow;

/// One render-ready product row. Out-of-stock rows keep their quantity label
/// flagged and lose the delete control.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCard {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub quantity: i32,
    pub gender: String,
    pub age: String,
    pub lifespan: String,
    pub image: String,
    pub out_of_stock: bool,
    pub can_delete: bool,
}

impl From<Product> for ProductCard {
    fn from(product: Product) -> Self {
        let out_of_stock = product.product_quantity == 0;
        Self {
            id: product.product_id,
            title: product.product_title,
            price: product.product_price,
            quantity: product.product_quantity,
            gender: product.parameters.product_gender,
            age: product.parameters.product_age,
            lifespan: product.parameters.product_lifespan,
            image: product.foto_id,
            out_of_stock,
            can_delete: !out_of_stock,
        }
    }
}

/// The complete view of one list cycle: rows, rebuilt pagination, and any
/// surfaced failures. Replaced wholesale on every cycle.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductListPage {
    pub products: Vec<ProductCard>,
    pub pagination: Option<PageWindow>,
    pub current_page: u32,
    pub filter: ProductFilter,
    /// Set when the page fetch failed; the list renders empty.
    pub list_error: Option<String>,
    /// Set when the count fetch failed; no pagination controls render.
    pub pagination_error: Option<String>,
}
