use crate::domain::category::Category;
use crate::domain::filter::ProductFilter;
use crate::domain::product::{Product, ProductDraft};
use crate::pagination::normalize_page;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod rest;

/// One immutable page request: the page index the user asked for plus a
/// snapshot of the filter set active at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPageQuery {
    pub page: u32,
    pub filter: ProductFilter,
}

impl ProductPageQuery {
    #[must_use]
    pub fn new(page: u32, filter: ProductFilter) -> Self {
        Self {
            page: normalize_page(page),
            filter,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait CategoryReader {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

#[allow(async_fn_in_trait)]
pub trait CategoryWriter {
    async fn create_category(&self, name: &str) -> RepositoryResult<()>;
    async fn rename_category(&self, existing_name: &str, new_name: &str) -> RepositoryResult<()>;
}

#[allow(async_fn_in_trait)]
pub trait ProductReader {
    async fn query_products(&self, query: &ProductPageQuery) -> RepositoryResult<Vec<Product>>;
    /// Counts the products matching `query.filter`. The full query body goes
    /// out on the wire; the service reads only the filter fields.
    async fn count_products(&self, query: &ProductPageQuery) -> RepositoryResult<u64>;
    async fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>>;
}

#[allow(async_fn_in_trait)]
pub trait ProductWriter {
    async fn create_product(&self, draft: &ProductDraft) -> RepositoryResult<()>;
    async fn update_product(&self, draft: &ProductDraft) -> RepositoryResult<()>;
    async fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}
