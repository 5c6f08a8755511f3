//! Mock catalog repository for isolating services in tests.

use mockall::mock;

use crate::domain::category::Category;
use crate::domain::product::{Product, ProductDraft};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CategoryReader, CategoryWriter, ProductPageQuery, ProductReader, ProductWriter,
};

mock! {
    pub Catalog {}

    impl CategoryReader for Catalog {
        async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }

    impl CategoryWriter for Catalog {
        async fn create_category(&self, name: &str) -> RepositoryResult<()>;
        async fn rename_category(
            &self,
            existing_name: &str,
            new_name: &str,
        ) -> RepositoryResult<()>;
    }

    impl ProductReader for Catalog {
        async fn query_products(&self, query: &ProductPageQuery) -> RepositoryResult<Vec<Product>>;
        async fn count_products(&self, query: &ProductPageQuery) -> RepositoryResult<u64>;
        async fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>>;
    }

    impl ProductWriter for Catalog {
        async fn create_product(&self, draft: &ProductDraft) -> RepositoryResult<()>;
        async fn update_product(&self, draft: &ProductDraft) -> RepositoryResult<()>;
        async fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}
