//! Locally cached category directory.
//!
//! The directory holds the last category list reported by the catalog
//! service and is refreshed after every successful category mutation. A
//! refresh replaces the cache atomically; a failed refresh leaves it
//! untouched.

use tokio::sync::RwLock;

use crate::domain::category::Category;
use crate::repository::CategoryReader;
use crate::repository::errors::RepositoryResult;

#[derive(Default)]
pub struct CategoryDirectory {
    categories: RwLock<Vec<Category>>,
}

impl CategoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    /// Exact-name lookup against the cached list, as the form's select
    /// control reports its current text.
    pub async fn find_by_name(&self, name: &str) -> Option<Category> {
        self.categories
            .read()
            .await
            .iter()
            .find(|category| category.category_name == name)
            .cloned()
    }

    /// Fetches a fresh list and swaps it in wholesale. On error the cached
    /// list is left as it was.
    pub async fn refresh<R>(&self, repo: &R) -> RepositoryResult<()>
    where
        R: CategoryReader,
    {
        let fresh = repo.list_categories().await?;
        *self.categories.write().await = fresh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockCatalog;

    fn seeded() -> CategoryDirectory {
        CategoryDirectory {
            categories: RwLock::new(vec![Category::new("dogs"), Category::new("cats")]),
        }
    }

    #[tokio::test]
    async fn find_by_name_matches_exactly() {
        let directory = seeded();
        assert!(directory.find_by_name("dogs").await.is_some());
        assert!(directory.find_by_name("Dogs").await.is_none());
        assert!(directory.find_by_name("").await.is_none());
    }

    #[tokio::test]
    async fn refresh_replaces_the_whole_cache() {
        let directory = seeded();
        let mut repo = MockCatalog::new();
        repo.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![Category::new("birds")]));

        directory.refresh(&repo).await.expect("refresh succeeds");

        let names: Vec<String> = directory
            .list()
            .await
            .into_iter()
            .map(|c| c.category_name)
            .collect();
        assert_eq!(names, vec!["birds".to_string()]);
    }

    #[tokio::test]
    async fn failed_refresh_leaves_the_cache_untouched() {
        let directory = seeded();
        let mut repo = MockCatalog::new();
        repo.expect_list_categories()
            .times(1)
            .returning(|| Err(RepositoryError::Network("connection refused".to_string())));

        let result = directory.refresh(&repo).await;

        assert!(result.is_err());
        assert_eq!(directory.list().await.len(), 2);
    }
}
