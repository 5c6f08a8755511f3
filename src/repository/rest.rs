//! Catalog repository backed by the remote REST service.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::domain::category::Category;
use crate::domain::product::{Product, ProductDraft};
use crate::dto::catalog::{ApiErrorBody, CategoryBody, ProductQueryBody};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, CategoryWriter, ProductPageQuery, ProductReader, ProductWriter,
};

/// Thin client over the catalog service. One shared connection pool with a
/// bounded per-request timeout; expiry surfaces as [`RepositoryError::Timeout`].
#[derive(Clone)]
pub struct RestCatalog {
    http: Client,
    base_url: String,
}

impl RestCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RepositoryError::from)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Maps a non-2xx response to an error, surfacing the service's
    /// structured `{message}` payload verbatim when it parses.
    async fn read_error(response: Response) -> RepositoryError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return RepositoryError::NotFound;
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(error_body) => RepositoryError::Business(error_body.message.into_lines()),
            Err(_) => RepositoryError::Unexpected(format!("{status}: {body}")),
        }
    }

    async fn expect_empty(response: Response) -> RepositoryResult<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::read_error(response).await)
        }
    }
}

impl CategoryReader for RestCatalog {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let response = self.http.get(self.url("/api/v1/category")).send().await?;
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json::<Vec<Category>>().await?)
    }
}

impl CategoryWriter for RestCatalog {
    async fn create_category(&self, name: &str) -> RepositoryResult<()> {
        let response = self
            .http
            .post(self.url("/api/v1/category"))
            .json(&CategoryBody {
                category_name: name.to_string(),
            })
            .send()
            .await?;
        Self::expect_empty(response).await
    }

    async fn rename_category(&self, existing_name: &str, new_name: &str) -> RepositoryResult<()> {
        let path = format!("/api/v1/category/{}", urlencoding::encode(existing_name));
        let response = self
            .http
            .put(self.url(&path))
            .json(&CategoryBody {
                category_name: new_name.to_string(),
            })
            .send()
            .await?;
        Self::expect_empty(response).await
    }
}

impl ProductReader for RestCatalog {
    async fn query_products(&self, query: &ProductPageQuery) -> RepositoryResult<Vec<Product>> {
        let response = self
            .http
            .post(self.url("/api/v1/products/get"))
            .json(&ProductQueryBody::from(query))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json::<Vec<Product>>().await?)
    }

    async fn count_products(&self, query: &ProductPageQuery) -> RepositoryResult<u64> {
        let response = self
            .http
            .post(self.url("/api/v1/products/get-page-count"))
            .json(&ProductQueryBody::from(query))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }
        Ok(response.json::<u64>().await?)
    }

    async fn get_product_by_id(&self, product_id: i32) -> RepositoryResult<Option<Product>> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/products/{product_id}")))
            .send()
            .await?;
        match response.status() {
            status if status.is_success() => Ok(Some(response.json::<Product>().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(Self::read_error(response).await),
        }
    }
}

impl ProductWriter for RestCatalog {
    async fn create_product(&self, draft: &ProductDraft) -> RepositoryResult<()> {
        let response = self
            .http
            .post(self.url("/api/v1/products"))
            .json(draft)
            .send()
            .await?;
        Self::expect_empty(response).await
    }

    async fn update_product(&self, draft: &ProductDraft) -> RepositoryResult<()> {
        let response = self
            .http
            .put(self.url("/api/v1/products"))
            .json(draft)
            .send()
            .await?;
        Self::expect_empty(response).await
    }

    async fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        let response = self
            .http
            .get(self.url("/api/v1/products/delete"))
            .query(&[("product_id", product_id)])
            .send()
            .await?;
        Self::expect_empty(response).await
    }
}
