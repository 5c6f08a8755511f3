//! Product list controller.
//!
//! Each list cycle runs three phases in order: fetch the requested page,
//! build render-ready rows, then fetch the count for the same filter set and
//! rebuild the pagination wholesale. The controller owns the single view
//! state; a cycle may only commit its view while it is still the most
//! recently started one, so an overlapping older cycle can never overwrite
//! fresher state.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::filter::ProductFilter;
use crate::dto::products::{ProductCard, ProductListPage};
use crate::pagination::{PAGE_SIZE, PageWindow};
use crate::repository::{ProductPageQuery, ProductReader};
use crate::services::ServiceError;

/// Token identifying one list cycle. Obtained from [`ListController::begin`]
/// before the first request of the cycle goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken(u64);

#[derive(Default)]
pub struct ListController {
    generation: AtomicU64,
    view: RwLock<Option<ProductListPage>>,
}

impl ListController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new cycle, superseding any cycle still in flight.
    pub fn begin(&self) -> CycleToken {
        CycleToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn is_current(&self, token: CycleToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Commits a finished cycle's view unless a newer cycle has started.
    /// Returns whether the view was applied.
    async fn commit(&self, token: CycleToken, view: ProductListPage) -> bool {
        let mut slot = self.view.write().await;
        if !self.is_current(token) {
            return false;
        }
        *slot = Some(view);
        true
    }

    /// The most recently committed view, if any cycle has completed yet.
    pub async fn current_view(&self) -> Option<ProductListPage> {
        self.view.read().await.clone()
    }
}

/// Runs one full list cycle for `token`. Returns the view the caller should
/// render: the cycle's own view when it committed, otherwise the freshest
/// committed view.
pub async fn run_list_cycle<R>(
    repo: &R,
    controller: &ListController,
    token: CycleToken,
    page: u32,
    filter: ProductFilter,
) -> ProductListPage
where
    R: ProductReader,
{
    let request = ProductPageQuery::new(page, filter);

    // Phase one: fetch the requested page. The request, not the response,
    // is authoritative for the current page.
    let (products, list_error) = match repo.query_products(&request).await {
        Ok(products) => (
            products.into_iter().map(ProductCard::from).collect(),
            None,
        ),
        Err(err) => {
            log::error!("Failed to fetch product page {}: {err}", request.page);
            (Vec::new(), Some(ServiceError::from(err).to_string()))
        }
    };

    // Phase two: the count runs unconditionally after the list phase, and
    // the pagination is rebuilt wholesale from its result. A failed count
    // surfaces instead of leaving stale controls.
    let (pagination, pagination_error) = match repo.count_products(&request).await {
        Ok(total_count) => (PageWindow::build(request.page, total_count, PAGE_SIZE), None),
        Err(err) => {
            log::error!("Failed to count products: {err}");
            (None, Some(ServiceError::from(err).to_string()))
        }
    };

    let view = ProductListPage {
        products,
        pagination,
        current_page: request.page,
        filter: request.filter,
        list_error,
        pagination_error,
    };

    if controller.commit(token, view.clone()).await {
        view
    } else {
        // Superseded by a newer cycle; render the fresher state instead.
        controller.current_view().await.unwrap_or(view)
    }
}
