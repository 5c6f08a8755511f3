use serde::Serialize;

/// Items shown per product page. The catalog never paginates below this:
/// a result set smaller than one page renders without controls.
pub const PAGE_SIZE: u32 = 8;

/// One numbered button in the rendered window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u32,
    pub active: bool,
}

/// Render-ready pagination state derived wholesale from the latest count
/// response plus the last requested page. Never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageWindow {
    pub pages: Vec<PageLink>,
    pub current_page: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Requested page indexes of 0 are normalised up to the first page.
pub fn normalize_page(page: u32) -> u32 {
    page.max(1)
}

/// Total pages for a count, rounding up. The source system truncated here;
/// see DESIGN.md for the recorded decision.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    u32::try_from(total_count.div_ceil(u64::from(page_size.max(1)))).unwrap_or(u32::MAX)
}

impl PageWindow {
    /// Computes the window of page numbers around `current_page` for
    /// `total_count` matching items. Returns `None` while the catalog holds
    /// fewer than `page_size` matches, in which case no controls render.
    pub fn build(current_page: u32, total_count: u64, page_size: u32) -> Option<Self> {
        if total_count < u64::from(page_size) {
            return None;
        }

        let total_pages = total_pages(total_count, page_size);
        let current_page = normalize_page(current_page).min(total_pages);

        let min_page = if current_page >= total_pages {
            current_page.saturating_sub(2)
        } else {
            current_page.saturating_sub(1)
        }
        .max(1);

        let max_page = if current_page == 1 {
            current_page + 2
        } else {
            current_page + 1
        }
        .min(total_pages);

        let pages = (min_page..=max_page)
            .map(|number| PageLink {
                number,
                active: number == current_page,
            })
            .collect();

        Some(Self {
            pages,
            current_page,
            total_pages,
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        })
    }
}
