use serde::Serialize;

/// Pagination metadata included alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

/// One page of an already-fetched result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Window a fetched slice client-side.
///
/// `page` is 1-based; 0 is treated as 1, as is a `per_page` of 0. A page
/// past the end yields an empty window with truthful metadata.
pub fn paginate<T>(items: &[T], page: u64, per_page: u64) -> Page<&T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total = items.len() as u64;
    let total_pages = total.div_ceil(per_page).max(1);
    let start = (page - 1).saturating_mul(per_page);
    let data = items
        .iter()
        .skip(start as usize)
        .take(per_page as usize)
        .collect();
    Page {
        data,
        pagination: Pagination {
            page,
            per_page,
            total,
            total_pages,
        },
    }
}
