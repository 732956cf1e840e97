use serde::Serialize;

use crate::query::QueryParams;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }
    let current_page = current_page.min(last_page);

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of list items plus what the pager needs to render its links.
///
/// `page` and the entries of `pages` are zero-based; `None` marks a gap.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    /// Encoded filters appended to every pager link.
    pub query: Option<String>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let pages = get_pages(total_pages, current_page.saturating_add(1), 2, 2, 4, 2)
            .into_iter()
            .map(|page| page.map(|p| p - 1))
            .collect();

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            query: None,
        }
    }

    /// Keeps the active filters on pager links.
    pub fn with_query(mut self, params: Option<&QueryParams>) -> Self {
        self.query = params
            .map(QueryParams::to_query_string)
            .filter(|query| !query.is_empty());
        self
    }

    /// Link to `page` below `base`, e.g. `/contracts/page/2?term=ana`.
    pub fn href(&self, base: &str, page: usize) -> String {
        match &self.query {
            Some(query) => format!("{base}/{page}?{query}"),
            None => format!("{base}/{page}"),
        }
    }
}
