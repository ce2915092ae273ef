//! Table pagination

use crate::error::{Result, TicketError};
use serde::Serialize;

/// One page of a list, with the numbers the table footer shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based position of the first item shown, 0 when the page is empty
    pub start_item: usize,
    /// 1-based position of the last item shown, 0 when the page is empty
    pub end_item: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Footer text, e.g. `Showing 11-20 of 43`
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.start_item, self.end_item, self.total_items
        )
    }
}

/// Slice `items` into page `page` (1-based) of `page_size` items.
/// Pages past the end come back empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    if page_size == 0 {
        return Err(TicketError::invalid_value("page_size", "must be greater than zero"));
    }
    if page == 0 {
        return Err(TicketError::invalid_value("page", "pages start at 1"));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    let slice = &items[start..end];

    let (start_item, end_item) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Ok(Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
        start_item,
        end_item,
    })
}
