//! Pagination control helpers

/// Numbered buttons shown at most, ellipses not counted
pub const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons for `current` out of `total` pages
///
/// First and last page are always present. Around them sits a window of up
/// to three pages centered on `current`, pinned to 2..=4 near the start and
/// to the last four near the end.
pub fn visible_pages(current: u32, total: u32) -> Vec<PageItem> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current <= 3 {
        end = 4.min(total - 1);
    }
    if current >= total - 2 {
        start = (total - 3).max(2);
    }

    let mut pages = vec![PageItem::Page(1)];
    if start > 2 {
        pages.push(PageItem::Ellipsis);
    }
    pages.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        pages.push(PageItem::Ellipsis);
    }
    pages.push(PageItem::Page(total));
    pages
}

/// "Showing 11-20 of 24 employees"
pub fn range_label(page: u32, page_size: u32, total: u64) -> String {
    if total == 0 {
        return "Showing 0-0 of 0 employees".to_string();
    }
    let start = u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1;
    let end = (u64::from(page) * u64::from(page_size)).min(total);
    format!("Showing {start}-{end} of {total} employees")
}

pub fn can_go_previous(current: u32) -> bool {
    current > 1
}

pub fn can_go_next(current: u32, total_pages: u32) -> bool {
    current < total_pages
}
