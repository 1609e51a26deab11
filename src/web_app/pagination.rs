// web_app/pagination.rs - Page slicing and the pagination widget seam
//
// The shopping list shows PAGE_SIZE books per page. Pages are 1-indexed.

use crate::web_app::model::PaginationOptions;

/// Books per shopping list page
pub const PAGE_SIZE: usize = 3;
/// Numbered page buttons shown by the pagination controls
pub const VISIBLE_PAGES: u32 = 3;

/// Books shown on `page` (1-indexed): `[(page-1)*size, page*size)`.
///
/// Pages past the end, and page 0, yield nothing.
pub fn books_for_page<T>(books: &[T], page: u32) -> impl Iterator<Item = &T> + '_ {
    let start = (page as usize)
        .checked_sub(1)
        .map(|p| p.saturating_mul(PAGE_SIZE))
        .unwrap_or(books.len());
    books.iter().skip(start).take(PAGE_SIZE)
}

/// Last valid page for `total_items`, never less than 1
pub fn last_page(total_items: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1) as u32
}

/// Pagination is pointless with a single page
pub fn pagination_hidden(total_items: usize) -> bool {
    total_items <= PAGE_SIZE
}

/// What the shopping list does after a book is deleted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Current page still has books (or nothing is left at all): render it again
    RenderCurrent(u32),
    /// Current page became empty: step back one page, the move renders it
    MoveTo(u32),
}

/// Decide where to go once a deletion leaves `remaining` books
pub fn page_after_delete(current_page: u32, remaining: usize) -> DeleteOutcome {
    let offset = (current_page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);
    if offset >= remaining && current_page > 1 {
        DeleteOutcome::MoveTo(current_page - 1)
    } else {
        DeleteOutcome::RenderCurrent(current_page)
    }
}

/// Numbered buttons shown around `current_page`.
///
/// Pages are grouped in blocks of `visible_pages` (1-3, 4-6, ...) and the
/// block holding the current page is shown.
pub fn visible_page_range(current_page: u32, last_page: u32, visible_pages: u32) -> std::ops::RangeInclusive<u32> {
    let visible = visible_pages.max(1);
    let current = current_page.clamp(1, last_page.max(1));
    let block_start = ((current - 1) / visible) * visible + 1;
    let block_end = (block_start + visible - 1).min(last_page.max(1));
    block_start..=block_end
}

/// The pagination control the shopping list drives.
///
/// Implementations hold the current page. `move_page_to` only moves the
/// widget; the page-change reaction belongs to whoever owns the widget.
pub trait PaginationWidget {
    fn configure(&mut self, options: PaginationOptions);
    fn current_page(&self) -> u32;
    fn move_page_to(&mut self, page: u32);
    fn set_total_items(&mut self, total_items: usize);
    fn set_hidden(&mut self, hidden: bool);
}

/// Plain in-memory pagination widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTracker {
    options: PaginationOptions,
    current_page: u32,
    hidden: bool,
}

impl Default for PageTracker {
    fn default() -> Self {
        Self::new(PaginationOptions::for_total(0))
    }
}

impl PageTracker {
    pub fn new(options: PaginationOptions) -> Self {
        Self {
            options,
            current_page: 1,
            hidden: false,
        }
    }

    pub fn options(&self) -> PaginationOptions {
        self.options
    }

    pub fn total_items(&self) -> usize {
        self.options.total_items
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn last_page(&self) -> u32 {
        last_page(self.options.total_items, self.options.items_per_page)
    }
}

impl PaginationWidget for PageTracker {
    fn configure(&mut self, options: PaginationOptions) {
        self.options = options;
        self.current_page = 1;
    }

    fn current_page(&self) -> u32 {
        self.current_page
    }

    fn move_page_to(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.last_page());
    }

    fn set_total_items(&mut self, total_items: usize) {
        self.options.total_items = total_items;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(len: usize, page: u32) -> usize {
        let start = (page as usize - 1) * PAGE_SIZE;
        PAGE_SIZE.min(len.saturating_sub(start))
    }

    #[test]
    fn test_books_for_page_length_property() {
        for len in 0..12 {
            let books: Vec<usize> = (0..len).collect();
            for page in 1..6 {
                assert_eq!(
                    books_for_page(&books, page).count(),
                    expected_len(len, page),
                    "len={}, page={}",
                    len,
                    page
                );
            }
        }
    }

    #[test]
    fn test_books_for_page_contents() {
        let books = vec!["a", "b", "c", "d"];
        let first: Vec<_> = books_for_page(&books, 1).copied().collect();
        let second: Vec<_> = books_for_page(&books, 2).copied().collect();
        assert_eq!(first, vec!["a", "b", "c"]);
        assert_eq!(second, vec!["d"]);
    }

    #[test]
    fn test_books_for_page_out_of_range() {
        let books = vec![1, 2, 3];
        assert_eq!(books_for_page(&books, 0).count(), 0);
        assert_eq!(books_for_page(&books, 2).count(), 0);
        assert_eq!(books_for_page(&books, u32::MAX).count(), 0);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 3), 1);
        assert_eq!(last_page(3, 3), 1);
        assert_eq!(last_page(4, 3), 2);
        assert_eq!(last_page(7, 3), 3);
        assert_eq!(last_page(7, 0), 1);
    }

    #[test]
    fn test_pagination_hidden_threshold() {
        assert!(pagination_hidden(0));
        assert!(pagination_hidden(3));
        assert!(!pagination_hidden(4));
    }

    #[test]
    fn test_page_after_delete_steps_back_from_emptied_page() {
        assert_eq!(page_after_delete(2, 3), DeleteOutcome::MoveTo(1));
        assert_eq!(page_after_delete(3, 6), DeleteOutcome::MoveTo(2));
    }

    #[test]
    fn test_page_after_delete_keeps_page_with_books() {
        assert_eq!(page_after_delete(1, 5), DeleteOutcome::RenderCurrent(1));
        assert_eq!(page_after_delete(2, 4), DeleteOutcome::RenderCurrent(2));
    }

    #[test]
    fn test_page_after_delete_last_book_stays_on_first_page() {
        assert_eq!(page_after_delete(1, 0), DeleteOutcome::RenderCurrent(1));
    }

    #[test]
    fn test_visible_page_range_blocks() {
        assert_eq!(visible_page_range(1, 5, 3), 1..=3);
        assert_eq!(visible_page_range(3, 5, 3), 1..=3);
        assert_eq!(visible_page_range(4, 5, 3), 4..=5);
        assert_eq!(visible_page_range(2, 2, 3), 1..=2);
        assert_eq!(visible_page_range(9, 2, 3), 1..=2);
    }

    #[test]
    fn test_page_tracker_clamps_moves() {
        let mut tracker = PageTracker::new(PaginationOptions::for_total(7));
        tracker.move_page_to(3);
        assert_eq!(tracker.current_page(), 3);
        tracker.move_page_to(10);
        assert_eq!(tracker.current_page(), 3);
        tracker.move_page_to(0);
        assert_eq!(tracker.current_page(), 1);
    }

    #[test]
    fn test_page_tracker_total_update_keeps_page() {
        let mut tracker = PageTracker::new(PaginationOptions::for_total(4));
        tracker.move_page_to(2);
        tracker.set_total_items(3);
        assert_eq!(tracker.current_page(), 2);
        assert_eq!(tracker.last_page(), 1);
    }

    #[test]
    fn test_page_tracker_configure_resets_page() {
        let mut tracker = PageTracker::new(PaginationOptions::for_total(9));
        tracker.move_page_to(3);
        tracker.configure(PaginationOptions::for_total(2));
        assert_eq!(tracker.current_page(), 1);
        assert_eq!(tracker.total_items(), 2);
    }
}
