// web_app/shopping_list.rs - Shopping list coordinator
//
// Keeps three things in agreement: the books in storage, the pagination
// widget (page count, current page, visibility) and the rendered list.
// One coordinator is owned by each shopping list view.

use crate::web_app::error::RenderError;
use crate::web_app::model::{Book, PaginationOptions, ViewState};
use crate::web_app::pagination::{
    books_for_page, page_after_delete, pagination_hidden, DeleteOutcome, PaginationWidget,
};
use crate::web_app::storage::BookStorage;

/// Class of the shopping list container
pub const SHOPPING_LIST_CONTAINER: &str = "shopping-list";
/// Class of the catalog container
pub const CATALOG_CONTAINER: &str = "book-list";
/// Id of the pagination controls container
pub const PAGINATION_CONTAINER_ID: &str = "tui-pagination-container";

/// A rendered container whose whole content is replaced on every render
pub trait ListTarget<T> {
    fn replace(&mut self, items: Vec<T>) -> Result<(), RenderError>;
}

/// Shopping list view coordinator
pub struct ShoppingListCoordinator<S, W, T> {
    storage: S,
    widget: W,
    target: T,
    state: ViewState,
}

impl<S, W, T> ShoppingListCoordinator<S, W, T>
where
    S: BookStorage,
    W: PaginationWidget,
    T: ListTarget<Book>,
{
    pub fn new(storage: S, widget: W, target: T) -> Self {
        Self {
            storage,
            widget,
            target,
            state: ViewState::default(),
        }
    }

    /// Configure the widget for the stored books and render page 1
    pub fn init(&mut self) {
        let books = self.load_books();
        tracing::info!("Shopping list initialised with {} books", books.len());

        self.widget.configure(PaginationOptions::for_total(books.len()));
        self.update_pages(books.len());

        let page = self.widget.current_page();
        self.state.current_page = page;
        self.render_page(&books, page);
    }

    /// Push the item count into the widget and hide it when one page is enough
    pub fn update_pages(&mut self, total_items: usize) {
        self.widget.set_hidden(pagination_hidden(total_items));
        self.widget.set_total_items(total_items);
        self.state.total_items = total_items;
    }

    /// Page-change reaction: reload, resync, render the new page
    pub fn on_page_moved(&mut self, page: u32) {
        let books = self.load_books();
        self.update_pages(books.len());
        self.state.current_page = page;
        self.render_page(&books, page);
    }

    /// Move the widget and run the page-change reaction for where it landed
    pub fn move_page_to(&mut self, page: u32) {
        self.widget.move_page_to(page);
        let landed = self.widget.current_page();
        self.on_page_moved(landed);
    }

    /// Delete a book and keep the current page valid.
    ///
    /// Renders exactly once: either directly, or through the page move when
    /// the current page was emptied.
    pub fn delete(&mut self, id: &str) -> DeleteOutcome {
        if let Err(e) = self.storage.delete(id) {
            tracing::error!("Failed to delete book {} from shopping list: {}", id, e);
        }

        let books = self.load_books();
        let current_page = self.widget.current_page();
        self.update_pages(books.len());

        let outcome = page_after_delete(current_page, books.len());
        tracing::debug!("Deleted book {}: {:?}", id, outcome);

        match outcome {
            DeleteOutcome::MoveTo(page) => self.move_page_to(page),
            DeleteOutcome::RenderCurrent(page) => {
                self.state.current_page = page;
                self.render_page(&books, page);
            }
        }
        outcome
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    fn load_books(&self) -> Vec<Book> {
        match self.storage.load() {
            Ok(books) => books,
            Err(e) => {
                tracing::error!("Failed to load shopping list: {}", e);
                Vec::new()
            }
        }
    }

    fn render_page(&mut self, books: &[Book], page: u32) {
        let items: Vec<Book> = books_for_page(books, page).cloned().collect();
        if let Err(e) = self.target.replace(items) {
            tracing::error!("{}", e);
        }
    }
}

/// Render target backed by a Leptos signal.
///
/// The signal is owned by the list component; once that component is gone
/// the signal is disposed and the container counts as missing.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod signal_target {
    use leptos::prelude::*;

    use super::ListTarget;
    use crate::web_app::error::RenderError;

    pub struct SignalTarget<T: Send + Sync + 'static> {
        items: RwSignal<Vec<T>>,
        container: &'static str,
    }

    impl<T: Send + Sync + 'static> Clone for SignalTarget<T> {
        fn clone(&self) -> Self {
            *self
        }
    }

    impl<T: Send + Sync + 'static> Copy for SignalTarget<T> {}

    impl<T: Send + Sync + 'static> SignalTarget<T> {
        pub fn new(items: RwSignal<Vec<T>>, container: &'static str) -> Self {
            Self { items, container }
        }
    }

    impl<T: Send + Sync + 'static> ListTarget<T> for SignalTarget<T> {
        fn replace(&mut self, items: Vec<T>) -> Result<(), RenderError> {
            match self.items.try_set(items) {
                None => Ok(()),
                Some(_) => Err(RenderError::ContainerMissing(self.container)),
            }
        }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use signal_target::SignalTarget;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::error::StorageError;
    use crate::web_app::pagination::PageTracker;
    use crate::web_app::storage::MemoryBookStorage;

    #[derive(Default)]
    struct Detached {
        attempts: usize,
    }

    impl ListTarget<Book> for Detached {
        fn replace(&mut self, _items: Vec<Book>) -> Result<(), RenderError> {
            self.attempts += 1;
            Err(RenderError::ContainerMissing(SHOPPING_LIST_CONTAINER))
        }
    }

    #[derive(Default)]
    struct LastRender(Option<Vec<String>>);

    impl ListTarget<Book> for LastRender {
        fn replace(&mut self, items: Vec<Book>) -> Result<(), RenderError> {
            self.0 = Some(items.into_iter().map(|b| b.id).collect());
            Ok(())
        }
    }

    struct BrokenStorage;

    impl BookStorage for BrokenStorage {
        fn load(&self) -> Result<Vec<Book>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn delete(&mut self, _id: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn books(n: usize) -> Vec<Book> {
        (1..=n)
            .map(|i| Book {
                id: i.to_string(),
                title: format!("Book {}", i),
                author: String::new(),
                description: String::new(),
                image_url: String::new(),
                list_name: String::new(),
                buy_links: vec![],
            })
            .collect()
    }

    #[test]
    fn test_missing_container_keeps_state_in_sync() {
        let mut list = ShoppingListCoordinator::new(
            MemoryBookStorage::new(books(5)),
            PageTracker::default(),
            Detached::default(),
        );
        list.init();
        list.move_page_to(2);

        assert_eq!(list.target().attempts, 2);
        assert_eq!(list.state(), ViewState::new(2, 5));
        assert!(!list.widget().is_hidden());
    }

    #[test]
    fn test_unreadable_storage_renders_empty_list() {
        let mut list =
            ShoppingListCoordinator::new(BrokenStorage, PageTracker::default(), LastRender::default());
        list.init();

        assert_eq!(list.target().0, Some(vec![]));
        assert_eq!(list.state().total_items, 0);
        assert!(list.widget().is_hidden());
    }

    #[test]
    fn test_failed_delete_still_rerenders() {
        let mut list =
            ShoppingListCoordinator::new(BrokenStorage, PageTracker::default(), LastRender::default());
        list.init();
        let outcome = list.delete("1");

        assert_eq!(outcome, DeleteOutcome::RenderCurrent(1));
        assert_eq!(list.target().0, Some(vec![]));
    }

    #[test]
    fn test_move_is_clamped_by_widget() {
        let mut list = ShoppingListCoordinator::new(
            MemoryBookStorage::new(books(4)),
            PageTracker::default(),
            LastRender::default(),
        );
        list.init();
        list.move_page_to(9);

        assert_eq!(list.state().current_page, 2);
        assert_eq!(list.target().0, Some(vec!["4".to_string()]));
    }
}
