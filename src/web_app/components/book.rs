// web_app/components/book.rs - Shopping list display components
//
// - BookEntry: one saved book with its delete control
// - EmptyShoppingList: placeholder for an empty page
// - ShoppingList: the `.shopping-list` container

use leptos::prelude::*;

use super::common::{TrashIcon, AMAZON_ICON, APPLE_BOOKS_ICON, BOOK_PILE_IMAGE};
use crate::web_app::model::Book;

/// Text shown when the shopping list page has no books
pub const EMPTY_LIST_TEXT: &str = "This page is empty, add some books and proceed to order.";

/// One book in the shopping list
///
/// Purchase links without a matching store entry render without a target.
#[component]
pub fn BookEntry(
    book: Book,
    /// Called with the book id when the basket button is clicked
    on_delete: Callback<String>,
) -> impl IntoView {
    let amazon_link = book.amazon_link().map(str::to_owned);
    let apple_books_link = book.apple_books_link().map(str::to_owned);
    let delete_id = book.id.clone();

    view! {
        <li class="one-book">
            <img class="img-book" src=book.image_url alt="Book" />
            <div class="description">
                <div class="up-part">
                    <h2 class="book-name">{book.title}</h2>
                    <h3 class="type-name">{book.list_name}</h3>

                    <button
                        data-id=book.id
                        class="basket"
                        type="button"
                        aria-label="Remove from shopping list"
                        on:click=move |_| on_delete.run(delete_id.clone())
                    >
                        <TrashIcon />
                    </button>
                </div>
                <p class="text-description">{book.description}</p>

                <div class="book-app">
                    <h3 class="name-author">{book.author}</h3>
                    <div class="book-links">
                        <a href=amazon_link class="book-links-amazon" target="_blank" rel="noopener noreferrer">
                            <img src=AMAZON_ICON alt="Amazon" width="32" height="11" />
                        </a>
                        <a href=apple_books_link class="book-links-applebook" target="_blank" rel="noopener noreferrer">
                            <img src=APPLE_BOOKS_ICON alt="Apple Books" width="16" height="16" />
                        </a>
                    </div>
                </div>
            </div>
        </li>
    }
}

/// Placeholder for an empty shopping list
#[component]
pub fn EmptyShoppingList() -> impl IntoView {
    view! {
        <p class="shopping-list-empty-text">{EMPTY_LIST_TEXT}</p>
        <img class="no-book" src=BOOK_PILE_IMAGE alt="Book" />
    }
}

/// The `.shopping-list` container.
///
/// Its whole content is rebuilt whenever `books` changes.
#[component]
pub fn ShoppingList(
    /// Books on the current page
    #[prop(into)]
    books: Signal<Vec<Book>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let is_empty = move || books.with(Vec::is_empty);

    view! {
        <ul class=move || if is_empty() { "shopping-list empty-page-content" } else { "shopping-list" }>
            {move || {
                let page = books.get();
                if page.is_empty() {
                    view! { <EmptyShoppingList /> }.into_any()
                } else {
                    page.into_iter()
                        .map(|book| view! { <BookEntry book=book on_delete=on_delete /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}
