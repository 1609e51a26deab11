// web_app/components/catalog.rs - Catalog display components
//
// - CatalogEntry: one remote catalog book
// - CatalogList: the `.book-list` container
// - ShowBooksButton: triggers the catalog fetch

use std::fmt::Display;

use leptos::prelude::*;

use crate::web_app::model::CatalogBook;

/// Text shown when a fetch produced no books
pub const NO_BOOKS_TEXT: &str = "No books found";
/// Id of the button that loads the catalog
pub const SHOW_BOOKS_BUTTON_ID: &str = "showBooksButton";

/// Books from a fetch result, logging and dropping the error.
///
/// A failed fetch and an empty catalog render the same way.
pub fn books_or_empty<E: Display>(result: Result<Vec<CatalogBook>, E>) -> Vec<CatalogBook> {
    match result {
        Ok(books) => books,
        Err(e) => {
            tracing::error!("Error fetching books: {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn CatalogEntry(book: CatalogBook) -> impl IntoView {
    view! {
        <div class="book-item">
            <img src=book.book_image alt=book.title.clone() />
            <h2>{book.title}</h2>
            <p>{book.author}</p>
            <p>{book.description}</p>
            <a href=book.buy_links.amazon_link target="_blank" rel="noopener noreferrer">
                "Buy on Amazon"
            </a>
            <a href=book.buy_links.apple_books_link target="_blank" rel="noopener noreferrer">
                "Buy on Apple Books"
            </a>
        </div>
    }
}

/// The `.book-list` container.
///
/// Empty until the first fetch settles; afterwards shows the books or
/// the "No books found" message.
#[component]
pub fn CatalogList(
    #[prop(into)]
    books: Signal<Vec<CatalogBook>>,
    /// Whether a fetch has completed
    #[prop(into)]
    fetched: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="book-list">
            {move || {
                let current = books.get();
                if current.is_empty() {
                    fetched.get().then(|| view! { <p>{NO_BOOKS_TEXT}</p> }).into_any()
                } else {
                    current
                        .into_iter()
                        .map(|book| view! { <CatalogEntry book=book /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn ShowBooksButton(
    on_click: Callback<()>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            id=SHOW_BOOKS_BUTTON_ID
            type="button"
            class="show-books-button"
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            "Show Books"
        </button>
    }
}
