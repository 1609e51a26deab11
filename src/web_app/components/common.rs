// web_app/components/common.rs - Reusable UI components
//
// Pure, stateless pieces that receive all data via props.

use leptos::prelude::*;

/// Illustration shown on an empty shopping list
pub const BOOK_PILE_IMAGE: &str = "/img/book-pile.svg";
/// Icon inside the Amazon purchase link
pub const AMAZON_ICON: &str = "/img/amazon-default.svg";
/// Icon inside the Apple Books purchase link
pub const APPLE_BOOKS_ICON: &str = "/img/book-default.svg";

/// Loading indicator
///
/// Displays a small spinner with a message.
#[component]
pub fn Loading(
    /// Message to display next to the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner"></div>
            <span class="loading-text">{message}</span>
        </div>
    }
}

/// Trash can icon used by the delete control
#[component]
pub fn TrashIcon() -> impl IntoView {
    view! {
        <svg class="trash" width="16" height="16" viewBox="0 0 16 16" fill="none" stroke="currentColor">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="1.3"
                d="M2 4h12M6.5 7v4M9.5 7v4M3.5 4l.7 9.1a1 1 0 0 0 1 .9h5.6a1 1 0 0 0 1-.9L12.5 4M6 4V2.5a.5.5 0 0 1 .5-.5h3a.5.5 0 0 1 .5.5V4"
            ></path>
        </svg>
    }
}
