// web_app/components/pagination.rs - Pagination widget
//
// PaginationState is the widget the shopping list coordinator drives; the
// PaginationControls component only draws it and reports clicks.

use leptos::prelude::*;

use crate::web_app::model::PaginationOptions;
use crate::web_app::pagination::{last_page, visible_page_range, PaginationWidget};
use crate::web_app::shopping_list::PAGINATION_CONTAINER_ID;

/// Signal-backed pagination widget
#[derive(Clone, Copy, Debug)]
pub struct PaginationState {
    pub options: RwSignal<PaginationOptions>,
    /// 1-indexed
    pub current_page: RwSignal<u32>,
    pub hidden: RwSignal<bool>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PaginationOptions::for_total(0))
    }
}

impl PaginationState {
    pub fn new(options: PaginationOptions) -> Self {
        Self {
            options: RwSignal::new(options),
            current_page: RwSignal::new(1),
            hidden: RwSignal::new(true),
        }
    }

    /// Last page, tracked
    pub fn last_page(&self) -> u32 {
        self.options
            .with(|options| last_page(options.total_items, options.items_per_page))
    }
}

impl PaginationWidget for PaginationState {
    fn configure(&mut self, options: PaginationOptions) {
        self.options.set(options);
        self.current_page.set(1);
    }

    fn current_page(&self) -> u32 {
        self.current_page.get_untracked()
    }

    fn move_page_to(&mut self, page: u32) {
        let last = self
            .options
            .with_untracked(|options| last_page(options.total_items, options.items_per_page));
        self.current_page.set(page.clamp(1, last));
    }

    fn set_total_items(&mut self, total_items: usize) {
        self.options.update(|options| options.total_items = total_items);
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden.set(hidden);
    }
}

/// Pagination controls: first, previous, a block of numbered pages, next, last.
#[component]
pub fn PaginationControls(
    state: PaginationState,
    /// Called with the requested page
    on_move: Callback<u32>,
) -> impl IntoView {
    let current = move || state.current_page.get();
    let last = move || state.last_page();
    let pages = move || {
        let visible = state.options.with(|options| options.visible_pages);
        visible_page_range(current(), last(), visible).collect::<Vec<_>>()
    };

    let container_class = move || {
        if state.hidden.get() {
            "tui-pagination hidden"
        } else {
            "tui-pagination"
        }
    };

    view! {
        <div id=PAGINATION_CONTAINER_ID class=container_class>
            <button
                type="button"
                class="tui-page-btn tui-first"
                disabled=move || current() <= 1
                on:click=move |_| on_move.run(1)
            >
                "«"
            </button>
            <button
                type="button"
                class="tui-page-btn tui-prev"
                disabled=move || current() <= 1
                on:click=move |_| on_move.run(current().saturating_sub(1).max(1))
            >
                "‹"
            </button>

            {move || {
                pages()
                    .into_iter()
                    .map(|page| {
                        let class = if page == current() {
                            "tui-page-btn tui-is-selected"
                        } else {
                            "tui-page-btn"
                        };
                        view! {
                            <button type="button" class=class on:click=move |_| on_move.run(page)>
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}

            <button
                type="button"
                class="tui-page-btn tui-next"
                disabled=move || current() >= last()
                on:click=move |_| on_move.run((current() + 1).min(last()))
            >
                "›"
            </button>
            <button
                type="button"
                class="tui-page-btn tui-last"
                disabled=move || current() >= last()
                on:click=move |_| on_move.run(last())
            >
                "»"
            </button>
        </div>
    }
}
