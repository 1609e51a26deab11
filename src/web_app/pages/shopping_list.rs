// web_app/pages/shopping_list.rs - Shopping list page
//
// Books live in the browser's localStorage, so the server renders an empty
// list and the coordinator takes over once the page runs in the browser.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::{Book, PaginationOptions};
use crate::web_app::shopping_list::{ShoppingListCoordinator, SignalTarget, SHOPPING_LIST_CONTAINER};
use crate::web_app::storage::BrowserBookStorage;

type BrowserShoppingList = ShoppingListCoordinator<BrowserBookStorage, PaginationState, SignalTarget<Book>>;

/// Shopping list with its pagination controls
#[component]
pub fn ShoppingListSection() -> impl IntoView {
    let books = RwSignal::new(Vec::<Book>::new());
    let pagination = PaginationState::new(PaginationOptions::for_total(0));
    let coordinator = StoredValue::new(None::<BrowserShoppingList>);

    // Effects only run in the browser
    Effect::new(move |_| {
        let mut list = ShoppingListCoordinator::new(
            BrowserBookStorage::default(),
            pagination,
            SignalTarget::new(books, SHOPPING_LIST_CONTAINER),
        );
        list.init();
        coordinator.set_value(Some(list));
    });

    let on_delete = Callback::new(move |id: String| {
        coordinator.update_value(|list| {
            if let Some(list) = list {
                list.delete(&id);
            }
        });
    });

    let on_move = Callback::new(move |page: u32| {
        coordinator.update_value(|list| {
            if let Some(list) = list {
                list.move_page_to(page);
            }
        });
    });

    view! {
        <section class="shopping-list-section">
            <h1 class="shopping-list-title">"Shopping " <span class="accent">"List"</span></h1>
            <ShoppingList books=books on_delete=on_delete />
            <PaginationControls state=pagination on_move=on_move />
        </section>
    }
}

#[component]
pub fn ShoppingListPage() -> impl IntoView {
    view! {
        <div class="page">
            <ShoppingListSection />
        </div>
    }
}
