// web_app/pages/catalog.rs - Remote catalog page
//
// Independent from the shopping list: a button fetches the whole catalog
// through a server function and the result replaces the list.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::CatalogBook;
use crate::web_app::server_fns::fetch_catalog;
use crate::web_app::shopping_list::{ListTarget, SignalTarget, CATALOG_CONTAINER};

/// "Show Books" button with the catalog list under it
#[component]
pub fn CatalogSection() -> impl IntoView {
    let books = RwSignal::new(Vec::<CatalogBook>::new());
    let fetched = RwSignal::new(false);

    let fetch = Action::new(|_: &()| fetch_catalog());
    let pending = fetch.pending();

    Effect::new(move |_| {
        if let Some(result) = fetch.value().get() {
            let mut target = SignalTarget::new(books, CATALOG_CONTAINER);
            if let Err(e) = target.replace(books_or_empty(result)) {
                tracing::error!("{}", e);
                return;
            }
            fetched.set(true);
        }
    });

    let on_show = Callback::new(move |()| {
        fetch.dispatch(());
    });

    view! {
        <section class="catalog-section">
            <ShowBooksButton on_click=on_show disabled=pending />
            <Show when=move || pending.get()>
                <Loading message="Loading books..." />
            </Show>
            <CatalogList books=books fetched=fetched />
        </section>
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <div class="page">
            <CatalogSection />
        </div>
    }
}
