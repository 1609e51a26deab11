// web_app/app.rs - Root application component
//
// Sets up meta tags, routing and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{CatalogPage, HomePage, ShoppingListPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Bookshelf" />
        <Meta name="description" content="Shopping list of saved books and the bestseller catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/book_shelf.css" />

        <Router>
            <header class="site-header">
                <nav class="container">
                    <A href="/">"Bookshelf"</A>
                    <A href="/shopping-list">"Shopping list"</A>
                    <A href="/catalog">"Catalog"</A>
                </nav>
            </header>
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/shopping-list") view=ShoppingListPage />
                    <Route path=path!("/catalog") view=CatalogPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to shopping list"</a>
        </div>
    }
}
