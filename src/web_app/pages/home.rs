// web_app/pages/home.rs - Landing page with both flows

use leptos::prelude::*;

use super::{CatalogSection, ShoppingListSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <ShoppingListSection />
            <CatalogSection />
        </div>
    }
}
