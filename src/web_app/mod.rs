// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - error.rs: Error taxonomy for storage, rendering and the catalog fetch
// - pagination.rs: Page slicing and the pagination widget seam
// - storage.rs: Book storage seam (memory and browser localStorage)
// - shopping_list.rs: Coordinator keeping widget, storage and list in sync
// - server_fns.rs: Server function declarations (both client and server)
// - api/: Remote catalog client and configuration (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod error;
pub mod pagination;
pub mod storage;
pub mod shopping_list;

// Server function declarations - must be available to both client and server
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Remote catalog client (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
