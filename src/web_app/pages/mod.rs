// web_app/pages/mod.rs - Page components module
//
// - HomePage: shopping list and catalog side by side
// - ShoppingListPage: paginated shopping list only
// - CatalogPage: remote catalog only

pub mod shopping_list;
pub mod catalog;
pub mod home;

pub use shopping_list::{ShoppingListPage, ShoppingListSection};
pub use catalog::{CatalogPage, CatalogSection};
pub use home::HomePage;
