// web_app/storage.rs - Shopping list storage
//
// The shopping list is a JSON array of books kept under one localStorage
// key. Other pages of the site add books; this code only reads and deletes.

use crate::web_app::error::StorageError;
use crate::web_app::model::{decode_records, Book};

/// localStorage key holding the shopping list
pub const SHOPPING_LIST_KEY: &str = "shopping-list";

/// Persistent collection of books saved to the shopping list
pub trait BookStorage {
    /// All saved books, in insertion order
    fn load(&self) -> Result<Vec<Book>, StorageError>;

    /// Remove the book with `id`. Unknown ids are a no-op.
    fn delete(&mut self, id: &str) -> Result<(), StorageError>;
}

/// Storage backed by a plain vector
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryBookStorage {
    books: Vec<Book>,
}

impl MemoryBookStorage {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }
}

impl BookStorage for MemoryBookStorage {
    fn load(&self) -> Result<Vec<Book>, StorageError> {
        Ok(self.books.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        self.books.retain(|book| book.id != id);
        Ok(())
    }
}

/// Parse the stored JSON array, keeping every record that decodes
pub fn decode_books(json: &str) -> Result<Vec<Book>, StorageError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    Ok(decode_records(values, "shopping list"))
}

/// Remove `id` from `books` and serialize the rest.
///
/// `None` when the book is not there and nothing needs writing.
pub fn remove_book(mut books: Vec<Book>, id: &str) -> Result<Option<String>, StorageError> {
    let before = books.len();
    books.retain(|book| book.id != id);
    if books.len() == before {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(&books)?))
}

/// Storage backed by `window.localStorage`.
///
/// Only the browser has a localStorage; on native targets every call
/// fails with `StorageError::Unavailable`.
#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Clone, Debug)]
pub struct BrowserBookStorage {
    key: String,
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl Default for BrowserBookStorage {
    fn default() -> Self {
        Self::new(SHOPPING_LIST_KEY)
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl BrowserBookStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "wasm32", any(feature = "ssr", feature = "hydrate")))] {
        fn local_storage() -> Result<web_sys::Storage, StorageError> {
            let window = web_sys::window().ok_or(StorageError::Unavailable)?;
            window
                .local_storage()
                .map_err(|_| StorageError::Unavailable)?
                .ok_or(StorageError::Unavailable)
        }
    } else if #[cfg(any(feature = "ssr", feature = "hydrate"))] {
        // No window off wasm32; web_sys imports would panic if called.
        fn local_storage() -> Result<web_sys::Storage, StorageError> {
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl BookStorage for BrowserBookStorage {
    fn load(&self) -> Result<Vec<Book>, StorageError> {
        let storage = local_storage()?;
        let raw = storage.get_item(&self.key).map_err(|e| StorageError::Read {
            key: self.key.clone(),
            message: format!("{:?}", e),
        })?;

        match raw {
            Some(json) => decode_books(&json),
            None => Ok(Vec::new()),
        }
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let Some(json) = remove_book(self.load()?, id)? else {
            tracing::debug!("Book {} not in shopping list, nothing to delete", id);
            return Ok(());
        };

        local_storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StorageError::Write {
                key: self.key.clone(),
                message: format!("{:?}", e),
            })
    }
}
