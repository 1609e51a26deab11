// common/mod.rs - Shared test fixtures
//
// Books shaped like the ones the books backend hands out, and a render
// target that remembers every render it was asked to do.

#![allow(dead_code)]

use book_shelf::web_app::error::RenderError;
use book_shelf::web_app::model::{Book, BuyLink};
use book_shelf::web_app::shopping_list::ListTarget;

/// A saved book with id `book-n` and both purchase links
pub fn book(n: usize) -> Book {
    Book {
        id: format!("book-{}", n),
        title: format!("Title {}", n),
        author: format!("Author {}", n),
        description: format!("Description {}", n),
        image_url: format!("https://storage.example.com/covers/{}.jpg", n),
        list_name: "Hardcover Fiction".to_string(),
        buy_links: vec![
            BuyLink {
                name: "Amazon".to_string(),
                url: Some(format!("https://www.amazon.com/dp/{}", n)),
            },
            BuyLink {
                name: "Apple Books".to_string(),
                url: Some(format!("https://goto.applebooks.apple/{}", n)),
            },
        ],
    }
}

/// Books `book-1` ..= `book-n`
pub fn books(n: usize) -> Vec<Book> {
    (1..=n).map(book).collect()
}

/// Ids `book-a` ..= `book-b`
pub fn ids(range: std::ops::RangeInclusive<usize>) -> Vec<String> {
    range.map(|n| format!("book-{}", n)).collect()
}

/// Records the ids of every render, in order
#[derive(Default)]
pub struct RecordingTarget {
    pub renders: Vec<Vec<String>>,
}

impl RecordingTarget {
    pub fn last(&self) -> Option<Vec<String>> {
        self.renders.last().cloned()
    }
}

impl ListTarget<Book> for RecordingTarget {
    fn replace(&mut self, items: Vec<Book>) -> Result<(), RenderError> {
        self.renders.push(items.into_iter().map(|b| b.id).collect());
        Ok(())
    }
}
