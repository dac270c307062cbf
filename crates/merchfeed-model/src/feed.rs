//! The feed aggregate: an ordered collection of items plus the generation
//! timestamp.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::types::FeedDate;

/// The top-level export document source.
///
/// Items are appended, never removed; insertion order is preserved in the
/// rendered output. The feed owns its items; use [`Feed::items_mut`] to
/// mutate them between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    generated_at: FeedDate,
    items: Vec<Item>,
}

impl Feed {
    /// Create an empty feed with its generation timestamp.
    #[must_use]
    pub fn new(generated_at: FeedDate) -> Self {
        Self {
            generated_at,
            items: Vec::new(),
        }
    }

    /// Append an item.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// The generation timestamp.
    #[must_use]
    pub fn generated_at(&self) -> &FeedDate {
        &self.generated_at
    }

    /// The items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access to the items, for edits between renders.
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Number of items in the feed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the feed holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_preserve_item_insertion_order() {
        let mut feed = Feed::new("2015-01-01 12:34:56".parse().expect("valid timestamp"));
        feed.add_item(Item::new("SKU1", "001"));
        feed.add_item(Item::new("SKU2", "002"));

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.items()[0].sku(), "SKU1");
        assert_eq!(feed.items()[1].sku(), "SKU2");
    }

    #[test]
    fn test_should_allow_mutation_between_renders() {
        let mut feed = Feed::new("2015-01-01".parse().expect("valid date"));
        feed.add_item(Item::new("SKU1", "001"));

        feed.items_mut()[0].set_title("Renamed");
        assert_eq!(feed.items()[0].title(), Some("Renamed"));
    }
}
