//! List View Pipeline
//!
//! Derives the rendered rows from the raw collection:
//! filter by search text, then sort, then work out which columns to show.

mod columns;
mod filter;
mod sort;

pub use columns::{custom_field_keys, ColumnSet};
pub use filter::{filter_items, matches_search};
pub use sort::{sort_items, SortDirection, SortKey, SortOrder};

use serde::{Deserialize, Serialize};

use crate::domain::Item;

/// User-controlled inputs to the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortOrder,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

/// Rows and columns ready to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    pub rows: Vec<Item>,
    pub columns: ColumnSet,
}

impl ListView {
    pub fn derive(items: &[Item], query: &ListQuery) -> Self {
        let mut rows = filter_items(items, &query.search);
        sort_items(&mut rows, query.sort);
        let columns = ColumnSet::derive(&rows, items);
        Self {
            rows: rows.into_iter().cloned().collect(),
            columns,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> Vec<Item> {
        let mut a = Item::new(1, "A", "2024-01-01");
        a.price = Some(5.0);
        let mut b = Item::new(2, "B", "2024-01-02");
        b.price = Some(3.0);
        b.custom_fields.insert("aisle", "7");
        vec![a, b]
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let query = ListQuery::new("", SortOrder::Newest.toggle(SortKey::Price));
        let view = ListView::derive(&collection(), &query);
        let names: Vec<_> = view.rows.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert!(view.columns.price);
    }

    #[test]
    fn test_filtered_out_rows_keep_custom_headers() {
        let query = ListQuery::new("A", SortOrder::Newest);
        let view = ListView::derive(&collection(), &query);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.columns.custom_keys, vec!["aisle"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let query = ListQuery::new("unknown", SortOrder::Newest);
        let view = ListView::derive(&collection(), &query);
        assert!(view.is_empty());
        assert!(!view.columns.price);
    }
}
