//! Free-text filter over item fields.

use crate::domain::{format_number, Item};

/// Case-insensitive substring match over the searchable fields.
///
/// An empty search matches every item. `date` is not searched.
pub fn matches_search(item: &Item, search: &str) -> bool {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let contains = |text: &str| text.to_lowercase().contains(&needle);

    contains(item.name.as_str())
        || item.quantity.is_some_and(|q| contains(format_number(q).as_str()))
        || item.price.is_some_and(|p| contains(format_number(p).as_str()))
        || item.notes.as_deref().is_some_and(contains)
        || item.category.as_deref().is_some_and(contains)
        || item.created_by.as_deref().is_some_and(contains)
        || item.added_by.as_deref().is_some_and(contains)
        || item.custom_fields.values().any(contains)
}

/// Items matching `search`, in their original order
pub fn filter_items<'a>(items: &'a [Item], search: &str) -> Vec<&'a Item> {
    items.iter().filter(|item| matches_search(item, search)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn groceries() -> Vec<Item> {
        let mut apples = Item::new(1, "Apples", "2024-01-01");
        apples.set_amounts(Some(3.0), Some(2.5));
        apples.category = Some("Fruit".to_string());

        let mut soap = Item::new(2, "Soap", "2024-01-02");
        soap.notes = Some("Lavender scent".to_string());
        soap.added_by = Some("Priya".to_string());

        let mut bread = Item::new(3, "Bread", "2024-01-03");
        bread.custom_fields.insert("bakery", "Corner Shop");
        bread.created_by = Some("Unknown".to_string());

        vec![apples, soap, bread]
    }

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_empty_search_matches_all() {
        let items = groceries();
        assert_eq!(filter_items(&items, "").len(), 3);
    }

    #[test]
    fn test_matches_each_searchable_field() {
        let items = groceries();
        assert_eq!(names(&filter_items(&items, "APPL")), vec!["Apples"]);
        assert_eq!(names(&filter_items(&items, "2.5")), vec!["Apples"]);
        assert_eq!(names(&filter_items(&items, "fruit")), vec!["Apples"]);
        assert_eq!(names(&filter_items(&items, "lavender")), vec!["Soap"]);
        assert_eq!(names(&filter_items(&items, "priya")), vec!["Soap"]);
        assert_eq!(names(&filter_items(&items, "corner")), vec!["Bread"]);
        assert_eq!(names(&filter_items(&items, "unknown")), vec!["Bread"]);
    }

    #[test]
    fn test_date_is_not_searched() {
        let items = groceries();
        assert!(filter_items(&items, "2024-01").is_empty());
    }

    #[test]
    fn test_no_match_yields_no_rows() {
        let items = vec![Item::new(1, "Milk", "2024-01-01")];
        assert!(filter_items(&items, "unknown").is_empty());
    }

    proptest! {
        #[test]
        fn longer_search_never_adds_rows(prefix in "[a-c]{0,3}", suffix in "[a-c]{0,3}", names in proptest::collection::vec("[a-cA-C]{0,6}", 0..12)) {
            let items: Vec<Item> = names
                .iter()
                .enumerate()
                .map(|(i, name)| Item::new(i as i64, name.as_str(), "2024-01-01"))
                .collect();
            let longer = format!("{}{}", prefix, suffix);
            let wide = filter_items(&items, &prefix);
            let narrow = filter_items(&items, &longer);
            for item in &narrow {
                prop_assert!(wide.iter().any(|w| w.id == item.id));
            }
        }
    }
}
