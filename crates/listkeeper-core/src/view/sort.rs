//! Sort orders for the item list.
//!
//! Only one ordering governs at a time: the default newest-first date
//! order, or an explicit name/price/total sort picked by the user.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Price,
    Total,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Price => "Price",
            SortKey::Total => "Total",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// By date, newest first
    #[default]
    Newest,
    By { key: SortKey, direction: SortDirection },
}

impl SortOrder {
    /// Clicking the active key flips its direction; any other key starts ascending
    pub fn toggle(self, key: SortKey) -> Self {
        match self {
            SortOrder::By { key: current, direction } if current == key => SortOrder::By {
                key,
                direction: direction.flipped(),
            },
            _ => SortOrder::By {
                key,
                direction: SortDirection::Asc,
            },
        }
    }

    /// Direction shown next to a sort control, if that key is active
    pub fn direction_for(&self, key: SortKey) -> Option<SortDirection> {
        match self {
            SortOrder::By { key: current, direction } if *current == key => Some(*direction),
            _ => None,
        }
    }
}

/// Missing values order below present ones
fn compare_amounts(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_by(key: SortKey, a: &Item, b: &Item) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Price => compare_amounts(a.price, b.price),
        SortKey::Total => compare_amounts(a.total, b.total),
    }
}

/// Stable sort in place; equal keys keep their prior relative order
pub fn sort_items(items: &mut [&Item], order: SortOrder) {
    match order {
        SortOrder::Newest => items.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::By { key, direction: SortDirection::Asc } => {
            items.sort_by(|a, b| compare_by(key, a, b))
        }
        SortOrder::By { key, direction: SortDirection::Desc } => {
            items.sort_by(|a, b| compare_by(key, b, a))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn priced(id: i64, name: &str, price: Option<f64>) -> Item {
        let mut item = Item::new(id, name, "2024-01-01");
        item.price = price;
        item
    }

    fn sorted_names(items: &[Item], order: SortOrder) -> Vec<String> {
        let mut rows: Vec<&Item> = items.iter().collect();
        sort_items(&mut rows, order);
        rows.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_price_ascending() {
        let items = vec![priced(1, "A", Some(5.0)), priced(2, "B", Some(3.0))];
        let order = SortOrder::default().toggle(SortKey::Price);
        assert_eq!(sorted_names(&items, order), vec!["B", "A"]);
    }

    #[test]
    fn test_missing_values_sort_lowest() {
        let items = vec![
            priced(1, "Priced", Some(1.0)),
            priced(2, "Unpriced", None),
        ];
        let asc = SortOrder::By { key: SortKey::Price, direction: SortDirection::Asc };
        assert_eq!(sorted_names(&items, asc), vec!["Unpriced", "Priced"]);
        assert_eq!(sorted_names(&items, asc.toggle(SortKey::Price)), vec!["Priced", "Unpriced"]);
    }

    #[test]
    fn test_name_sort_is_case_sensitive() {
        let items = vec![
            priced(1, "banana", None),
            priced(2, "Cherry", None),
            priced(3, "apple", None),
        ];
        let asc = SortOrder::default().toggle(SortKey::Name);
        assert_eq!(sorted_names(&items, asc), vec!["Cherry", "apple", "banana"]);
    }

    #[test]
    fn test_default_is_newest_first() {
        let items = vec![
            Item::new(1, "Old", "2023-12-31"),
            Item::new(2, "New", "2024-02-01"),
            Item::new(3, "Mid", "2024-01-15"),
        ];
        assert_eq!(sorted_names(&items, SortOrder::Newest), vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_toggle_cycles() {
        let order = SortOrder::Newest.toggle(SortKey::Name);
        assert_eq!(order.direction_for(SortKey::Name), Some(SortDirection::Asc));
        let order = order.toggle(SortKey::Name);
        assert_eq!(order.direction_for(SortKey::Name), Some(SortDirection::Desc));
        let order = order.toggle(SortKey::Total);
        assert_eq!(order.direction_for(SortKey::Name), None);
        assert_eq!(order.direction_for(SortKey::Total), Some(SortDirection::Asc));
    }

    proptest! {
        #[test]
        fn equal_keys_keep_prior_order(prices in proptest::collection::vec(0u8..4, 0..20), desc in any::<bool>()) {
            let items: Vec<Item> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| priced(i as i64, &format!("item{}", i), Some(f64::from(*p))))
                .collect();
            let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
            let mut rows: Vec<&Item> = items.iter().collect();
            sort_items(&mut rows, SortOrder::By { key: SortKey::Price, direction });

            for pair in rows.windows(2) {
                if pair[0].price == pair[1].price {
                    prop_assert!(pair[0].id.as_number() < pair[1].id.as_number());
                }
            }
        }
    }
}
