//! Collection Reducer
//!
//! Pure add/edit/delete transitions over the ordered item collection,
//! id allocation, and the pending action held by the confirmation dialog.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::debug;

use crate::domain::{DomainError, DomainResult, Entity, Item, ItemId};
use crate::form::ItemCandidate;

/// A mutation of the collection
#[derive(Debug, Clone, PartialEq)]
pub enum ItemAction {
    /// Append a new item; its id must not already exist
    Add(Item),
    /// Replace the item with the same id
    Edit(Item),
    /// Remove the item with this id
    Delete(ItemId),
}

/// Apply an action, returning the new collection. The input is never modified.
///
/// Edit and delete of an unknown id leave the collection unchanged.
pub fn reduce(items: &[Item], action: ItemAction) -> DomainResult<Vec<Item>> {
    match action {
        ItemAction::Add(item) => {
            if items.iter().any(|existing| existing.id() == item.id()) {
                return Err(DomainError::Conflict(format!("item {} already exists", item.id)));
            }
            let mut next = Vec::with_capacity(items.len() + 1);
            next.extend_from_slice(items);
            next.push(item);
            Ok(next)
        }
        ItemAction::Edit(item) => {
            if !items.iter().any(|existing| existing.id() == item.id()) {
                debug!("edit of unknown item {} ignored", item.id);
            }
            Ok(items
                .iter()
                .map(|existing| {
                    if existing.id() == item.id() {
                        item.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect())
        }
        ItemAction::Delete(id) => {
            let next: Vec<Item> = items.iter().filter(|item| item.id != id).cloned().collect();
            if next.len() == items.len() {
                debug!("delete of unknown item {} ignored", id);
            }
            Ok(next)
        }
    }
}

/// Whether every id in the collection is distinct
pub fn ids_are_unique(items: &[Item]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item.id()))
}

/// Hands out strictly increasing timestamp ids
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    /// Seed from a collection so new ids land above every numeric id in it
    pub fn seeded_from(items: &[Item]) -> Self {
        Self {
            last: items.iter().filter_map(|item| item.id.as_number()).max(),
        }
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> ItemId {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if last >= millis => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        ItemId::Number(id)
    }
}

/// A change waiting for the user to confirm it
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Save a submitted form: edit when the candidate has an id, add otherwise
    Save(ItemCandidate),
    Delete(ItemId),
}

impl PendingAction {
    /// Text shown in the confirmation dialog
    pub fn message(&self) -> &'static str {
        match self {
            PendingAction::Save(_) => "Are you sure you want to save changes?",
            PendingAction::Delete(_) => "Are you sure you want to delete this item?",
        }
    }

    /// Turn the confirmed change into a reducer action.
    ///
    /// New items take an id from `ids` and are stamped with `now`.
    pub fn into_action(self, ids: &mut IdGenerator, now: DateTime<Utc>) -> ItemAction {
        match self {
            PendingAction::Delete(id) => ItemAction::Delete(id),
            PendingAction::Save(candidate) => match candidate.id.clone() {
                Some(id) => ItemAction::Edit(candidate.into_item(id)),
                None => {
                    let id = ids.next_id(now);
                    let mut item = candidate.into_item(id);
                    item.created_at = Some(crate::repository::migration::timestamp(now));
                    ItemAction::Add(item)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn make_item(id: i64, name: &str) -> Item {
        Item::new(id, name, "2024-01-01")
    }

    #[test]
    fn test_add_appends() {
        let items = vec![make_item(1, "A")];
        let next = reduce(&items, ItemAction::Add(make_item(2, "B"))).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].name, "B");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_add_duplicate_id_is_conflict() {
        let items = vec![make_item(1, "A")];
        let result = reduce(&items, ItemAction::Add(make_item(1, "Again")));
        assert!(matches!(result, Err(DomainError::Conflict(_))));
    }

    #[test]
    fn test_edit_replaces_whole_record_in_place() {
        let mut original = make_item(2, "B");
        original.notes = Some("old".to_string());
        let items = vec![make_item(1, "A"), original, make_item(3, "C")];

        let next = reduce(&items, ItemAction::Edit(make_item(2, "B2"))).unwrap();
        assert_eq!(next[1].name, "B2");
        assert_eq!(next[1].notes, None);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_edit_and_delete_of_unknown_id_are_noops() {
        let items = vec![make_item(1, "A")];
        assert_eq!(reduce(&items, ItemAction::Edit(make_item(9, "Z"))).unwrap(), items);
        assert_eq!(reduce(&items, ItemAction::Delete(ItemId::Number(9))).unwrap(), items);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let mut ids = IdGenerator::seeded_from(&[make_item(5_000, "Future")]);
        assert_eq!(ids.next_id(now), ItemId::Number(5_001));
        assert_eq!(ids.next_id(now), ItemId::Number(5_002));

        let mut fresh = IdGenerator::default();
        assert_eq!(fresh.next_id(now), ItemId::Number(1_000));
        assert_eq!(fresh.next_id(now), ItemId::Number(1_001));
    }

    #[test]
    fn test_pending_messages() {
        assert_eq!(
            PendingAction::Delete(ItemId::Number(1)).message(),
            "Are you sure you want to delete this item?"
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64),
        Edit(i64, String),
        Delete(i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..20).prop_map(Op::Add),
            (0i64..20, "[a-z]{1,6}").prop_map(|(id, name)| Op::Edit(id, name)),
            (0i64..20).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let mut items: Vec<Item> = Vec::new();
            for op in ops {
                let action = match op {
                    Op::Add(id) => ItemAction::Add(make_item(id, "new")),
                    Op::Edit(id, name) => ItemAction::Edit(make_item(id, &name)),
                    Op::Delete(id) => ItemAction::Delete(ItemId::Number(id)),
                };
                // Rejected adds leave the collection as it was
                if let Ok(next) = reduce(&items, action) {
                    items = next;
                }
                prop_assert!(ids_are_unique(&items));
            }
        }

        #[test]
        fn add_then_delete_round_trips(ids in proptest::collection::btree_set(0i64..50, 0..10), fresh in 50i64..100) {
            let items: Vec<Item> = ids.iter().map(|id| make_item(*id, "x")).collect();
            let added = reduce(&items, ItemAction::Add(make_item(fresh, "fresh"))).unwrap();
            let restored = reduce(&added, ItemAction::Delete(ItemId::Number(fresh))).unwrap();
            prop_assert_eq!(restored, items);
        }

        #[test]
        fn edit_is_idempotent(ids in proptest::collection::btree_set(0i64..30, 1..10), target in 0i64..30, name in "[a-z]{1,8}") {
            let items: Vec<Item> = ids.iter().map(|id| make_item(*id, "x")).collect();
            let once = reduce(&items, ItemAction::Edit(make_item(target, &name))).unwrap();
            let twice = reduce(&once, ItemAction::Edit(make_item(target, &name))).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
