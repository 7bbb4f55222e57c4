//! In-memory implementation of [`ParkStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral runs.
//! Parks are kept in an insertion-ordered map so listing order matches the
//! SQLite backend.

use indexmap::IndexMap;

use crate::error::StorageError;
use crate::traits::ParkStore;
use crate::types::{Park, ParkId};

/// In-memory backend with the same semantics as [`SqliteStore`](crate::SqliteStore).
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    parks: IndexMap<ParkId, Park>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParkStore for InMemoryStore {
    fn find_all(&self) -> Result<Vec<Park>, StorageError> {
        Ok(self.parks.values().cloned().collect())
    }

    fn find_by_id(&self, id: ParkId) -> Result<Option<Park>, StorageError> {
        Ok(self.parks.get(&id).cloned())
    }

    fn insert(&mut self, mut park: Park) -> Result<Park, StorageError> {
        let id = *park.id.get_or_insert_with(ParkId::new_v4);
        if self.parks.contains_key(&id) {
            return Err(StorageError::Corrupt {
                reason: format!("duplicate park id {}", id),
            });
        }
        self.parks.insert(id, park.clone());
        Ok(park)
    }

    fn update(&mut self, park: Park) -> Result<Park, StorageError> {
        let id = park.persisted_id()?;
        let slot = self
            .parks
            .get_mut(&id)
            .ok_or(StorageError::ParkNotFound(id))?;
        *slot = park.clone();
        Ok(park)
    }

    fn delete(&mut self, park: &Park) -> Result<(), StorageError> {
        let id = park.persisted_id()?;
        self.parks
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StorageError::ParkNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinates;
    use proptest::prelude::*;

    fn letna() -> Park {
        Park::new("Letná", Coordinates::new(50.0972, 14.4208))
    }

    #[test]
    fn insert_assigns_id_and_find_returns_it() {
        let mut store = InMemoryStore::new();
        let saved = store.insert(letna()).unwrap();
        let id = saved.id.expect("insert assigns an id");

        let found = store.find_by_id(id).unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.name, "Letná");
    }

    #[test]
    fn find_all_keeps_insertion_order_after_delete() {
        let mut store = InMemoryStore::new();
        let a = store.insert(Park::new("a", Coordinates::new(1.0, 1.0))).unwrap();
        let b = store.insert(Park::new("b", Coordinates::new(2.0, 2.0))).unwrap();
        let c = store.insert(Park::new("c", Coordinates::new(3.0, 3.0))).unwrap();

        store.delete(&b).unwrap();

        let names: Vec<_> = store.find_all().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(store.find_by_id(a.id.unwrap()).unwrap().is_some());
        assert!(store.find_by_id(c.id.unwrap()).unwrap().is_some());
    }

    #[test]
    fn update_keeps_id() {
        let mut store = InMemoryStore::new();
        let mut park = store.insert(letna()).unwrap();
        let id = park.id;
        park.name = "Stromovka".into();
        park.coordinates = Coordinates::new(50.105, 14.42);

        let updated = store.update(park).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(store.find_by_id(id.unwrap()).unwrap().unwrap().name, "Stromovka");
    }

    #[test]
    fn update_and_delete_require_persisted_park() {
        let mut store = InMemoryStore::new();
        assert!(matches!(store.update(letna()), Err(StorageError::Unpersisted)));
        assert!(matches!(store.delete(&letna()), Err(StorageError::Unpersisted)));
    }

    #[test]
    fn delete_missing_park_is_not_found() {
        let mut store = InMemoryStore::new();
        let mut ghost = letna();
        ghost.id = Some(ParkId::new_v4());
        assert!(matches!(store.delete(&ghost), Err(StorageError::ParkNotFound(_))));
    }

    fn park_strategy() -> impl Strategy<Value = Park> {
        (
            "[A-Za-zÀ-ž][A-Za-zÀ-ž ]{0,30}",
            -90.0f64..=90.0,
            -180.0f64..=180.0,
        )
            .prop_map(|(name, lat, lon)| Park::new(name, Coordinates::new(lat, lon)))
    }

    proptest! {
        #[test]
        fn prop_insert_then_find_returns_submitted_values(park in park_strategy()) {
            let mut store = InMemoryStore::new();
            let saved = store.insert(park.clone()).unwrap();
            prop_assert!(saved.id.is_some());

            let found = store.find_by_id(saved.id.unwrap()).unwrap().unwrap();
            prop_assert_eq!(&found.name, &park.name);
            prop_assert_eq!(found.coordinates, park.coordinates);
        }

        #[test]
        fn prop_delete_then_find_is_none(parks in prop::collection::vec(park_strategy(), 1..8)) {
            let mut store = InMemoryStore::new();
            let saved: Vec<Park> = parks
                .into_iter()
                .map(|p| store.insert(p).unwrap())
                .collect();

            store.delete(&saved[0]).unwrap();

            prop_assert!(store.find_by_id(saved[0].id.unwrap()).unwrap().is_none());
            prop_assert_eq!(store.find_all().unwrap().len(), saved.len() - 1);
        }

        #[test]
        fn prop_find_all_keeps_insertion_order_after_delete(
            parks in prop::collection::vec(park_strategy(), 1..10),
            victim in any::<prop::sample::Index>(),
        ) {
            let mut store = InMemoryStore::new();
            let mut saved: Vec<Park> = parks
                .into_iter()
                .map(|p| store.insert(p).unwrap())
                .collect();

            let removed = saved.remove(victim.index(saved.len()));
            store.delete(&removed).unwrap();

            prop_assert_eq!(store.find_all().unwrap(), saved);
        }
    }
}
