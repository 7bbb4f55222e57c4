//! SQLite implementation of [`ParkStore`].
//!
//! [`SqliteStore`] persists parks in a single `parks` table. Identifiers are
//! stored as hyphenated UUID TEXT and coordinates as two REAL columns. Each
//! write is one statement, so every mutation is atomic.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StorageError;
use crate::traits::ParkStore;
use crate::types::{Coordinates, Park, ParkId};

/// SQLite-backed implementation of [`ParkStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

/// Raw column values of a `parks` row, decoded outside the rusqlite closure
/// so a malformed UUID surfaces as [`StorageError::Corrupt`].
struct ParkRow {
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl ParkRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(ParkRow {
            id: row.get(0)?,
            name: row.get(1)?,
            latitude: row.get(2)?,
            longitude: row.get(3)?,
        })
    }

    fn into_park(self) -> Result<Park, StorageError> {
        let id = self.id.parse::<ParkId>().map_err(|e| StorageError::Corrupt {
            reason: format!("invalid park id '{}': {}", self.id, e),
        })?;
        Ok(Park {
            id: Some(id),
            name: self.name,
            coordinates: Coordinates::new(self.latitude, self.longitude),
        })
    }
}

impl ParkStore for SqliteStore {
    fn find_all(&self) -> Result<Vec<Park>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, name, latitude, longitude FROM parks ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], ParkRow::from_row)?;

        let mut parks = Vec::new();
        for row in rows {
            parks.push(row?.into_park()?);
        }
        Ok(parks)
    }

    fn find_by_id(&self, id: ParkId) -> Result<Option<Park>, StorageError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, latitude, longitude FROM parks WHERE id = ?1",
                params![id.to_string()],
                ParkRow::from_row,
            )
            .optional()?;
        row.map(ParkRow::into_park).transpose()
    }

    fn insert(&mut self, mut park: Park) -> Result<Park, StorageError> {
        let id = *park.id.get_or_insert_with(ParkId::new_v4);
        self.conn.execute(
            "INSERT INTO parks (id, name, latitude, longitude) VALUES (?1, ?2, ?3, ?4)",
            params![
                id.to_string(),
                park.name,
                park.coordinates.latitude,
                park.coordinates.longitude,
            ],
        )?;
        tracing::debug!(park_id = %id, "inserted park");
        Ok(park)
    }

    fn update(&mut self, park: Park) -> Result<Park, StorageError> {
        let id = park.persisted_id()?;
        let changed = self.conn.execute(
            "UPDATE parks SET name = ?2, latitude = ?3, longitude = ?4 WHERE id = ?1",
            params![
                id.to_string(),
                park.name,
                park.coordinates.latitude,
                park.coordinates.longitude,
            ],
        )?;
        if changed == 0 {
            return Err(StorageError::ParkNotFound(id));
        }
        tracing::debug!(park_id = %id, "updated park");
        Ok(park)
    }

    fn delete(&mut self, park: &Park) -> Result<(), StorageError> {
        let id = park.persisted_id()?;
        let changed = self
            .conn
            .execute("DELETE FROM parks WHERE id = ?1", params![id.to_string()])?;
        if changed == 0 {
            return Err(StorageError::ParkNotFound(id));
        }
        tracing::debug!(park_id = %id, "deleted park");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn letna() -> Park {
        Park::new("Letná", Coordinates::new(50.0972, 14.4208))
    }

    #[test]
    fn insert_then_find_by_id() {
        let mut store = SqliteStore::in_memory().unwrap();
        let saved = store.insert(letna()).unwrap();
        let id = saved.id.unwrap();

        let found = store.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, "Letná");
        assert_eq!(found.coordinates, Coordinates::new(50.0972, 14.4208));
    }

    #[test]
    fn find_by_unknown_id_is_none() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.find_by_id(ParkId::new_v4()).unwrap().is_none());
    }

    #[test]
    fn find_all_lists_only_persisted_parks_in_insertion_order() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert!(store.find_all().unwrap().is_empty());

        let first = store.insert(Park::new("Riegrovy sady", Coordinates::new(50.0781, 14.4444))).unwrap();
        let second = store.insert(letna()).unwrap();
        let third = store.insert(Park::new("Vyšehrad", Coordinates::new(50.0643, 14.4178))).unwrap();
        store.delete(&second).unwrap();

        let all = store.find_all().unwrap();
        assert_eq!(all, vec![first, third]);
    }

    #[test]
    fn update_overwrites_fields_and_keeps_id() {
        let mut store = SqliteStore::in_memory().unwrap();
        let mut park = store.insert(letna()).unwrap();
        let id = park.id.unwrap();

        park.name = "Letenské sady".into();
        park.coordinates = Coordinates::new(50.0975, 14.4210);
        store.update(park).unwrap();

        let found = store.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.name, "Letenské sady");
        assert_eq!(found.coordinates, Coordinates::new(50.0975, 14.4210));
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn update_missing_park_is_not_found() {
        let mut store = SqliteStore::in_memory().unwrap();
        let mut ghost = letna();
        ghost.id = Some(ParkId::new_v4());
        assert!(matches!(store.update(ghost), Err(StorageError::ParkNotFound(_))));
    }

    #[test]
    fn delete_requires_persisted_park() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert!(matches!(store.delete(&letna()), Err(StorageError::Unpersisted)));
    }

    #[test]
    fn empty_name_violates_check_constraint() {
        let mut store = SqliteStore::in_memory().unwrap();
        let err = store.insert(Park::new("", Coordinates::new(0.0, 0.0))).unwrap_err();
        assert!(matches!(err, StorageError::Sqlite(_)));
    }

    #[test]
    fn malformed_stored_id_is_corrupt() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO parks (id, name, latitude, longitude) VALUES ('bogus', 'x', 0, 0)",
                [],
            )
            .unwrap();
        assert!(matches!(store.find_all(), Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parks.db");
        let path = path.to_str().unwrap();

        let id = {
            let mut store = SqliteStore::new(path).unwrap();
            store.insert(letna()).unwrap().id.unwrap()
        };

        let store = SqliteStore::new(path).unwrap();
        assert_eq!(store.find_by_id(id).unwrap().unwrap().name, "Letná");
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
            let mut store = SqliteStore::in_memory().unwrap();
            let saved = store.insert(park.clone()).unwrap();
            let found = store.find_by_id(saved.id.unwrap()).unwrap().unwrap();
            prop_assert_eq!(&found.name, &park.name);
            prop_assert_eq!(found.coordinates, park.coordinates);
        }

        #[test]
        fn prop_delete_then_find_is_none(parks in prop::collection::vec(park_strategy(), 1..8)) {
            let mut store = SqliteStore::in_memory().unwrap();
            let saved: Vec<Park> = parks
                .into_iter()
                .map(|p| store.insert(p).unwrap())
                .collect();

            store.delete(&saved[0]).unwrap();

            prop_assert!(store.find_by_id(saved[0].id.unwrap()).unwrap().is_none());
            prop_assert_eq!(store.find_all().unwrap().len(), saved.len() - 1);
        }
    }
}
