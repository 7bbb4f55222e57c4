//! Park record types.
//!
//! [`ParkId`] lives next to [`Park`] because identity is a storage concern:
//! a park only gains an ID when it is inserted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Length of the hyphenated `8-4-4-4-12` UUID form.
const HYPHENATED_LEN: usize = 36;

/// Unique identifier for a stored park.
///
/// Parsing accepts only the hyphenated form, so each park has exactly one
/// textual identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParkId(pub Uuid);

impl ParkId {
    /// Allocates a fresh random identifier.
    pub fn new_v4() -> Self {
        ParkId(Uuid::new_v4())
    }
}

impl fmt::Display for ParkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A string that is not a hyphenated UUID.
#[derive(Debug, Error)]
#[error("'{0}' is not a hyphenated uuid")]
pub struct ParseParkIdError(String);

impl FromStr for ParkId {
    type Err = ParseParkIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // uuid also accepts the simple, braced and urn forms; those differ in length.
        if s.len() != HYPHENATED_LEN {
            return Err(ParseParkIdError(s.to_string()));
        }
        Uuid::try_parse(s)
            .map(ParkId)
            .map_err(|_| ParseParkIdError(s.to_string()))
    }
}

/// Latitude/longitude pair embedded in every park.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }
}

/// A named point of interest.
///
/// `id` is `None` until the park has been inserted into a store, and always
/// `Some` for parks returned by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Park {
    pub id: Option<ParkId>,
    pub name: String,
    pub coordinates: Coordinates,
}

impl Park {
    /// Creates an unpersisted park.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Park {
            id: None,
            name: name.into(),
            coordinates,
        }
    }

    /// Returns the identifier, or [`StorageError::Unpersisted`](crate::StorageError::Unpersisted)
    /// if the park was never inserted.
    pub fn persisted_id(&self) -> Result<ParkId, crate::StorageError> {
        self.id.ok_or(crate::StorageError::Unpersisted)
    }
}
