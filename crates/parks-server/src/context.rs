//! View-model contexts handed to the page templates.
//!
//! Every context is a plain struct built from one or more [`Park`] records,
//! serialized with camelCase keys. The field names are the interface the
//! templates depend on:
//!
//! | Template | Context | Fields |
//! |---|---|---|
//! | `index` | [`IndexContext`] | `title`, `parkContexts` |
//! | `show` | [`ShowContext`] | `title`, `parkContext` |
//! | `create` | [`CreateContext`] | `title`, `parkContext` (nullable), `isEditing` |
//! | `delete` | [`DeleteContext`] | `title`, `parkContext` |
//!
//! A [`ParkContext`] carries `id` (nullable), `name` and
//! `coordinates.latitude` / `coordinates.longitude`.

use serde::Serialize;

use parks_storage::{Park, ParkId};

/// Coordinates as exposed to templates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinatesContext {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single park as exposed to templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkContext {
    /// `None` for a park that has not been inserted yet.
    pub id: Option<ParkId>,
    pub name: String,
    pub coordinates: CoordinatesContext,
}

impl From<&Park> for ParkContext {
    fn from(park: &Park) -> Self {
        ParkContext {
            id: park.id,
            name: park.name.clone(),
            coordinates: CoordinatesContext {
                latitude: park.coordinates.latitude,
                longitude: park.coordinates.longitude,
            },
        }
    }
}

/// Context for the `index` template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexContext {
    pub title: String,
    pub park_contexts: Vec<ParkContext>,
}

impl IndexContext {
    /// Lists `parks` in the order given.
    pub fn new(parks: &[Park]) -> Self {
        IndexContext {
            title: "Home page".to_string(),
            park_contexts: parks.iter().map(ParkContext::from).collect(),
        }
    }
}

/// Context for the `show` template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowContext {
    pub title: String,
    pub park_context: ParkContext,
}

impl ShowContext {
    pub fn new(park: &Park) -> Self {
        ShowContext {
            title: park.name.clone(),
            park_context: park.into(),
        }
    }
}

/// Context for the `create` template, shared by the create and edit forms.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContext {
    pub title: String,
    pub park_context: Option<ParkContext>,
    pub is_editing: bool,
}

impl CreateContext {
    /// An empty form for a new park.
    pub fn blank() -> Self {
        CreateContext {
            title: "Add a new park".to_string(),
            park_context: None,
            is_editing: false,
        }
    }

    /// A form pre-filled with an existing park.
    pub fn editing(park: &Park) -> Self {
        CreateContext {
            title: format!("Edit {}", park.name),
            park_context: Some(park.into()),
            is_editing: true,
        }
    }
}

/// Context for the `delete` template.
///
/// Built from the last known values of a park that has just been removed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteContext {
    pub title: String,
    pub park_context: ParkContext,
}

impl DeleteContext {
    pub fn new(park: &Park) -> Self {
        DeleteContext {
            title: format!("Deleted {}", park.name),
            park_context: park.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parks_storage::Coordinates;
    use serde_json::json;

    fn letna() -> Park {
        Park::new("Letná", Coordinates::new(50.0972, 14.4208))
    }

    #[test]
    fn unpersisted_park_serializes_null_id() {
        let value = serde_json::to_value(ParkContext::from(&letna())).unwrap();
        assert_eq!(
            value,
            json!({
                "id": null,
                "name": "Letná",
                "coordinates": { "latitude": 50.0972, "longitude": 14.4208 }
            })
        );
    }

    #[test]
    fn persisted_park_serializes_hyphenated_id() {
        let mut park = letna();
        let id: ParkId = "6f1c1c36-55a8-4f5e-9b0e-1d2b3c4d5e6f".parse().unwrap();
        park.id = Some(id);
        let value = serde_json::to_value(ShowContext::new(&park)).unwrap();
        assert_eq!(value["title"], "Letná");
        assert_eq!(value["parkContext"]["id"], "6f1c1c36-55a8-4f5e-9b0e-1d2b3c4d5e6f");
    }

    #[test]
    fn index_keeps_park_order() {
        let parks = vec![
            Park::new("b", Coordinates::new(0.0, 0.0)),
            Park::new("a", Coordinates::new(0.0, 0.0)),
        ];
        let value = serde_json::to_value(IndexContext::new(&parks)).unwrap();
        assert_eq!(value["title"], "Home page");
        assert_eq!(value["parkContexts"][0]["name"], "b");
        assert_eq!(value["parkContexts"][1]["name"], "a");
    }

    #[test]
    fn create_context_field_names() {
        let blank = serde_json::to_value(CreateContext::blank()).unwrap();
        assert_eq!(
            blank,
            json!({ "title": "Add a new park", "parkContext": null, "isEditing": false })
        );

        let editing = serde_json::to_value(CreateContext::editing(&letna())).unwrap();
        assert_eq!(editing["isEditing"], true);
        assert_eq!(editing["parkContext"]["name"], "Letná");
    }
}
