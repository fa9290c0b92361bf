use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A palette item the grid editor can place: terrain, item or character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameElement {
    pub id: i32,
    /// One of `terrain`, `item`, `character`.
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: String,
    /// Icon class or image reference.
    pub icon: Option<String>,
    /// Element-specific settings, opaque to the store.
    pub properties: Option<JsonValue>,
}

/// Payload for creating a palette element; the store assigns the id.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameElement {
    #[serde(rename = "type")]
    pub element_type: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub properties: Option<JsonValue>,
}
