use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A player-built game level.
///
/// `rating` is the average star rating times ten, stored as an integer and
/// recomputed by the store after every rating insertion. `grid_data` is the
/// editor's placed-element layout and is opaque to the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// References `User.id`; not enforced as a foreign key at write time.
    pub author_id: Option<i32>,
    /// Free-text category: platformer, puzzle, adventure, racing, ...
    #[serde(rename = "type")]
    pub game_type: String,
    /// easy, medium, hard, expert.
    pub difficulty: Option<String>,
    pub grid_data: JsonValue,
    pub thumbnail_url: Option<String>,
    pub play_count: i32,
    /// Average rating x 10 (a 4.5-star average is stored as 45).
    pub rating: i32,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    pub is_published: Option<bool>,
}

/// Payload for creating a game. The store assigns the id, zeroes the
/// counters and stamps `created_at`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author_id: Option<i32>,
    #[serde(rename = "type")]
    pub game_type: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub grid_data: JsonValue,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

/// Partial update for a game: absent fields are left unchanged.
///
/// The derived counters (`play_count`, `rating`, `rating_count`) and
/// `created_at` are not updatable through this type.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author_id: Option<i32>,
    #[serde(default, rename = "type")]
    pub game_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub grid_data: Option<JsonValue>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}
