use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single star rating left on a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRating {
    pub id: i32,
    pub game_id: i32,
    pub user_id: i32,
    /// 1-5 stars.
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a rating; the store assigns the id and timestamp.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRating {
    pub game_id: i32,
    pub user_id: i32,
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
}
