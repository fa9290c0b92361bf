use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::state::AppState;

/// User route group: `/users/...`
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{id}/games", get(list_games_by_author))
}

/// `GET /users/:id/games` — List the games created by a user.
///
/// The user must exist; the game list itself may be empty.
async fn list_games_by_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.get_user(id).await.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let games = state.store.get_games_by_author(id).await;
    Ok(Json(games))
}
