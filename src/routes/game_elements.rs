use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppError;
use crate::state::AppState;

/// Element palette router.
pub fn router() -> Router<AppState> {
    Router::new().route("/game-elements", get(list_game_elements))
}

/// `GET /game-elements` — List the palette elements available to the editor.
async fn list_game_elements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let elements = state.store.get_game_elements().await;
    Ok(Json(elements))
}
