use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::entities::{GameUpdate, NewGame, NewGameRating};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Game management router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game).patch(update_game).delete(delete_game),
        )
        .route("/games/{id}/play", post(play_game))
        .route("/games/{id}/rate", post(rate_game))
}

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `POST /games/:id/rate`; the game id comes from the path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateGameRequest {
    user_id: i32,
    rating: i32,
    #[serde(default)]
    comment: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /games` — List all games in insertion order.
async fn list_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = state.store.get_games().await;
    Ok(Json(games))
}

/// `GET /games/:id` — Get a game by id.
async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = state
        .store
        .get_game(id)
        .await
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

    Ok(Json(game))
}

/// `POST /games` — Create a new game.
async fn create_game(
    State(state): State<AppState>,
    AppJson(new_game): AppJson<NewGame>,
) -> Result<impl IntoResponse, AppError> {
    let game = state.store.create_game(new_game).await;
    Ok((StatusCode::CREATED, Json(game)))
}

/// `PATCH /games/:id` — Update a game. Absent fields are left unchanged.
async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(update): AppJson<GameUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let game = state
        .store
        .update_game(id, update)
        .await
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

    Ok(Json(game))
}

/// `DELETE /games/:id` — Delete a game. Its ratings are not cascaded.
async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_game(id).await {
        return Err(AppError::NotFound("Game not found".to_string()));
    }

    Ok(Json(json!({ "message": "Game deleted successfully" })))
}

/// `POST /games/:id/play` — Count one play of a game.
async fn play_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = state
        .store
        .increment_play_count(id)
        .await
        .ok_or_else(|| AppError::NotFound("Game not found".to_string()))?;

    Ok(Json(game))
}

/// `POST /games/:id/rate` — Add a star rating to a game.
///
/// The game must exist; the rating payload carries only the user, stars and
/// an optional comment. Creating the rating also refreshes the game's
/// aggregate score.
async fn rate_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(req): AppJson<RateGameRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.get_game(id).await.is_none() {
        return Err(AppError::NotFound("Game not found".to_string()));
    }

    if !(1..=5).contains(&req.rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let rating = state
        .store
        .create_rating(NewGameRating {
            game_id: id,
            user_id: req.user_id,
            rating: req.rating,
            comment: req.comment,
        })
        .await;

    Ok((StatusCode::CREATED, Json(rating)))
}
