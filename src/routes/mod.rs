mod game_elements;
mod games;
mod health;
mod users;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health` — lightweight health check (used by the deploy platform)
/// - `/api/...` — the JSON API consumed by the editor frontend
pub fn router() -> Router<AppState> {
    let api = Router::new()
        .merge(games::router())
        .merge(game_elements::router())
        .merge(users::router());

    Router::new()
        .merge(health::router())
        .nest("/api", api)
}
