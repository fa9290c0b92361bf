mod common;

use std::net::IpAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use serde_json::json;

use levelforge_api::config::{Config, Environment};
use levelforge_api::state::AppState;
use levelforge_api::store::MemStorage;

async fn test_app() -> Router {
    let store = MemStorage::new();
    store.seed_demo_data().await;

    let state = AppState {
        store: Arc::new(store),
        config: Config {
            server_host: IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
        },
    };

    levelforge_api::routes::router().with_state(state)
}

fn parse(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_default()
}

#[tokio::test]
async fn seeded_author_owns_all_four_games() {
    let app = test_app().await;

    let (status, body) = common::get(&app, "/api/users/1/games").await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let v = parse(&body);
    let games = v.as_array().map(Vec::as_slice).unwrap_or_default();
    assert_eq!(games.len(), 4);
    assert!(games.iter().all(|g| g["authorId"] == 1));
}

#[tokio::test]
async fn author_listing_includes_newly_created_games() {
    let app = test_app().await;

    let (status, body) = common::post_json(
        &app,
        "/api/games",
        &json!({ "name": "A", "type": "Puzzle", "gridData": [], "authorId": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");

    let (_, body) = common::get(&app, "/api/users/1/games").await;
    let v = parse(&body);
    assert_eq!(v.as_array().map_or(0, Vec::len), 5);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = test_app().await;

    let (status, body) = common::get(&app, "/api/users/999/games").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["message"], "User not found");
}
