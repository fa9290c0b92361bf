//! Demo data loaded at process start.
//!
//! Seeding goes through the public [`Storage`] methods so the ids and
//! rating aggregates come out of the same allocation paths as live
//! requests: one author, four published games, one rating each.

use serde_json::json;
use tracing::info;

use super::{MemStorage, Storage};
use crate::entities::{NewGame, NewGameRating, NewUser};

impl MemStorage {
    /// Populate the store with the fixed demo data set.
    ///
    /// After seeding, the next game id is 5 and games 1-4 carry aggregates
    /// of 50, 40, 50 and 40.
    pub async fn seed_demo_data(&self) {
        self.create_user(NewUser {
            username: "sarah".to_string(),
            // No auth layer in front of this API; the password is inert.
            password: "password123".to_string(),
            display_name: Some("Sarah P.".to_string()),
            avatar_url: Some("https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=64&q=80".to_string()),
        })
        .await;

        let demo_games = [
            NewGame {
                name: "Platform Panic".to_string(),
                description: Some(
                    "A challenging platform game with moving obstacles and collectible coins."
                        .to_string(),
                ),
                author_id: Some(1),
                game_type: "Platformer".to_string(),
                difficulty: Some("Medium".to_string()),
                grid_data: json!([]),
                thumbnail_url: Some(
                    "https://images.unsplash.com/photo-1579373903781-fd5c0c30c4cd?w=600&q=80"
                        .to_string(),
                ),
                is_published: Some(true),
            },
            NewGame {
                name: "Puzzle Master".to_string(),
                description: Some(
                    "Brain-teasing puzzles that will challenge your problem-solving skills."
                        .to_string(),
                ),
                author_id: Some(1),
                game_type: "Puzzle".to_string(),
                difficulty: Some("Hard".to_string()),
                grid_data: json!([]),
                thumbnail_url: Some(
                    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=600&q=80"
                        .to_string(),
                ),
                is_published: Some(true),
            },
            NewGame {
                name: "Office Escape".to_string(),
                description: Some(
                    "Find your way through a maze of cubicles to escape the office before 5 PM!"
                        .to_string(),
                ),
                author_id: Some(1),
                game_type: "Adventure".to_string(),
                difficulty: Some("Easy".to_string()),
                grid_data: json!([]),
                thumbnail_url: Some(
                    "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=600&q=80"
                        .to_string(),
                ),
                is_published: Some(true),
            },
            NewGame {
                name: "Coffee Run".to_string(),
                description: Some(
                    "Race against the clock to deliver coffee to all your coworkers before it gets cold!"
                        .to_string(),
                ),
                author_id: Some(1),
                game_type: "Racing".to_string(),
                difficulty: Some("Medium".to_string()),
                grid_data: json!([]),
                thumbnail_url: Some(
                    "https://images.unsplash.com/photo-1509198397868-475647b2a1e5?w=600&q=80"
                        .to_string(),
                ),
                is_published: Some(true),
            },
        ];

        for game in demo_games {
            self.create_game(game).await;
        }

        let demo_ratings = [
            (1, 5, "Great game!"),
            (2, 4, "Challenging puzzles!"),
            (3, 5, "Very creative!"),
            (4, 4, "Fun racing game!"),
        ];

        for (game_id, rating, comment) in demo_ratings {
            self.create_rating(NewGameRating {
                game_id,
                user_id: 1,
                rating,
                comment: Some(comment.to_string()),
            })
            .await;
        }

        info!("Demo data seeded: 1 user, 4 games, 4 ratings");
    }
}
