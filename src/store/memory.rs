use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::Storage;
use crate::entities::{
    Game, GameElement, GameRating, GameUpdate, NewGame, NewGameElement, NewGameRating, NewUser,
    User,
};

/// All entity tables plus their id counters, guarded by one lock so that
/// multi-table operations (rating insert + aggregation) stay atomic.
///
/// `BTreeMap` keeps iteration in id order, which equals insertion order
/// because ids are allocated monotonically.
#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    games: BTreeMap<i32, Game>,
    elements: BTreeMap<i32, GameElement>,
    ratings: BTreeMap<i32, GameRating>,

    user_counter: i32,
    game_counter: i32,
    element_counter: i32,
    rating_counter: i32,
}

impl Tables {
    /// Recompute a game's `rating`/`rating_count` from its stored ratings.
    ///
    /// Leaves the game untouched when it has zero ratings (the previous
    /// aggregate stands; avoids dividing by zero). `None` if the game does
    /// not exist.
    fn recompute_game_rating(&mut self, game_id: i32) -> Option<Game> {
        let game = self.games.get(&game_id)?;

        let ratings: Vec<i32> = self
            .ratings
            .values()
            .filter(|r| r.game_id == game_id)
            .map(|r| r.rating)
            .collect();

        if ratings.is_empty() {
            return Some(game.clone());
        }

        let total: i32 = ratings.iter().sum();
        #[allow(clippy::cast_possible_truncation)]
        let avg_rating = (f64::from(total) / ratings.len() as f64 * 10.0).round() as i32;

        let game = self.games.get_mut(&game_id)?;
        game.rating = avg_rating;
        #[allow(clippy::cast_possible_truncation)]
        {
            game.rating_count = ratings.len() as i32;
        }
        Some(game.clone())
    }
}

/// In-memory implementation of [`Storage`].
///
/// Construct one instance at process start and share it through the
/// application state; tests build a fresh instance each for isolation.
/// State lives for the process lifetime only.
#[derive(Debug, Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    /// Creates a new store with empty tables and all counters at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i32) -> Option<User> {
        self.tables.read().await.users.get(&id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        let tables = self.tables.read().await;
        tables
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    async fn create_user(&self, new_user: NewUser) -> User {
        let mut tables = self.tables.write().await;
        tables.user_counter += 1;
        let id = tables.user_counter;

        let user = User {
            id,
            username: new_user.username,
            password: new_user.password,
            display_name: new_user.display_name,
            avatar_url: new_user.avatar_url,
        };
        debug!(user_id = id, username = %user.username, "User created");
        tables.users.insert(id, user.clone());
        user
    }

    async fn get_games(&self) -> Vec<Game> {
        self.tables.read().await.games.values().cloned().collect()
    }

    async fn get_game(&self, id: i32) -> Option<Game> {
        self.tables.read().await.games.get(&id).cloned()
    }

    async fn get_games_by_author(&self, author_id: i32) -> Vec<Game> {
        let tables = self.tables.read().await;
        tables
            .games
            .values()
            .filter(|game| game.author_id == Some(author_id))
            .cloned()
            .collect()
    }

    async fn create_game(&self, new_game: NewGame) -> Game {
        let mut tables = self.tables.write().await;
        tables.game_counter += 1;
        let id = tables.game_counter;

        let game = Game {
            id,
            name: new_game.name,
            description: new_game.description,
            author_id: new_game.author_id,
            game_type: new_game.game_type,
            difficulty: new_game.difficulty,
            grid_data: new_game.grid_data,
            thumbnail_url: new_game.thumbnail_url,
            play_count: 0,
            rating: 0,
            rating_count: 0,
            created_at: Utc::now(),
            is_published: new_game.is_published,
        };
        debug!(game_id = id, name = %game.name, "Game created");
        tables.games.insert(id, game.clone());
        game
    }

    async fn update_game(&self, id: i32, update: GameUpdate) -> Option<Game> {
        let mut tables = self.tables.write().await;
        let game = tables.games.get_mut(&id)?;

        if let Some(name) = update.name {
            game.name = name;
        }
        if let Some(description) = update.description {
            game.description = Some(description);
        }
        if let Some(author_id) = update.author_id {
            game.author_id = Some(author_id);
        }
        if let Some(game_type) = update.game_type {
            game.game_type = game_type;
        }
        if let Some(difficulty) = update.difficulty {
            game.difficulty = Some(difficulty);
        }
        if let Some(grid_data) = update.grid_data {
            game.grid_data = grid_data;
        }
        if let Some(thumbnail_url) = update.thumbnail_url {
            game.thumbnail_url = Some(thumbnail_url);
        }
        if let Some(is_published) = update.is_published {
            game.is_published = Some(is_published);
        }

        debug!(game_id = id, "Game updated");
        Some(game.clone())
    }

    async fn delete_game(&self, id: i32) -> bool {
        let removed = self.tables.write().await.games.remove(&id).is_some();
        if removed {
            debug!(game_id = id, "Game deleted");
        }
        removed
    }

    async fn increment_play_count(&self, id: i32) -> Option<Game> {
        let mut tables = self.tables.write().await;
        let game = tables.games.get_mut(&id)?;
        game.play_count += 1;
        debug!(game_id = id, play_count = game.play_count, "Play counted");
        Some(game.clone())
    }

    async fn get_game_elements(&self) -> Vec<GameElement> {
        self.tables
            .read()
            .await
            .elements
            .values()
            .cloned()
            .collect()
    }

    async fn get_game_element(&self, id: i32) -> Option<GameElement> {
        self.tables.read().await.elements.get(&id).cloned()
    }

    async fn create_game_element(&self, new_element: NewGameElement) -> GameElement {
        let mut tables = self.tables.write().await;
        tables.element_counter += 1;
        let id = tables.element_counter;

        let element = GameElement {
            id,
            element_type: new_element.element_type,
            name: new_element.name,
            icon: new_element.icon,
            properties: new_element.properties,
        };
        debug!(element_id = id, name = %element.name, "Game element created");
        tables.elements.insert(id, element.clone());
        element
    }

    async fn get_ratings_by_game(&self, game_id: i32) -> Vec<GameRating> {
        let tables = self.tables.read().await;
        tables
            .ratings
            .values()
            .filter(|rating| rating.game_id == game_id)
            .cloned()
            .collect()
    }

    async fn create_rating(&self, new_rating: NewGameRating) -> GameRating {
        let mut tables = self.tables.write().await;
        tables.rating_counter += 1;
        let id = tables.rating_counter;

        let rating = GameRating {
            id,
            game_id: new_rating.game_id,
            user_id: new_rating.user_id,
            rating: new_rating.rating,
            comment: new_rating.comment,
            created_at: Utc::now(),
        };
        tables.ratings.insert(id, rating.clone());

        // Aggregation runs in the same critical section as the insert;
        // skipped when the referenced game does not exist.
        let aggregated = tables.recompute_game_rating(rating.game_id);
        debug!(
            rating_id = id,
            game_id = rating.game_id,
            stars = rating.rating,
            game_found = aggregated.is_some(),
            "Rating created"
        );
        rating
    }

    async fn update_game_rating(&self, game_id: i32) -> Option<Game> {
        self.tables.write().await.recompute_game_rating(game_id)
    }
}
