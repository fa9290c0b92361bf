//! In-memory data store for games, elements, users and ratings.
//!
//! The store is the sole owner of all entity tables and id counters. Ids are
//! per-table monotonically increasing integers starting at 1 and are never
//! reused, even after deletion. Absence is signaled by returning `None` (or
//! `false` for deletes), never by an error: the route layer turns absence
//! into a 404.

mod memory;
mod seed;

use async_trait::async_trait;

use crate::entities::{
    Game, GameElement, GameRating, GameUpdate, NewGame, NewGameElement, NewGameRating, NewUser,
    User,
};

pub use memory::MemStorage;

/// Repository contract over the entity tables.
///
/// All methods are effectively atomic with respect to each other: every
/// read-modify-write (including the rating insert plus its aggregation)
/// happens under a single lock with no suspension point in between.
#[async_trait]
pub trait Storage: Send + Sync {
    // User methods
    async fn get_user(&self, id: i32) -> Option<User>;
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    async fn create_user(&self, new_user: NewUser) -> User;

    // Game methods
    async fn get_games(&self) -> Vec<Game>;
    async fn get_game(&self, id: i32) -> Option<Game>;
    async fn get_games_by_author(&self, author_id: i32) -> Vec<Game>;
    async fn create_game(&self, new_game: NewGame) -> Game;
    /// Shallow-merges `update` over the existing record; `None` if absent.
    async fn update_game(&self, id: i32, update: GameUpdate) -> Option<Game>;
    /// Removes the game; returns whether a record existed. Ratings left on
    /// the game are not cascade-deleted.
    async fn delete_game(&self, id: i32) -> bool;
    async fn increment_play_count(&self, id: i32) -> Option<Game>;

    // Game element methods
    async fn get_game_elements(&self) -> Vec<GameElement>;
    async fn get_game_element(&self, id: i32) -> Option<GameElement>;
    async fn create_game_element(&self, new_element: NewGameElement) -> GameElement;

    // Rating methods
    async fn get_ratings_by_game(&self, game_id: i32) -> Vec<GameRating>;
    /// Stores the rating, then synchronously recomputes the referenced
    /// game's aggregate. The rating is persisted even if the game does not
    /// exist; the aggregation step is simply skipped.
    async fn create_rating(&self, new_rating: NewGameRating) -> GameRating;
    /// Recomputes `rating` and `rating_count` on the game from its stored
    /// ratings. Leaves the game untouched when it has zero ratings; `None`
    /// if the game does not exist.
    async fn update_game_rating(&self, game_id: i32) -> Option<Game>;
}
