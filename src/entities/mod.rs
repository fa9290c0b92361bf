pub mod game;
pub mod game_element;
pub mod game_rating;
pub mod user;

pub use game::{Game, GameUpdate, NewGame};
pub use game_element::{GameElement, NewGameElement};
pub use game_rating::{GameRating, NewGameRating};
pub use user::{NewUser, User};
