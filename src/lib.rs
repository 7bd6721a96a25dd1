// Exact alpha-beta search over finite two-player zero-sum games
pub mod error;
pub mod game;
pub mod instrument;
pub mod search;
pub mod tictactoe;
pub mod tree;

pub use error::{Error, Result};
pub use game::{Game, Player};
pub use search::{SearchParams, SearchResult, Variant};
