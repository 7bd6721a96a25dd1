use thiserror::Error;

/// Errors surfaced by games and by the search engine.
///
/// States and actions are carried as their `Debug` rendering so the error
/// type stays independent of any particular game.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid move {action} from state {state}")]
    InvalidMove { state: String, action: String },

    #[error("no legal action from state {state}")]
    NoLegalAction { state: String },

    #[error("utility requested for non-terminal state {state}")]
    NonTerminalUtility { state: String },

    #[error("search exceeded the ply limit of {limit}")]
    DepthExceeded { limit: u32 },

    #[error("invalid game tree: {0}")]
    InvalidTree(String),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_move<S: std::fmt::Debug, A: std::fmt::Debug>(state: &S, action: &A) -> Self {
        Error::InvalidMove { state: format!("{state:?}"), action: format!("{action:?}") }
    }

    pub fn no_legal_action<S: std::fmt::Debug>(state: &S) -> Self {
        Error::NoLegalAction { state: format!("{state:?}") }
    }

    pub fn non_terminal_utility<S: std::fmt::Debug>(state: &S) -> Self {
        Error::NonTerminalUtility { state: format!("{state:?}") }
    }
}
