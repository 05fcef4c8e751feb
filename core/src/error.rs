use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mines were already placed on this board")]
    AlreadyInitialized,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Operation is not allowed on this cell")]
    InvalidOperation,
}

pub type Result<T> = core::result::Result<T, GameError>;
