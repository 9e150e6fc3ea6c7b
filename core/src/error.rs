use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Row or column out of range")]
    OutOfRange,
    #[error("Invalid position notation")]
    InvalidFormat,
    #[error("Too many hazards for the board")]
    InvalidArgument,
}

pub type Result<T> = core::result::Result<T, GameError>;
