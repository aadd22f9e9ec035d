use thiserror::Error;

/// Errors that can arise while running a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// Wrapper around IO errors (writing to the game screen).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around rustyline's error type for terminal input failures.
    /// Interrupt and EOF are handled in the session loop and never surface here.
    #[error("input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Internal error (unexpected conditions).
    #[error("internal error: {0}")]
    Internal(String),
}
