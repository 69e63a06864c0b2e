//! Application layer errors

use thiserror::Error;

/// Errors raised while running the entry point
#[derive(Error, Debug)]
pub enum EntryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
