use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotzError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}

pub type Result<T> = std::result::Result<T, NotzError>;
