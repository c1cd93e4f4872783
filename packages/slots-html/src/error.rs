use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Failed to parse HTML: {0}")]
    Parse(#[from] html_parser::Error),

    #[error("No element with id `{0}` was found")]
    RootNotFound(String),
}
