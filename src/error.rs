use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalsError {
    /// A unit string outside the enumerated height/weight units, carrying
    /// the offending string as given.
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PalsError>;
