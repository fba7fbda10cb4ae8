use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadlevelError {
    #[error("padding level cannot be less than 0: {0}")]
    InvalidLevel(i64),

    #[error("cannot lookup padding level: {0}")]
    LevelNotFound(usize),

    #[error("error adding padding value: ({level} = {width})")]
    DuplicateLevel { level: usize, width: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("padding width {width} at level {level} exceeds the total limit of {limit}")]
    InvalidWidth {
        level: usize,
        width: usize,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, PadlevelError>;
