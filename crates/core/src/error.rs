use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} cannot be empty.", .0)]
    EmptyField(&'static str),

    #[error("Student ID '{}' already exists.", .0)]
    DuplicateId(String),

    #[error("Maximum student limit ({}) reached! Cannot add more students.", .0)]
    CapacityExceeded(usize),

    #[error("Student with ID '{}' not found.", .0)]
    NotFound(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Input stream closed. Exiting.")]
    InputClosed,
}
