use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("command-line flag '{flag}' requires a value")]
    MissingArgumentValue { flag: String },
}

pub type RequestResult<T> = Result<T, RequestError>;
