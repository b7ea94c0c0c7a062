use crate::pattern::PatternError;
use crate::request::RequestError;
use crate::router::RouterOptionsError;
use crate::types::HandlerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no route matched for method '{method}' and path '{path}'")]
    RouteNotFound { method: String, path: String },
    #[error("handler failed for method '{method}' and path '{path}'")]
    Handler {
        method: String,
        path: String,
        #[source]
        source: HandlerError,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
}

pub type RouterResult<T> = Result<T, RouterError>;
