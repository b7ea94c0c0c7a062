mod errors;
mod options;
mod scope;
mod service;

pub use crate::readonly::RouterReadOnly;
pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_AJAX_PARAM_NAME, DEFAULT_REQUEST_URI_SOURCE, DEFAULT_URL_SUFFIX, RouterOptions,
    RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
