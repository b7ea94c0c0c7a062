use crate::dispatch::DispatchContext;
use hashbrown::HashMap as FastHashMap;
use std::sync::Arc;

pub use crate::enums::{HttpMethod, MethodToken};

pub type RouteParams = FastHashMap<String, String>;
pub type QueryMap = FastHashMap<String, String>;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;
pub type HandlerResult = Result<(), HandlerError>;

pub type Handler = Arc<dyn Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync>;
pub type NotFoundHandler = Arc<dyn Fn(&DispatchContext<'_>) -> HandlerResult + Send + Sync>;

pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn not_found_handler<F>(f: F) -> NotFoundHandler
where
    F: Fn(&DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}
