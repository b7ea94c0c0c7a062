mod context;
mod dispatcher;
mod outcome;

pub use context::DispatchContext;
pub use dispatcher::Dispatcher;
pub use outcome::DispatchOutcome;
