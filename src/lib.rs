pub mod dispatch;
pub mod enums;
pub mod pattern;
pub mod readonly;
pub mod registry;
pub mod request;
pub mod router;
pub mod types;

pub use dispatch::{DispatchContext, DispatchOutcome};
pub use enums::{HttpMethod, IntoMethodTokens, MethodToken};
pub use pattern::{CompiledPattern, PatternCompiler, PatternError, compile};
pub use readonly::RouterReadOnly;
pub use request::{RequestError, RequestSnapshot};
pub use router::{Router, RouterError, RouterOptions, RouterOptionsError, RouterResult};
pub use types::{Handler, HandlerError, HandlerResult, NotFoundHandler, RouteParams};
