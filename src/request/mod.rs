mod error;
mod query;
mod snapshot;

pub use error::{RequestError, RequestResult};
pub use query::{parse_query, split_uri};
pub use snapshot::{RequestFlags, RequestSnapshot, RequestSnapshotBuilder};
