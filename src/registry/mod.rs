mod binding;
mod stats;
mod store;

pub use binding::{HostScope, RouteBinding};
pub use stats::RegistryMetrics;
pub use store::{InsertOutcome, RouteEntry, RouteTable};
