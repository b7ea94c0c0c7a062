mod snapshot;

pub use snapshot::RouterReadOnly;
