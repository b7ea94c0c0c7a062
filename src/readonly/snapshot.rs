use std::fmt;
use std::sync::Arc;

use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::registry::RouteTable;
use crate::request::RequestSnapshot;
use crate::router::{RouterOptions, RouterResult};
use crate::types::NotFoundHandler;

struct ReadOnlyState {
    table: RouteTable,
    options: RouterOptions,
    not_found: Option<NotFoundHandler>,
}

/// Sealed router; every clone dispatches against the same table.
#[derive(Clone)]
pub struct RouterReadOnly {
    inner: Arc<ReadOnlyState>,
}

impl RouterReadOnly {
    pub(crate) fn new(
        table: RouteTable,
        options: RouterOptions,
        not_found: Option<NotFoundHandler>,
    ) -> Self {
        Self {
            inner: Arc::new(ReadOnlyState {
                table,
                options,
                not_found,
            }),
        }
    }

    pub fn dispatch(&self, request: &RequestSnapshot) -> RouterResult<DispatchOutcome> {
        let state = self.inner.as_ref();
        Dispatcher::new(&state.table, &state.options, state.not_found.as_ref()).dispatch(request)
    }

    pub fn table(&self) -> &RouteTable {
        &self.inner.table
    }

    pub fn options(&self) -> &RouterOptions {
        &self.inner.options
    }
}

impl fmt::Debug for RouterReadOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterReadOnly")
            .field("patterns", &self.inner.table.len())
            .field("options", &self.inner.options)
            .field("has_not_found", &self.inner.not_found.is_some())
            .finish()
    }
}
