use crate::dispatch::{DispatchContext, DispatchOutcome};
use crate::registry::RouteTable;
use crate::request::RequestSnapshot;
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::types::{NotFoundHandler, RouteParams};

/// Every pattern that matches the path is visited in registration order. Per
/// method token the newest binding accepting the request host is invoked, so
/// one request may still reach several handlers.
#[derive(Clone, Copy)]
pub struct Dispatcher<'r> {
    table: &'r RouteTable,
    options: &'r RouterOptions,
    not_found: Option<&'r NotFoundHandler>,
}

impl<'r> Dispatcher<'r> {
    pub fn new(
        table: &'r RouteTable,
        options: &'r RouterOptions,
        not_found: Option<&'r NotFoundHandler>,
    ) -> Self {
        Self {
            table,
            options,
            not_found,
        }
    }

    #[tracing::instrument(level = "debug", skip(self, request), fields(method=%request.method(), path=%request.path()))]
    pub fn dispatch(&self, request: &RequestSnapshot) -> RouterResult<DispatchOutcome> {
        let path = self.options.strip_url_suffix(request.path());
        let context = DispatchContext::new(request, self.options, path);
        let mut params = RouteParams::new();
        let mut matched_count = 0usize;

        for entry in self.table {
            let Some(captures) = entry.pattern().captures(path) else {
                continue;
            };
            tracing::trace!(pattern = %entry.pattern().as_str(), "pattern matched");

            // shared across patterns; a later match overwrites an earlier value
            for (name, value) in captures {
                params.insert(name.to_string(), value.to_string());
            }

            let method = request.method();
            let host = request.host();
            let bindings = entry.bindings();
            for binding in bindings {
                if !binding.accepts(method, host) {
                    continue;
                }
                // one handler per method token: the newest accepting registration
                let shadowed = bindings.iter().any(|other| {
                    other.method() == binding.method()
                        && other.seq() > binding.seq()
                        && other.accepts(method, host)
                });
                if shadowed {
                    continue;
                }
                let ctx = context.at_invocation(matched_count);
                (binding.handler())(&params, &ctx).map_err(|source| RouterError::Handler {
                    method: request.method().to_string(),
                    path: path.to_string(),
                    source,
                })?;
                matched_count += 1;
            }
        }

        if matched_count > 0 {
            return Ok(DispatchOutcome::new(matched_count));
        }

        tracing::debug!(method = %request.method(), path = %path, "no route matched");

        match self.not_found {
            Some(not_found) => {
                not_found(&context).map_err(|source| RouterError::Handler {
                    method: request.method().to_string(),
                    path: path.to_string(),
                    source,
                })?;
                Ok(DispatchOutcome::new(0))
            }
            None => Err(RouterError::RouteNotFound {
                method: request.method().to_string(),
                path: path.to_string(),
            }),
        }
    }
}
