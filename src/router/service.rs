use std::fmt;

use super::scope::ScopeGuard;
use crate::dispatch::{DispatchContext, DispatchOutcome, Dispatcher};
use crate::enums::{HttpMethod, IntoMethodTokens, MethodToken};
use crate::pattern::PatternCompiler;
use crate::readonly::RouterReadOnly;
use crate::registry::{HostScope, InsertOutcome, RouteTable};
use crate::request::RequestSnapshot;
use crate::router::{RouterOptions, RouterResult};
use crate::types::{Handler, HandlerResult, NotFoundHandler, RouteParams, handler, not_found_handler};

pub struct Router {
    options: RouterOptions,
    compiler: PatternCompiler,
    table: RouteTable,
    pub(super) prefix: String,
    pub(super) hosts: HostScope,
    not_found: Option<NotFoundHandler>,
}

impl Router {
    pub fn new(options: Option<RouterOptions>) -> Self {
        let options = options.unwrap_or_default();
        let compiler = PatternCompiler::new(options.type_catalog());
        Self {
            options,
            compiler,
            table: RouteTable::new(),
            prefix: String::new(),
            hosts: HostScope::new(),
            not_found: None,
        }
    }

    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn get<F>(&mut self, template: &str, f: F) -> RouterResult<&mut Self>
    where
        F: Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Get, template, handler(f))
    }

    pub fn post<F>(&mut self, template: &str, f: F) -> RouterResult<&mut Self>
    where
        F: Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Post, template, handler(f))
    }

    pub fn put<F>(&mut self, template: &str, f: F) -> RouterResult<&mut Self>
    where
        F: Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Put, template, handler(f))
    }

    pub fn delete<F>(&mut self, template: &str, f: F) -> RouterResult<&mut Self>
    where
        F: Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(HttpMethod::Delete, template, handler(f))
    }

    pub fn any<F>(&mut self, template: &str, f: F) -> RouterResult<&mut Self>
    where
        F: Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(MethodToken::Any, template, handler(f))
    }

    pub fn respond<M, F>(&mut self, methods: M, template: &str, f: F) -> RouterResult<&mut Self>
    where
        M: IntoMethodTokens,
        F: Fn(&RouteParams, &DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.route(methods, template, handler(f))
    }

    /// Registers an already shared handler; the effective template is the
    /// active prefix followed by `template`.
    #[tracing::instrument(level = "debug", skip(self, methods, template, handler), fields(prefix=%self.prefix, template=%template))]
    pub fn route<M>(&mut self, methods: M, template: &str, handler: Handler) -> RouterResult<&mut Self>
    where
        M: IntoMethodTokens,
    {
        let effective = format!("{}{}", self.prefix, template);
        let pattern = self.compiler.compile(&effective)?;

        for method in methods.into_method_tokens() {
            let outcome = self.table.insert(
                pattern.clone(),
                method.clone(),
                self.hosts.clone(),
                handler.clone(),
            );
            match outcome {
                InsertOutcome::Added => {
                    tracing::debug!(method = %method, pattern = %pattern.as_str(), "route registered");
                }
                InsertOutcome::Replaced => {
                    tracing::debug!(method = %method, pattern = %pattern.as_str(), "route handler replaced");
                }
            }
        }

        Ok(self)
    }

    /// Runs `body` with `prefix` appended to the active prefix, then restores
    /// the previous prefix whatever `body` returns.
    pub fn with_prefix<F>(&mut self, prefix: &str, body: F) -> RouterResult<&mut Self>
    where
        F: FnOnce(&mut Router) -> RouterResult<()>,
    {
        let result = {
            let mut scope = ScopeGuard::enter(self);
            scope.prefix.push_str(prefix);
            tracing::debug!(prefix = %scope.prefix, "prefix scope opened");
            body(&mut *scope)
        };
        result?;
        Ok(self)
    }

    /// Registers the routes of `body` for requests to `host` only.
    ///
    /// With a fixed `host` option the comparison happens now and `body` is
    /// skipped on mismatch. Otherwise the routes carry the host scope and the
    /// comparison happens for every request.
    pub fn with_host<F>(&mut self, host: &str, body: F) -> RouterResult<&mut Self>
    where
        F: FnOnce(&mut Router) -> RouterResult<()>,
    {
        let host = host.trim().to_ascii_lowercase();

        if let Some(fixed) = self.options.host.as_deref() {
            if !fixed.eq_ignore_ascii_case(&host) {
                tracing::debug!(host = %host, fixed = %fixed, "host scope skipped");
                return Ok(self);
            }
            body(&mut *self)?;
            return Ok(self);
        }

        let result = {
            let mut scope = ScopeGuard::enter(self);
            scope.hosts.push(host.into_boxed_str());
            tracing::debug!(hosts = ?scope.hosts, "host scope opened");
            body(&mut *scope)
        };
        result?;
        Ok(self)
    }

    pub fn not_found<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&DispatchContext<'_>) -> HandlerResult + Send + Sync + 'static,
    {
        self.not_found = Some(not_found_handler(f));
        self
    }

    pub fn dispatch(&self, request: &RequestSnapshot) -> RouterResult<DispatchOutcome> {
        Dispatcher::new(&self.table, &self.options, self.not_found.as_ref()).dispatch(request)
    }

    pub fn seal(self) -> RouterReadOnly {
        tracing::debug!(patterns = self.table.len(), "router sealed");
        RouterReadOnly::new(self.table, self.options, self.not_found)
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn compiler(&self) -> &PatternCompiler {
        &self.compiler
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("options", &self.options)
            .field("table", &self.table)
            .field("prefix", &self.prefix)
            .field("hosts", &self.hosts)
            .field("has_not_found", &self.not_found.is_some())
            .finish()
    }
}
