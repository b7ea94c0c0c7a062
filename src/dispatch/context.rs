use crate::request::RequestSnapshot;
use crate::router::RouterOptions;

#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    request: &'a RequestSnapshot,
    options: &'a RouterOptions,
    path: &'a str,
    invocation: usize,
}

impl<'a> DispatchContext<'a> {
    pub(crate) fn new(request: &'a RequestSnapshot, options: &'a RouterOptions, path: &'a str) -> Self {
        Self {
            request,
            options,
            path,
            invocation: 0,
        }
    }

    pub(crate) fn at_invocation(mut self, invocation: usize) -> Self {
        self.invocation = invocation;
        self
    }

    pub fn request(&self) -> &'a RequestSnapshot {
        self.request
    }

    pub fn options(&self) -> &'a RouterOptions {
        self.options
    }

    /// The path patterns were matched against, with the URL suffix removed.
    pub fn matched_path(&self) -> &'a str {
        self.path
    }

    pub fn invocation(&self) -> usize {
        self.invocation
    }

    pub fn is_first_invocation(&self) -> bool {
        self.invocation == 0
    }
}
