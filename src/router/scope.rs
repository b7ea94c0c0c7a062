use std::ops::{Deref, DerefMut};

use super::Router;

/// Restores the router's prefix and host scope when dropped, so a scope
/// closes even if its body returns early or unwinds.
pub(crate) struct ScopeGuard<'a> {
    router: &'a mut Router,
    prefix_len: usize,
    hosts_len: usize,
}

impl<'a> ScopeGuard<'a> {
    pub(crate) fn enter(router: &'a mut Router) -> Self {
        let prefix_len = router.prefix.len();
        let hosts_len = router.hosts.len();
        Self {
            router,
            prefix_len,
            hosts_len,
        }
    }
}

impl Deref for ScopeGuard<'_> {
    type Target = Router;

    fn deref(&self) -> &Router {
        &*self.router
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Router {
        &mut *self.router
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.router.prefix.truncate(self.prefix_len);
        self.router.hosts.truncate(self.hosts_len);
        tracing::debug!(prefix = %self.router.prefix, "scope closed");
    }
}
