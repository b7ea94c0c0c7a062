use smallvec::SmallVec;
use std::fmt;

use crate::enums::MethodToken;
use crate::types::Handler;

/// Lower-cased host names a binding is restricted to; empty means any host.
pub type HostScope = SmallVec<[Box<str>; 1]>;

#[derive(Clone)]
pub struct RouteBinding {
    pub(crate) method: MethodToken,
    pub(crate) hosts: HostScope,
    pub(crate) handler: Handler,
    pub(crate) seq: u64,
}

impl RouteBinding {
    pub fn new(method: MethodToken, hosts: HostScope, handler: Handler, seq: u64) -> Self {
        Self {
            method,
            hosts,
            handler,
            seq,
        }
    }

    pub fn method(&self) -> &MethodToken {
        &self.method
    }

    pub fn hosts(&self) -> &[Box<str>] {
        &self.hosts
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[inline]
    pub(crate) fn same_slot(&self, method: &MethodToken, hosts: &HostScope) -> bool {
        self.method == *method && self.hosts == *hosts
    }

    #[inline]
    pub fn accepts(&self, method: &str, host: &str) -> bool {
        self.method.accepts(method) && self.hosts.iter().all(|h| h.as_ref() == host)
    }
}

impl fmt::Debug for RouteBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteBinding")
            .field("method", &self.method)
            .field("hosts", &self.hosts)
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}
