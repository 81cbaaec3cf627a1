#![allow(dead_code)]

use routeway::{Routable, Route, YieldRecipient, YieldsRoutable};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Routables
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EventRoutable {
    pub id: u64,
}

impl Routable for EventRoutable {}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticleRoutable {
    pub id: u64,
}

impl Routable for NewsArticleRoutable {}

/// Yields the routable it wraps.
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapper<C> {
    pub inner: C,
}

impl<C: Routable + Clone> Routable for Wrapper<C> {
    fn as_yielding(&self) -> Option<&dyn YieldsRoutable> {
        Some(self)
    }
}

impl<C: Routable + Clone> YieldsRoutable for Wrapper<C> {
    fn yield_to(&self, recipient: &mut dyn YieldRecipient) {
        recipient.yield_value(self.inner.clone());
    }
}

pub fn wrap<C>(inner: C) -> Wrapper<C> {
    Wrapper { inner }
}

// ============================================================================
// Test Routes
// ============================================================================

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Records `"<name>:<parameter debug>"` for every invocation.
pub struct NamedRoute<P> {
    pub name: &'static str,
    pub log: Log,
    _parameter: std::marker::PhantomData<fn(&P)>,
}

impl<P> NamedRoute<P> {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            _parameter: std::marker::PhantomData,
        }
    }
}

impl<P: Routable> Route for NamedRoute<P> {
    type Parameter = P;

    fn route(&self, parameter: &P) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{parameter:?}", self.name));
    }
}
