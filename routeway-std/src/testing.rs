//! Testing utilities for Routeway.
//!
//! # Features
//!
//! - [`CapturingRecipient`]: A yield recipient that keeps the last routable it receives
//! - [`FakeRouter`]: A router that records what it is asked to route
//! - [`RecordingRoute`]: A route that records every parameter it is invoked with
//! - [`assert_yields`] / [`assert_no_yield`]: Assertions on what a routable describes

use routeway_core::{
    AnyRoutable, RouteMissing, Route, Routable, Router, YieldRecipient, YieldsRoutable,
    short_type_name_of,
};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Capturing Recipient
// ============================================================================

/// A [`YieldRecipient`] that remembers the last routable it received.
#[derive(Debug, Default)]
pub struct CapturingRecipient {
    received: Option<AnyRoutable>,
}

impl CapturingRecipient {
    /// Create an empty recipient.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last routable received, if any.
    pub fn received(&self) -> Option<&AnyRoutable> {
        self.received.as_ref()
    }

    /// Take the last routable received, leaving the recipient empty.
    pub fn take(&mut self) -> Option<AnyRoutable> {
        self.received.take()
    }
}

impl YieldRecipient for CapturingRecipient {
    fn receive(&mut self, routable: AnyRoutable) {
        self.received = Some(routable);
    }
}

// ============================================================================
// Yield assertions
// ============================================================================

/// Asserts that `content` recursively yields a value equal to `expected`.
///
/// # Example
///
/// ```rust,ignore
/// assert_yields(EventLink::new("/events/42"), EventRoutable { id: 42 });
/// ```
#[track_caller]
pub fn assert_yields<T: Routable, U: Routable>(content: T, expected: U) {
    let mut recipient = CapturingRecipient::new();
    content.recursively_yield(&mut recipient);
    let expected = AnyRoutable::new(expected);

    assert_eq!(
        recipient.received(),
        Some(&expected),
        "expected content to be described as {expected:?}"
    );
}

/// Asserts that `content` yields nothing.
#[track_caller]
pub fn assert_no_yield<T: YieldsRoutable + ?Sized>(content: &T) {
    let mut recipient = CapturingRecipient::new();
    content.yield_to(&mut recipient);

    if let Some(received) = recipient.received() {
        panic!("expected no description, but content yielded {received:?}");
    }
}

// ============================================================================
// Fake Router
// ============================================================================

/// Returned by [`FakeRouter::unwrap_routed`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnwrapRoutedError {
    /// Nothing has been routed yet.
    #[error("nothing was routed")]
    NothingRouted,

    /// Something else was routed.
    #[error("expected {expected} to be routed, but {actual:?} was routed")]
    UnexpectedContent {
        /// The type that was asked for.
        expected: String,
        /// What was actually routed.
        actual: AnyRoutable,
    },
}

/// A [`Router`] for testing routes that route onwards.
///
/// Every call succeeds and replaces the remembered routable. Clones share the
/// same record.
///
/// # Example
///
/// ```rust,ignore
/// let router = FakeRouter::new();
/// let route = NewsArticleRoute::new(router.clone());
///
/// route.route(&NewsArticleRoutable { id: 3 });
///
/// router.assert_routed(EventRoutable { id: 3 });
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeRouter {
    routed: Arc<Mutex<Option<AnyRoutable>>>,
}

impl FakeRouter {
    /// Create a router that has not routed anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last routable submitted, as given (it is not resolved).
    pub fn routed(&self) -> Option<AnyRoutable> {
        lock(&self.routed).clone()
    }

    /// Assert that the last routable submitted equals `expected`.
    #[track_caller]
    pub fn assert_routed<R: Routable>(&self, expected: R) {
        let expected = AnyRoutable::new(expected);

        assert_eq!(self.routed(), Some(expected), "unexpected routed content");
    }

    /// Assert that the last routable submitted is not `unexpected`.
    #[track_caller]
    pub fn assert_did_not_route<R: Routable>(&self, unexpected: R) {
        let unexpected = AnyRoutable::new(unexpected);

        assert_ne!(self.routed(), Some(unexpected), "content was routed");
    }

    /// Recover the last routable submitted as its concrete type.
    pub fn unwrap_routed<T: Routable + Clone>(&self) -> Result<T, UnwrapRoutedError> {
        let routed = self.routed().ok_or(UnwrapRoutedError::NothingRouted)?;

        routed
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| UnwrapRoutedError::UnexpectedContent {
                expected: short_type_name_of::<T>(),
                actual: routed.clone(),
            })
    }

    /// Forget the last routable submitted.
    pub fn reset(&self) {
        *lock(&self.routed) = None;
    }
}

impl Router for FakeRouter {
    fn route_erased(&self, routable: AnyRoutable) -> Result<(), RouteMissing> {
        *lock(&self.routed) = Some(routable);
        Ok(())
    }
}

// ============================================================================
// Recording Route
// ============================================================================

/// A route that records every parameter it is invoked with.
///
/// Clones share the same record, so a clone can be installed while the
/// original is kept for inspection.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingRoute::<EventRoutable>::new();
/// routes.install(recorder.clone());
///
/// routes.route(EventRoutable { id: 1 })?;
///
/// assert_eq!(recorder.received(), vec![EventRoutable { id: 1 }]);
/// ```
pub struct RecordingRoute<P> {
    received: Arc<Mutex<Vec<P>>>,
    _parameter: PhantomData<fn(&P)>,
}

impl<P: Clone> RecordingRoute<P> {
    /// Create a route that has not been invoked.
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            _parameter: PhantomData,
        }
    }

    /// Every parameter received, in order.
    pub fn received(&self) -> Vec<P> {
        lock(&self.received).clone()
    }

    /// The most recent parameter received.
    pub fn last(&self) -> Option<P> {
        lock(&self.received).last().cloned()
    }

    /// Number of invocations.
    pub fn count(&self) -> usize {
        lock(&self.received).len()
    }

    /// Clear the record.
    pub fn clear(&self) {
        lock(&self.received).clear();
    }
}

impl<P: Clone> Default for RecordingRoute<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for RecordingRoute<P> {
    fn clone(&self) -> Self {
        Self {
            received: self.received.clone(),
            _parameter: PhantomData,
        }
    }
}

impl<P: Routable + Clone> Route for RecordingRoute<P> {
    type Parameter = P;

    fn route(&self, parameter: &P) {
        lock(&self.received).push(parameter.clone());
    }
}
