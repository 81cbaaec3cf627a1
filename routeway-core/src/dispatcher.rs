//! # Dispatchers and Routes
//!
//! A [`Dispatcher`] is offered a terminal routable and either claims it
//! (performing its behaviour) or passes. Dispatchers never fail: a value
//! nobody claims is reported by the router, not by the dispatchers.
//!
//! A [`Route`] is the typed form of a dispatcher. It names the routable type
//! it accepts and receives values of exactly that type; every `Route` is a
//! `Dispatcher` through a blanket implementation.
//!
//! Routes should remain stateless and not remember previous invocations.
//! State relevant to the content being routed belongs to the application
//! the route drives.

use crate::erased::AnyRoutable;
use crate::routable::Routable;
use std::fmt;
use std::marker::PhantomData;

/// The result of offering a routable to a [`Dispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The routable was handled.
    Dispatched,
    /// The routable was not handled.
    NotDispatched,
}

impl DispatchResult {
    /// Whether the routable was handled.
    pub const fn is_dispatched(self) -> bool {
        matches!(self, DispatchResult::Dispatched)
    }
}

/// A type capable of dispatching a terminal routable.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch routables",
    label = "missing `Dispatcher` implementation",
    note = "Implement `Route` for a typed route, or `Dispatcher` to inspect erased routables."
)]
pub trait Dispatcher: Send + Sync + 'static {
    /// Offers `routable` to this dispatcher.
    ///
    /// Any visible side effect happens at most once, and only when returning
    /// [`DispatchResult::Dispatched`].
    fn dispatch(&self, routable: &AnyRoutable) -> DispatchResult;
}

/// A type that invokes behaviour in response to receiving a routable.
///
/// ```rust,ignore
/// struct EventRoute { presenter: Presenter }
///
/// impl Route for EventRoute {
///     type Parameter = EventRoutable;
///
///     fn route(&self, event: &EventRoutable) {
///         self.presenter.show_event(event.id);
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Route`",
    label = "missing `Route` implementation",
    note = "Routes must name their `Parameter` type and implement `route`."
)]
pub trait Route: Send + Sync + 'static {
    /// The routable type this route handles.
    type Parameter: Routable;

    /// Invokes the behaviour of this route for `parameter`.
    fn route(&self, parameter: &Self::Parameter);
}

impl<T: Route> Dispatcher for T {
    fn dispatch(&self, routable: &AnyRoutable) -> DispatchResult {
        match routable.downcast_ref::<T::Parameter>() {
            Some(parameter) => {
                self.route(parameter);
                DispatchResult::Dispatched
            }
            None => DispatchResult::NotDispatched,
        }
    }
}

/// A [`Route`] backed by a closure. Created by [`route_fn`].
pub struct RouteFn<P, F> {
    f: F,
    _parameter: PhantomData<fn(&P)>,
}

/// Builds a route from a closure over the parameter type.
///
/// ```rust,ignore
/// let route = route_fn(|event: &EventRoutable| println!("showing {}", event.id));
/// ```
pub fn route_fn<P, F>(f: F) -> RouteFn<P, F>
where
    P: Routable,
    F: Fn(&P) + Send + Sync + 'static,
{
    RouteFn {
        f,
        _parameter: PhantomData,
    }
}

impl<P, F> Route for RouteFn<P, F>
where
    P: Routable,
    F: Fn(&P) + Send + Sync + 'static,
{
    type Parameter = P;

    fn route(&self, parameter: &P) {
        (self.f)(parameter)
    }
}

impl<P, F> fmt::Debug for RouteFn<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteFn")
            .field("parameter", &std::any::type_name::<P>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct WellKnownContent;

    impl Routable for WellKnownContent {}

    #[derive(Debug, Clone, PartialEq)]
    struct SomeOtherWellKnownContent;

    impl Routable for SomeOtherWellKnownContent {}

    #[derive(Default)]
    struct WellKnownContentRoute {
        routed: Mutex<Option<WellKnownContent>>,
    }

    impl Route for WellKnownContentRoute {
        type Parameter = WellKnownContent;

        fn route(&self, parameter: &WellKnownContent) {
            *self.routed.lock().unwrap() = Some(parameter.clone());
        }
    }

    #[test]
    fn test_same_type_as_parameter_invokes_route() {
        let route = WellKnownContentRoute::default();
        let result = route.dispatch(&AnyRoutable::new(WellKnownContent));

        assert_eq!(result, DispatchResult::Dispatched);
        assert_eq!(*route.routed.lock().unwrap(), Some(WellKnownContent));
    }

    #[test]
    fn test_different_type_does_not_invoke_route() {
        let route = WellKnownContentRoute::default();
        let result = route.dispatch(&AnyRoutable::new(SomeOtherWellKnownContent));

        assert_eq!(result, DispatchResult::NotDispatched);
        assert!(route.routed.lock().unwrap().is_none());
    }

    #[test]
    fn test_route_fn() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let route = route_fn(move |value: &u32| sink.lock().unwrap().push(*value));

        assert!(route.dispatch(&AnyRoutable::new(7_u32)).is_dispatched());
        assert!(!route.dispatch(&AnyRoutable::new(7_i32)).is_dispatched());
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }
}
