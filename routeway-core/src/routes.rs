//! # Dispatch Table (Routes) and Router
//!
//! [`Routes`] is an ordered, append-only table of dispatchers and the
//! standard [`Router`] implementation.
//!
//! # Ordering
//!
//! Routing scans the table in **reverse** installation order: the most
//! recently installed dispatcher is asked first, and the first one to claim
//! the value wins. A narrower route installed later therefore supersedes a
//! broader one installed earlier, without removing it.
//!
//! # Nesting
//!
//! Installing a [`RouteProvider`] (including another `Routes`) flattens its
//! dispatchers into the table at that position, preserving their relative
//! order. A subdomain table installed after a top-level route for the same
//! type overrides that route:
//!
//! ```rust,ignore
//! let mut routes = Routes::new();
//! routes.install(EventRoute::default());
//!
//! let mut news = Routes::new();
//! news.install(NewsArticleRoute::default());
//! news.install(PanelEventRoute::default());
//! routes.install(news);
//!
//! routes.route(EventRoutable { id: 7 })?; // handled by PanelEventRoute
//! ```
//!
//! # Lifecycle
//!
//! Install everything first, then route. Installation takes `&mut self` and
//! routing takes `&self`, so the two phases cannot overlap on one table.

use crate::dispatcher::{DispatchResult, Dispatcher, Route};
use crate::erased::AnyRoutable;
use crate::error::RouteMissing;
use crate::resolve::{Resolution, resolve_terminal};
use crate::routable::Routable;
use std::fmt;
use std::sync::Arc;

/// A type used to dispatch routables to an aggregate of routes.
pub trait Router: Send + Sync {
    /// Submits an erased routable to the routes of this router.
    ///
    /// The routable is first resolved to its terminal value, then offered to
    /// the routes. Fails with [`RouteMissing`] when nothing claims it.
    fn route_erased(&self, routable: AnyRoutable) -> Result<(), RouteMissing>;

    /// Submits `routable` to the routes of this router.
    fn route<R: Routable>(&self, routable: R) -> Result<(), RouteMissing>
    where
        Self: Sized,
    {
        self.route_erased(AnyRoutable::new(routable))
    }
}

impl dyn Router + '_ {
    /// Submits `routable` to the routes of this router.
    pub fn route<R: Routable>(&self, routable: R) -> Result<(), RouteMissing> {
        self.route_erased(AnyRoutable::new(routable))
    }
}

impl<T: Router + ?Sized> Router for Arc<T> {
    fn route_erased(&self, routable: AnyRoutable) -> Result<(), RouteMissing> {
        (**self).route_erased(routable)
    }
}

/// A type that supplies one or more dispatchers to a [`Routes`] table.
///
/// Every [`Route`] provides itself as a table of one, and `Routes` provides
/// itself, so single routes and whole subdomains can be installed the same
/// way.
pub trait RouteProvider {
    /// Converts this provider into the table of dispatchers it supplies.
    fn into_routes(self) -> Routes;
}

impl<T: Route> RouteProvider for T {
    fn into_routes(self) -> Routes {
        let mut routes = Routes::new();
        routes.install_dispatcher(self);
        routes
    }
}

impl RouteProvider for Routes {
    fn into_routes(self) -> Routes {
        self
    }
}

/// A shared table is installed as a single dispatcher, so routers holding
/// onto it keep seeing the same table.
impl RouteProvider for Arc<Routes> {
    fn into_routes(self) -> Routes {
        let mut routes = Routes::new();
        routes.install_shared(self);
        routes
    }
}

/// An ordered collection of dispatchers.
#[derive(Clone, Default)]
pub struct Routes {
    dispatchers: Vec<Arc<dyn Dispatcher>>,
}

impl Routes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the dispatchers supplied by `provider`, in their order.
    pub fn install<P: RouteProvider>(&mut self, provider: P) -> &mut Self {
        let routes = provider.into_routes();
        self.dispatchers.extend(routes.dispatchers);
        self
    }

    /// Appends a single dispatcher.
    pub fn install_dispatcher<D: Dispatcher>(&mut self, dispatcher: D) -> &mut Self {
        self.dispatchers.push(Arc::new(dispatcher));
        self
    }

    /// Appends a dispatcher that is shared with other owners.
    pub fn install_shared(&mut self, dispatcher: Arc<dyn Dispatcher>) -> &mut Self {
        self.dispatchers.push(dispatcher);
        self
    }

    /// Number of installed dispatchers.
    pub fn len(&self) -> usize {
        self.dispatchers.len()
    }

    /// Whether no dispatcher is installed.
    pub fn is_empty(&self) -> bool {
        self.dispatchers.is_empty()
    }

    /// Offers an already-terminal value to the table, last installed first.
    fn dispatch_terminal(&self, terminal: &AnyRoutable) -> DispatchResult {
        let claimed = self
            .dispatchers
            .iter()
            .rev()
            .any(|dispatcher| dispatcher.dispatch(terminal).is_dispatched());

        if claimed {
            DispatchResult::Dispatched
        } else {
            DispatchResult::NotDispatched
        }
    }
}

impl fmt::Debug for Routes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Routes")
            .field("dispatchers", &self.dispatchers.len())
            .finish()
    }
}

impl Router for Routes {
    fn route_erased(&self, routable: AnyRoutable) -> Result<(), RouteMissing> {
        let terminal = match resolve_terminal(routable) {
            Resolution::Terminal(terminal) => terminal,
            Resolution::Unresolved(deepest) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(routable = ?deepest, "routable yielded nothing to route");
                return Err(RouteMissing::NothingYielded(deepest));
            }
        };

        match self.dispatch_terminal(&terminal) {
            DispatchResult::Dispatched => {
                #[cfg(feature = "tracing")]
                tracing::trace!(routable = ?terminal, "routable dispatched");
                Ok(())
            }
            DispatchResult::NotDispatched => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    routable = ?terminal,
                    dispatchers = self.dispatchers.len(),
                    "no route configured for routable"
                );
                Err(RouteMissing::NoRoute(terminal))
            }
        }
    }
}

impl Dispatcher for Routes {
    fn dispatch(&self, routable: &AnyRoutable) -> DispatchResult {
        to_dispatch_result(self.route_erased(routable.clone()))
    }
}

/// Adapts any [`Router`] into a [`Dispatcher`].
///
/// A [`RouteMissing`] from the inner router becomes
/// [`DispatchResult::NotDispatched`].
#[derive(Debug, Clone)]
pub struct RouterDispatcher<R> {
    router: R,
}

impl<R> RouterDispatcher<R> {
    /// Wrap a router.
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Borrow the wrapped router.
    pub fn inner(&self) -> &R {
        &self.router
    }

    /// Unwrap the router.
    pub fn into_inner(self) -> R {
        self.router
    }
}

impl<R: Router + 'static> Dispatcher for RouterDispatcher<R> {
    fn dispatch(&self, routable: &AnyRoutable) -> DispatchResult {
        to_dispatch_result(self.router.route_erased(routable.clone()))
    }
}

fn to_dispatch_result(outcome: Result<(), RouteMissing>) -> DispatchResult {
    match outcome {
        Ok(()) => DispatchResult::Dispatched,
        Err(_missing) => DispatchResult::NotDispatched,
    }
}
