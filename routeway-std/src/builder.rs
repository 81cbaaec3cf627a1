//! Declarative construction of route tables.
//!
//! [`RoutesBuilder`] assembles a [`Routes`] table from route providers,
//! with conditional inclusion and subdomains that get a router of their own.
//!
//! # Example
//!
//! ```rust,ignore
//! let routes = RoutesBuilder::new()
//!     .route(EventRoute::new(presenter.clone()))
//!     .when(config.news_enabled, |builder| {
//!         builder.subdomain(|news_router, news| {
//!             news.route(NewsArticleRoute::new(news_router))
//!                 .route(NewsEventRoute::new(presenter))
//!         })
//!     })
//!     .build();
//! ```

use routeway_core::{AnyRoutable, Dispatcher, RouteMissing, RouteProvider, Router, Routes};
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

/// Builder for [`Routes`].
///
/// Providers are installed in the order they are added, so a later route
/// for the same type takes precedence over an earlier one.
#[derive(Debug, Default)]
pub struct RoutesBuilder {
    routes: Routes,
}

impl RoutesBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a route, or every dispatcher of a route provider.
    pub fn route<P: RouteProvider>(mut self, provider: P) -> Self {
        self.routes.install(provider);
        self
    }

    /// Install a raw dispatcher.
    pub fn dispatcher<D: Dispatcher>(mut self, dispatcher: D) -> Self {
        self.routes.install_dispatcher(dispatcher);
        self
    }

    /// Apply `then` only when `condition` holds.
    pub fn when(self, condition: bool, then: impl FnOnce(Self) -> Self) -> Self {
        if condition { then(self) } else { self }
    }

    /// Apply exactly one of two branches.
    pub fn either(
        self,
        condition: bool,
        first: impl FnOnce(Self) -> Self,
        second: impl FnOnce(Self) -> Self,
    ) -> Self {
        if condition { first(self) } else { second(self) }
    }

    /// Install a subdomain.
    ///
    /// `build` receives a [`SubRouter`] that routes into the subdomain's own
    /// table, plus an empty builder for that table. The finished subdomain
    /// is installed at this position as a single dispatcher.
    pub fn subdomain(
        mut self,
        build: impl FnOnce(SubRouter, RoutesBuilder) -> RoutesBuilder,
    ) -> Self {
        let sub_router = SubRouter::unbound();
        let routes = Arc::new(build(sub_router.clone(), RoutesBuilder::new()).build());
        sub_router.bind(&routes);

        #[cfg(feature = "tracing")]
        tracing::trace!(dispatchers = routes.len(), "installed subdomain");

        self.routes.install(routes);
        self
    }

    /// Finish building.
    pub fn build(self) -> Routes {
        self.routes
    }
}

impl RouteProvider for RoutesBuilder {
    fn into_routes(self) -> Routes {
        self.build()
    }
}

/// Builds a standalone table whose routes may route back into it.
///
/// The returned table must be kept alive for the [`SubRouter`] to work;
/// install it elsewhere by passing the `Arc` to [`Routes::install`].
///
/// ```rust,ignore
/// let news = scoped(|router| routes![NewsArticleRoute::new(router)]);
/// news.route(NewsArticleRoutable { id: 1 })?;
/// ```
pub fn scoped(build: impl FnOnce(SubRouter) -> Routes) -> Arc<Routes> {
    let sub_router = SubRouter::unbound();
    let routes = Arc::new(build(sub_router.clone()));
    sub_router.bind(&routes);
    routes
}

/// A router handed to the routes of a subdomain, routing into that
/// subdomain's table.
///
/// Holds the table weakly. Routing through a `SubRouter` whose table has not
/// been built yet, or has been dropped, fails with
/// [`RouteMissing::NoRoute`].
#[derive(Clone, Default)]
pub struct SubRouter {
    target: Arc<OnceLock<Weak<Routes>>>,
}

impl SubRouter {
    fn unbound() -> Self {
        Self::default()
    }

    fn bind(&self, routes: &Arc<Routes>) {
        if self.target.set(Arc::downgrade(routes)).is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!("subrouter was already bound");
        }
    }

    /// Whether the subdomain table exists and is still alive.
    pub fn is_bound(&self) -> bool {
        self.target
            .get()
            .is_some_and(|routes| routes.strong_count() > 0)
    }
}

impl Router for SubRouter {
    fn route_erased(&self, routable: AnyRoutable) -> Result<(), RouteMissing> {
        match self.target.get().and_then(Weak::upgrade) {
            Some(routes) => routes.route_erased(routable),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(routable = ?routable, "subrouter has no table to route into");
                Err(RouteMissing::NoRoute(routable))
            }
        }
    }
}

impl fmt::Debug for SubRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubRouter")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Builds a [`Routes`] table from a list of route providers, installed in
/// the order given.
///
/// # Example
///
/// ```rust,ignore
/// let routes = routes![
///     EventRoute::default(),
///     NewsArticleRoute::default(),
/// ];
/// ```
#[macro_export]
macro_rules! routes {
    () => {
        $crate::routeway_core::Routes::new()
    };
    ($($provider:expr),+ $(,)?) => {{
        let mut routes = $crate::routeway_core::Routes::new();
        $( routes.install($provider); )+
        routes
    }};
}
