//! Logging decorators for routes.
//!
//! Wrap any [`Route`] in a [`LoggingRoute`] to report each invocation to a
//! [`RouteLogger`]:
//!
//! ```rust,ignore
//! use routeway_std::logging::RouteExt;
//!
//! let routes = routes![
//!     EventRoute::default().logging(StdoutRouteLogger::new("[app] ")),
//! ];
//! ```

use routeway_core::{Route, short_type_name_of};
use std::fmt::Debug;

/// Receives notifications around route invocations.
pub trait RouteLogger: Send + Sync + 'static {
    /// Called exactly once per invocation, immediately before the route
    /// runs.
    fn will_invoke(&self, route: &str, parameter: &dyn Debug);

    /// Called exactly once per invocation, immediately after the route
    /// returns.
    fn did_invoke(&self, route: &str, parameter: &dyn Debug);
}

/// A [`Route`] that logs before and after forwarding to the route it wraps.
///
/// Only invocations are logged: a routable the inner route does not accept
/// is passed over without any logger call.
#[derive(Debug, Clone)]
pub struct LoggingRoute<R, L> {
    route: R,
    logger: L,
}

impl<R, L> LoggingRoute<R, L> {
    /// Decorate `route` with `logger`.
    pub fn new(route: R, logger: L) -> Self {
        Self { route, logger }
    }

    /// The decorated route.
    pub fn inner(&self) -> &R {
        &self.route
    }

    /// The logger receiving invocation notifications.
    pub fn logger(&self) -> &L {
        &self.logger
    }
}

impl<R: Route, L: RouteLogger> Route for LoggingRoute<R, L> {
    type Parameter = R::Parameter;

    fn route(&self, parameter: &R::Parameter) {
        let name = short_type_name_of::<R>();
        self.logger.will_invoke(&name, parameter);
        self.route.route(parameter);
        self.logger.did_invoke(&name, parameter);
    }
}

/// Adds logging combinators to every [`Route`].
pub trait RouteExt: Route + Sized {
    /// Log invocations of this route to `logger`.
    fn logging<L: RouteLogger>(self, logger: L) -> LoggingRoute<Self, L> {
        LoggingRoute::new(self, logger)
    }

    /// Log invocations of this route to standard output.
    fn logging_to_stdout(self, prefix: impl Into<String>) -> LoggingRoute<Self, StdoutRouteLogger> {
        self.logging(StdoutRouteLogger::new(prefix))
    }
}

impl<R: Route> RouteExt for R {}

/// A [`RouteLogger`] that prints to standard output.
///
/// Lines look like `{prefix}Will invoke EventRoute(EventRoutable { id: 7 })`.
#[derive(Debug, Clone, Default)]
pub struct StdoutRouteLogger {
    prefix: String,
}

impl StdoutRouteLogger {
    /// Create a logger that starts every line with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn line(&self, verb: &str, route: &str, parameter: &dyn Debug) -> String {
        format!("{}{verb} {route}({parameter:?})", self.prefix)
    }
}

impl RouteLogger for StdoutRouteLogger {
    fn will_invoke(&self, route: &str, parameter: &dyn Debug) {
        println!("{}", self.line("Will invoke", route, parameter));
    }

    fn did_invoke(&self, route: &str, parameter: &dyn Debug) {
        println!("{}", self.line("Did invoke", route, parameter));
    }
}

/// A [`RouteLogger`] that emits `tracing` events.
///
/// Messages read `{route} is routing {parameter}` and
/// `{route} finished routing {parameter}`, at [`tracing::Level::DEBUG`]
/// unless configured otherwise.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy)]
pub struct TracingRouteLogger {
    level: tracing::Level,
}

#[cfg(feature = "tracing")]
impl TracingRouteLogger {
    /// Create a logger emitting events at `level`.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }

    /// The level events are emitted at.
    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

#[cfg(feature = "tracing")]
impl Default for TracingRouteLogger {
    fn default() -> Self {
        Self::new(tracing::Level::DEBUG)
    }
}

// `tracing` macros need a constant level, so branch on it here.
#[cfg(feature = "tracing")]
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {{
        let level = $level;
        if level == tracing::Level::ERROR {
            tracing::error!($($arg)+)
        } else if level == tracing::Level::WARN {
            tracing::warn!($($arg)+)
        } else if level == tracing::Level::INFO {
            tracing::info!($($arg)+)
        } else if level == tracing::Level::DEBUG {
            tracing::debug!($($arg)+)
        } else {
            tracing::trace!($($arg)+)
        }
    }};
}

#[cfg(feature = "tracing")]
impl RouteLogger for TracingRouteLogger {
    fn will_invoke(&self, route: &str, parameter: &dyn Debug) {
        event_at!(self.level, "{route} is routing {parameter:?}");
    }

    fn did_invoke(&self, route: &str, parameter: &dyn Debug) {
        event_at!(self.level, "{route} finished routing {parameter:?}");
    }
}
