//! # routeway - Content Routing
//!
//! `routeway` decouples *what* an application should show from *how* it gets
//! there. Content is identified by plain [`Routable`] values; [`Route`]s know
//! how to present one routable type; a [`Routes`] table picks the route for
//! whatever is routed to it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routeway::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq, Routable)]
//! struct EventRoutable { id: u64 }
//!
//! #[route]
//! fn show_event(event: &EventRoutable) {
//!     println!("showing event {}", event.id);
//! }
//!
//! let routes = routes![show_event];
//! routes.route(EventRoutable { id: 7 })?;
//! ```
//!
//! ## Precedence
//!
//! The table is scanned from the most recently installed route backwards,
//! so later (usually narrower) routes win. Decoder chains for external
//! representations are the opposite: the first registered decoder that
//! produces a routable wins.
//!
//! ## Features
//!
//! - `macros` (default): `#[derive(Routable)]` and `#[route]`
//! - `tracing` (default): diagnostics through `tracing` and
//!   [`TracingRouteLogger`](logging::TracingRouteLogger)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use routeway_core::{
    // Values
    AnyRoutable,
    // External representations
    DecoderChain,
    // Dispatch
    DispatchResult,
    Dispatcher,
    FromRepresentation,
    Represented,
    Resolution,
    Routable,
    RoutableFactory,
    Route,
    RouteFn,
    // Errors
    RouteMissing,
    RouteProvider,
    Router,
    RouterDispatcher,
    Routes,
    YieldRecipient,
    YieldsRoutable,
    resolve,
    resolve_terminal,
    route_fn,
    short_type_name_of,
};

// Declarative tables
pub use routeway_std::{
    builder::{RoutesBuilder, SubRouter, scoped},
    routes,
};

/// Logging decorators for routes.
pub mod logging {
    #![allow(clippy::wildcard_imports)]
    pub use routeway_std::logging::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use routeway_std::testing::*;
}

/// Prelude module - common imports for Routeway.
///
/// # Usage
///
/// ```rust,ignore
/// use routeway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::logging::RouteExt;
    pub use crate::{
        AnyRoutable, DecoderChain, FromRepresentation, Routable, RoutableFactory, Route,
        RouteMissing, RouteProvider, Router, Routes, RoutesBuilder, YieldRecipient,
        YieldsRoutable, route_fn, routes,
    };

    #[cfg(feature = "macros")]
    pub use crate::route;
}

#[cfg(feature = "macros")]
pub use routeway_macros::{Routable, route};
