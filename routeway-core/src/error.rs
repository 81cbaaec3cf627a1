//! Error types for Routeway.
//!
//! Routing has exactly one caller-visible failure: [`RouteMissing`]. Local
//! negative results (a decoder declining, a dispatcher passing) are not
//! errors and never escalate on their own.

use crate::erased::AnyRoutable;
use crate::routable::Routable;
use thiserror::Error;

/// An error that occurs when no route is registered for a routable.
///
/// This is usually a configuration mistake: a routable type is being routed
/// that no installed route accepts.
#[derive(Error, Debug, Clone)]
pub enum RouteMissing {
    /// No dispatcher claimed the fully resolved terminal value.
    #[error("No route configured for content represented by {}", .0.short_type_name())]
    NoRoute(AnyRoutable),

    /// A yielding routable produced no successor, so resolution stopped
    /// before reaching a terminal value.
    #[error("{} did not yield any content to route", .0.short_type_name())]
    NothingYielded(AnyRoutable),
}

impl RouteMissing {
    /// Create a `NoRoute` error for the given content.
    pub fn new<R: Routable>(content: R) -> Self {
        RouteMissing::NoRoute(AnyRoutable::new(content))
    }

    /// The erased routable that could not be routed.
    ///
    /// For [`RouteMissing::NoRoute`] this is the terminal value that was
    /// offered to the dispatch table; for [`RouteMissing::NothingYielded`] it
    /// is the deepest routable resolution reached.
    pub fn routable(&self) -> &AnyRoutable {
        match self {
            RouteMissing::NoRoute(routable) | RouteMissing::NothingYielded(routable) => routable,
        }
    }

    /// Consume the error, returning the erased routable.
    pub fn into_routable(self) -> AnyRoutable {
        match self {
            RouteMissing::NoRoute(routable) | RouteMissing::NothingYielded(routable) => routable,
        }
    }
}
