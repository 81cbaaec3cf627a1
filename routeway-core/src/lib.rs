//! # routeway-core
//!
//! Core traits and the dispatch engine for the Routeway content routing
//! framework.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! feature modules that declare routables and routes without needing the
//! builder and test helpers of `routeway-std`.
//!
//! # Overview
//!
//! An application describes its content with [`Routable`] values and
//! performs navigation with [`Route`]s. A [`Router`] (normally [`Routes`])
//! receives a routable, resolves it to a terminal value, and hands it to the
//! first route that accepts it.
//!
//! ## Routables
//!
//! Routables are plain values compared by equality. A routable may *yield*
//! another routable in its place ([`YieldsRoutable`]); the router keeps
//! unwrapping until it reaches a value that does not yield. Values travel
//! through the engine type-erased as [`AnyRoutable`].
//!
//! ## Dispatch
//!
//! [`Routes`] scans its [`Dispatcher`]s from the most recently installed to
//! the oldest. The first one to claim the value wins. Nothing claiming it is
//! a [`RouteMissing`] error.
//!
//! ## External representations
//!
//! A [`DecoderChain`] maps opaque external representations (URLs, payloads)
//! to routables. Decoders are tried in registration order and the first one
//! to produce a routable wins.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod erased;
mod error;
mod representation;
mod resolve;
mod routable;
mod routes;

// Re-exports
pub use dispatcher::{DispatchResult, Dispatcher, Route, RouteFn, route_fn};
pub use erased::{AnyRoutable, short_type_name_of};
pub use error::RouteMissing;
pub use representation::{DecoderChain, FromRepresentation, Represented, RoutableFactory};
pub use resolve::{Resolution, resolve, resolve_terminal};
pub use routable::{Routable, YieldRecipient, YieldsRoutable};
pub use routes::{RouteProvider, Router, RouterDispatcher, Routes};
