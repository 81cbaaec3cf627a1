//! # routeway-std
//!
//! Standard implementations for the Routeway content routing framework.
//!
//! This crate provides:
//! - **Declarative tables**: [`RoutesBuilder`](builder::RoutesBuilder), [`routes!`], scoped sub-routers
//! - **Logging**: [`LoggingRoute`](logging::LoggingRoute) with stdout and `tracing` loggers
//! - **Testing**: capturing recipients, a fake router and recording routes

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use routeway_core;

// Modules
pub mod builder;
pub mod logging;
pub mod testing;
