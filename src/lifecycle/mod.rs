//! Lifecycle management.
//!
//! Startup order: config, logging, listener, watcher, server.
//! Shutdown order: signal received, stop accepting, drain in-flight
//! requests, exit.

pub mod shutdown;

pub use shutdown::Shutdown;
