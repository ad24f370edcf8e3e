//! Observability subsystem.
//!
//! Structured logging via `tracing`; the filter is seeded from
//! configuration and overridable with `RUST_LOG`.

pub mod logging;
