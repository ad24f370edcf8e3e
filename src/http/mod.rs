//! HTTP boundary.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, request id, trace, timeout)
//!     → GET <clientlibs path>  → library aggregation → JSON listing
//!     → POST with form suffix  → suffix router → selector decision
//!     → anything else          → 404
//! ```

pub mod request;
pub mod server;

pub use server::HttpServer;
