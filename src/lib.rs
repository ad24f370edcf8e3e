//! Content gateway extension services.
//!
//! Two independent, stateless decision components behind one HTTP surface:
//! suffix-based routing of form submissions, and dynamic aggregation of
//! client-side asset libraries into a combined JSON listing.

pub mod clientlibs;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use clientlibs::{LibraryAggregator, LibraryIncludes, LibraryManager};
pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::FormsRouter;
