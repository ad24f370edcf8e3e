//! Dynamic client-library aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! Configured categories (or built-in defaults)
//!     → manager.rs (resolve categories to library handles, set-based)
//!     → library.rs (include path per asset kind and minification)
//!     → aggregator.rs (dedup, context-path rewrite, group by kind)
//!     → Return: {"js": [...], "css": [...]}
//! ```
//!
//! # Design Decisions
//! - Resolution is a trait seam so the HTTP boundary and tests can
//!   substitute library backends
//! - Aggregation is stateless; every call re-resolves

pub mod aggregator;
pub mod library;
pub mod manager;

pub use aggregator::{LibraryAggregator, LibraryIncludes, DEFAULT_CATEGORIES};
pub use library::{AssetKind, LibraryHandle};
pub use manager::{LibraryError, LibraryManager, StaticLibraryManager};
