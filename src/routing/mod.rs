//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → path.rs (derive the suffix after the resource extension)
//!     → suffix.rs (match against the configured form suffix,
//!                  extract the form selector)
//!     → Return: selector token or explicit no-match
//! ```
//!
//! # Design Decisions
//! - Router compiled from config at startup, immutable at runtime
//! - Pure string matching, no regex
//! - Deterministic: the same suffix always yields the same decision

pub mod path;
pub mod suffix;

pub use suffix::FormsRouter;
