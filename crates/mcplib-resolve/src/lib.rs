//! Value resolution engine for mcplib.
//!
//! Resolves the declarative [`ValueSource`](mcplib_core::ValueSource) model
//! against injected lookup collaborators: a literal resolves to itself,
//! references dispatch to the config map, secret, service discovery, or
//! request query parameter port. Header lists and whole server specs
//! resolve on top of that, fail-fast and order-preserving.
//!
//! The engine performs no I/O of its own and holds no mutable state; all
//! external access goes through the port traits in `mcplib-core`.

#![deny(unsafe_code)]

mod address;
mod error;
pub mod memory;
mod resolver;

pub use address::service_address;
pub use error::{HeaderResolveError, ResolveError, ServerResolveError};
pub use resolver::{ResolvedHeader, ResolvedServer, ValueResolver};
