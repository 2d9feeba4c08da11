//! Resolution error types.
//!
//! Two failure families, kept apart on purpose: configuration errors (the
//! declared source is unusable, never retried) and reference-not-found
//! errors (a required external reference missed; upstream decides whether
//! to retry). An optional-reference miss is not an error at all - it
//! resolves to `None`.

use mcplib_core::{LookupError, ReferenceKind};
use thiserror::Error;

/// Failure to resolve a single [`ValueSource`](mcplib_core::ValueSource).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Neither a literal nor a reference was declared.
    #[error("no value source specified")]
    NoValueSource,

    /// A required reference could not be resolved.
    #[error("{kind} reference '{reference}' not found")]
    ReferenceNotFound {
        /// Which reference kind missed.
        kind: ReferenceKind,
        /// Human-readable reference identity (`name/key` or `namespace/name`).
        reference: String,
    },

    /// A lookup collaborator failed outright.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ResolveError {
    /// A required keyed reference (config map or secret entry) missed.
    pub fn missing_key(kind: ReferenceKind, name: &str, key: &str) -> Self {
        Self::ReferenceNotFound {
            kind,
            reference: format!("{name}/{key}"),
        }
    }

    /// A referenced service is unknown to discovery.
    pub fn missing_service(namespace: &str, name: &str) -> Self {
        Self::ReferenceNotFound {
            kind: ReferenceKind::Service,
            reference: format!("{namespace}/{name}"),
        }
    }
}

/// Failure to resolve an ordered header list.
///
/// Carries the name of the first header that failed (resolution is
/// fail-fast in input order).
#[derive(Debug, Error)]
#[error("failed to resolve header '{header}': {source}")]
pub struct HeaderResolveError {
    /// Name of the failing header.
    pub header: String,
    /// The underlying resolution failure.
    #[source]
    pub source: ResolveError,
}

/// Failure to resolve a full server connection (address plus headers).
#[derive(Debug, Error)]
pub enum ServerResolveError {
    /// The server address failed to resolve.
    #[error("failed to resolve server address: {0}")]
    Address(#[source] ResolveError),

    /// The server address resolved to absence - a server needs an address.
    #[error("server address resolved to no value")]
    AddressAbsent,

    /// A header failed to resolve.
    #[error(transparent)]
    Header(#[from] HeaderResolveError),
}
