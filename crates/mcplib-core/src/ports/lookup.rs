//! Lookup collaborator traits for value resolution.
//!
//! The resolver defers every external lookup to these ports. Implementations
//! talk to the backing resource store (and may block on network I/O); the
//! resolver itself stays pure. Caching, retries, and timeouts are the
//! implementations' concern, not defined at this layer.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a lookup collaborator, distinct from a plain miss.
///
/// A miss is `Ok(None)`; this error means the backing store could not be
/// consulted at all (network failure, access denied, etc.).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backing store could not be reached or answered with an error.
    #[error("lookup backend error: {0}")]
    Backend(String),
}

/// Read access to named config map bundles.
#[async_trait]
pub trait ConfigMapStore: Send + Sync {
    /// Fetch the entry `key` of config map `name` in `namespace`.
    ///
    /// Returns `Ok(None)` when the config map or the key does not exist.
    ///
    /// # Errors
    ///
    /// `Backend` when the store itself cannot be consulted.
    async fn entry(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Option<String>, LookupError>;
}

/// Read access to named secret bundles.
///
/// Same contract as [`ConfigMapStore`]; implementations are expected to
/// enforce stricter access control and must not log resolved values.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the entry `key` of secret `name` in `namespace`.
    ///
    /// Returns `Ok(None)` when the secret or the key does not exist.
    ///
    /// # Errors
    ///
    /// `Backend` when the store itself cannot be consulted.
    async fn entry(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Option<String>, LookupError>;
}

/// Resolution of named services to reachable addresses.
#[async_trait]
pub trait ServiceDiscovery: Send + Sync {
    /// Resolve service `name` in `namespace` to a fully qualified address
    /// `host[:port][/path]`.
    ///
    /// Returns `Ok(None)` when the service is unknown.
    ///
    /// # Errors
    ///
    /// `Backend` when discovery itself fails.
    async fn endpoint(
        &self,
        namespace: &str,
        name: &str,
        port: Option<&str>,
        path: Option<&str>,
    ) -> Result<Option<String>, LookupError>;
}

/// Query parameters of the current inbound request.
///
/// Bound to a single request at construction; a miss is always a valid
/// "no value" outcome, never an error.
pub trait QueryParameters: Send + Sync {
    /// Get the named query parameter, if present on the request.
    fn get(&self, name: &str) -> Option<String>;
}

/// Query parameter source for contexts with no inbound request.
///
/// Every lookup misses. Suitable for background resolution (controllers,
/// probes) where `queryParameterRef` values legitimately resolve to absence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQueryParameters;

impl NoQueryParameters {
    /// Create a new empty query parameter source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl QueryParameters for NoQueryParameters {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}
