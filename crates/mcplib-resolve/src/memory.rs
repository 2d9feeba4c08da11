//! In-memory lookup collaborators.
//!
//! Builder-style doubles for tests and embedded setups that do not sit on a
//! real resource store. Entries are keyed exactly the way the ports key
//! them, so behavior matches a well-behaved backend (miss is `Ok(None)`,
//! injected failure is `Err(Backend)`).

use std::collections::HashMap;

use async_trait::async_trait;
use mcplib_core::{
    ConfigMapStore, LookupError, QueryParameters, SecretStore, ServiceDiscovery,
};

use crate::address::service_address;

/// In-memory [`ConfigMapStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigMaps {
    entries: HashMap<(String, String, String), String>,
    failure: Option<String>,
}

impl InMemoryConfigMaps {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under `namespace/name/key`.
    #[must_use]
    pub fn with_entry(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.entries
            .insert((namespace.into(), name.into(), key.into()), value.into());
        self
    }

    /// Make every lookup fail with a backend error.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

#[async_trait]
impl ConfigMapStore for InMemoryConfigMaps {
    async fn entry(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Option<String>, LookupError> {
        if let Some(message) = &self.failure {
            return Err(LookupError::Backend(message.clone()));
        }
        Ok(self
            .entries
            .get(&(namespace.to_string(), name.to_string(), key.to_string()))
            .cloned())
    }
}

/// In-memory [`SecretStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySecrets {
    entries: HashMap<(String, String, String), String>,
    failure: Option<String>,
}

impl InMemorySecrets {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under `namespace/name/key`.
    #[must_use]
    pub fn with_entry(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.entries
            .insert((namespace.into(), name.into(), key.into()), value.into());
        self
    }

    /// Make every lookup fail with a backend error.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

#[async_trait]
impl SecretStore for InMemorySecrets {
    async fn entry(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Option<String>, LookupError> {
        if let Some(message) = &self.failure {
            return Err(LookupError::Backend(message.clone()));
        }
        Ok(self
            .entries
            .get(&(namespace.to_string(), name.to_string(), key.to_string()))
            .cloned())
    }
}

/// In-memory [`ServiceDiscovery`] over a `namespace/name -> host` table.
///
/// Addresses are composed with [`service_address`], so port and path land
/// in the same `host[:port][/path]` shape a real discovery backend uses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryServices {
    hosts: HashMap<(String, String), String>,
}

impl InMemoryServices {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service host under `namespace/name`.
    #[must_use]
    pub fn with_service(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        self.hosts
            .insert((namespace.into(), name.into()), host.into());
        self
    }
}

#[async_trait]
impl ServiceDiscovery for InMemoryServices {
    async fn endpoint(
        &self,
        namespace: &str,
        name: &str,
        port: Option<&str>,
        path: Option<&str>,
    ) -> Result<Option<String>, LookupError> {
        Ok(self
            .hosts
            .get(&(namespace.to_string(), name.to_string()))
            .map(|host| service_address(host, port, path)))
    }
}

/// Fixed [`QueryParameters`] for a simulated request scope.
#[derive(Debug, Clone, Default)]
pub struct StaticQueryParameters {
    parameters: HashMap<String, String>,
}

impl StaticQueryParameters {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }
}

impl QueryParameters for StaticQueryParameters {
    fn get(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }
}
