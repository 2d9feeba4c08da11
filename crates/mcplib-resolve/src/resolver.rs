//! Value resolution over injected lookup collaborators.

use std::sync::Arc;

use mcplib_core::{
    ConfigMapStore, Header, McpServerSpec, MissingKeyPolicy, NoQueryParameters, QueryParameters,
    ReferenceKind, SecretStore, ServiceDiscovery, ValueFrom, ValueSource,
};

use crate::error::{HeaderResolveError, ResolveError, ServerResolveError};

/// A header after value resolution.
///
/// `value` is `None` when the source resolved to absence (optional reference
/// miss or absent query parameter); transport layers skip such headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeader {
    /// Header name, unchanged from the declaration.
    pub name: String,
    /// Resolved value, or `None` for a valid absence.
    pub value: Option<String>,
}

/// A server connection after value resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedServer {
    /// Resolved connection address, trailing `/` trimmed.
    pub address: String,
    /// Resolved headers in declaration order.
    pub headers: Vec<ResolvedHeader>,
}

/// Resolves [`ValueSource`]s against injected lookup collaborators.
///
/// The resolver is bound to the namespace of the enclosing resource
/// (service references default to it) and, optionally, to the query
/// parameters of the current inbound request. It holds no mutable state
/// and is safe to share across tasks.
///
/// Precedence is fixed: a literal `value` always wins and the reference is
/// ignored; otherwise the single populated reference kind is dispatched to
/// its collaborator.
pub struct ValueResolver {
    namespace: String,
    config_maps: Arc<dyn ConfigMapStore>,
    secrets: Arc<dyn SecretStore>,
    services: Arc<dyn ServiceDiscovery>,
    query_parameters: Arc<dyn QueryParameters>,
}

impl ValueResolver {
    /// Create a resolver for resources in `namespace`.
    ///
    /// Query parameter references resolve to absence until a request scope
    /// is attached with [`with_query_parameters`](Self::with_query_parameters).
    pub fn new(
        namespace: impl Into<String>,
        config_maps: Arc<dyn ConfigMapStore>,
        secrets: Arc<dyn SecretStore>,
        services: Arc<dyn ServiceDiscovery>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            config_maps,
            secrets,
            services,
            query_parameters: Arc::new(NoQueryParameters::new()),
        }
    }

    /// Bind the resolver to the query parameters of the current request.
    #[must_use]
    pub fn with_query_parameters(mut self, query_parameters: Arc<dyn QueryParameters>) -> Self {
        self.query_parameters = query_parameters;
        self
    }

    /// The namespace service references default to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolve a single value source.
    ///
    /// Returns `Ok(None)` for a valid absence: an optional keyed reference
    /// that missed, or a query parameter not present on the request.
    ///
    /// # Errors
    ///
    /// - `NoValueSource` if neither `value` nor `value_from` is declared
    /// - `ReferenceNotFound` if a required reference missed
    /// - `Lookup` if a collaborator failed
    pub async fn resolve(&self, source: &ValueSource) -> Result<Option<String>, ResolveError> {
        if let Some(value) = &source.value {
            // Literal wins; any reference alongside it is ignored.
            return Ok(Some(value.clone()));
        }

        let Some(value_from) = &source.value_from else {
            return Err(ResolveError::NoValueSource);
        };

        match value_from {
            ValueFrom::ConfigMapKeyRef(r) => {
                let hit = self
                    .config_maps
                    .entry(&self.namespace, &r.name, &r.key)
                    .await?;
                Self::apply_policy(hit, r.policy, ReferenceKind::ConfigMap, &r.name, &r.key)
            }
            ValueFrom::SecretKeyRef(r) => {
                let hit = self.secrets.entry(&self.namespace, &r.name, &r.key).await?;
                Self::apply_policy(hit, r.policy, ReferenceKind::Secret, &r.name, &r.key)
            }
            ValueFrom::ServiceRef(r) => {
                let namespace = r.namespace.as_deref().unwrap_or(&self.namespace);
                let endpoint = self
                    .services
                    .endpoint(namespace, &r.name, r.port.as_deref(), r.path.as_deref())
                    .await?;
                match endpoint {
                    Some(address) => {
                        tracing::debug!(
                            service = %r.name,
                            namespace = %namespace,
                            address = %address,
                            "resolved service reference"
                        );
                        Ok(Some(address))
                    }
                    None => Err(ResolveError::missing_service(namespace, &r.name)),
                }
            }
            // Query parameters are inherently optional: a miss is absence.
            ValueFrom::QueryParameterRef(r) => Ok(self.query_parameters.get(&r.name)),
        }
    }

    /// Apply the miss policy of a keyed reference to a lookup outcome.
    fn apply_policy(
        hit: Option<String>,
        policy: MissingKeyPolicy,
        kind: ReferenceKind,
        name: &str,
        key: &str,
    ) -> Result<Option<String>, ResolveError> {
        match hit {
            Some(value) => Ok(Some(value)),
            None if policy.is_optional() => {
                tracing::debug!(%kind, name, key, "optional reference missed, resolving to absence");
                Ok(None)
            }
            None => Err(ResolveError::missing_key(kind, name, key)),
        }
    }

    /// Resolve an ordered header list.
    ///
    /// Headers resolve in input order and the output preserves that order.
    /// The first failure aborts the whole list (no partial application) and
    /// reports the failing header's name.
    ///
    /// # Errors
    ///
    /// The first header whose value fails to resolve, wrapped with its name.
    pub async fn resolve_headers(
        &self,
        headers: &[Header],
    ) -> Result<Vec<ResolvedHeader>, HeaderResolveError> {
        let mut resolved = Vec::with_capacity(headers.len());
        for header in headers {
            let value = self
                .resolve(&header.value)
                .await
                .map_err(|source| HeaderResolveError {
                    header: header.name.clone(),
                    source,
                })?;
            if value.is_none() {
                tracing::debug!(header = %header.name, "header value resolved to absence");
            }
            resolved.push(ResolvedHeader {
                name: header.name.clone(),
                value,
            });
        }
        Ok(resolved)
    }

    /// Resolve a server spec to a ready-to-dial connection.
    ///
    /// The address is required (absence is an error at this level) and a
    /// trailing `/` is trimmed. Headers, if declared, resolve fail-fast in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// - `Address` / `AddressAbsent` for address failures
    /// - `Header` for the first failing header
    pub async fn resolve_server(
        &self,
        spec: &McpServerSpec,
    ) -> Result<ResolvedServer, ServerResolveError> {
        let address = self
            .resolve(&spec.address)
            .await
            .map_err(ServerResolveError::Address)?
            .ok_or(ServerResolveError::AddressAbsent)?;
        let address = address.trim_end_matches('/').to_string();

        let headers = match &spec.headers {
            Some(headers) => self.resolve_headers(headers).await?,
            None => Vec::new(),
        };

        tracing::debug!(
            address = %address,
            header_count = headers.len(),
            "resolved MCP server connection"
        );

        Ok(ResolvedServer { address, headers })
    }
}
