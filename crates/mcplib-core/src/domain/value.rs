//! Layered value model for declaratively authored configuration values.
//!
//! A [`ValueSource`] is either a literal string or a reference into an
//! external source (config map entry, secret entry, service endpoint, or
//! inbound query parameter). References are resolved at evaluation time by
//! the resolver in `mcplib-resolve`; the types here are immutable value
//! objects parsed from persisted resource specs.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A configuration value: a literal, an external reference, or neither.
///
/// On the wire this matches the original API shape: an object with optional
/// `value` and `valueFrom` fields. When both are set, the literal wins at
/// resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSource {
    /// Literal value. Takes precedence over `value_from` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Reference into an external source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_from: Option<ValueFrom>,
}

impl ValueSource {
    /// Create a literal value source.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            value_from: None,
        }
    }

    /// Create a value source backed by an external reference.
    #[must_use]
    pub const fn from_ref(value_from: ValueFrom) -> Self {
        Self {
            value: None,
            value_from: Some(value_from),
        }
    }
}

/// Miss policy for keyed references (config map and secret entries).
///
/// Encoded on the wire as the optional `optional` boolean: absent or `false`
/// means a lookup miss is an error, `true` means a miss resolves to absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Lookup miss is a resolution error.
    #[default]
    Required,
    /// Lookup miss resolves to "no value".
    Optional,
}

impl MissingKeyPolicy {
    /// Whether a miss is tolerated.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional)
    }

    /// Whether a miss is a resolution error (the wire default).
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Wire codec for [`MissingKeyPolicy`] as the `optional` boolean.
mod policy_wire {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::MissingKeyPolicy;

    pub fn serialize<S: Serializer>(
        policy: &MissingKeyPolicy,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(policy.is_optional())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<MissingKeyPolicy, D::Error> {
        let optional = Option::<bool>::deserialize(deserializer)?;
        Ok(if optional.unwrap_or(false) {
            MissingKeyPolicy::Optional
        } else {
            MissingKeyPolicy::Required
        })
    }
}

/// Reference to a key inside a named config map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMapKeyRef {
    /// Name of the config map.
    pub name: String,

    /// Key inside the config map.
    pub key: String,

    /// What a lookup miss means for this reference.
    #[serde(
        rename = "optional",
        default,
        with = "policy_wire",
        skip_serializing_if = "MissingKeyPolicy::is_required"
    )]
    pub policy: MissingKeyPolicy,
}

impl ConfigMapKeyRef {
    /// Create a required reference to `key` inside config map `name`.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            policy: MissingKeyPolicy::Required,
        }
    }

    /// Tolerate a lookup miss (resolve to absence instead of erroring).
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.policy = MissingKeyPolicy::Optional;
        self
    }
}

/// Reference to a key inside a named secret.
///
/// Same shape as [`ConfigMapKeyRef`], but sourced from a sensitive bundle
/// with stricter access control on the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeyRef {
    /// Name of the secret.
    pub name: String,

    /// Key inside the secret.
    pub key: String,

    /// What a lookup miss means for this reference.
    #[serde(
        rename = "optional",
        default,
        with = "policy_wire",
        skip_serializing_if = "MissingKeyPolicy::is_required"
    )]
    pub policy: MissingKeyPolicy,
}

impl SecretKeyRef {
    /// Create a required reference to `key` inside secret `name`.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            policy: MissingKeyPolicy::Required,
        }
    }

    /// Tolerate a lookup miss (resolve to absence instead of erroring).
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.policy = MissingKeyPolicy::Optional;
        self
    }
}

/// Reference to a named network-reachable service.
///
/// Resolves to a fully qualified address string `host[:port][/path]`.
/// `namespace` defaults to the enclosing resource's namespace at resolution
/// time; `port` is a string on the wire (named ports are allowed).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    /// Name of the service.
    pub name: String,

    /// Namespace the service lives in. Defaults to the resource's own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Port number or named port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Path suffix appended to the resolved address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ServiceRef {
    /// Create a reference to the named service in the resource's namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            port: None,
            path: None,
        }
    }

    /// Scope the reference to another namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Address a specific port.
    #[must_use]
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Append a path suffix to the resolved address.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Reference to a named query parameter of the current inbound request.
///
/// Query parameters are inherently optional: a miss resolves to absence,
/// so this variant carries no miss policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameterRef {
    /// Name of the query parameter.
    pub name: String,
}

impl QueryParameterRef {
    /// Create a reference to the named query parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The reference half of a [`ValueSource`]: exactly one reference kind.
///
/// The wire shape is the original four-optional-field object
/// (`configMapKeyRef` / `secretKeyRef` / `serviceRef` / `queryParameterRef`);
/// deserialization rejects anything other than exactly one populated field,
/// so a parsed `ValueFrom` is structurally well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueFrom {
    /// Key lookup in a named config map.
    ConfigMapKeyRef(ConfigMapKeyRef),
    /// Key lookup in a named secret.
    SecretKeyRef(SecretKeyRef),
    /// Endpoint of a named service.
    ServiceRef(ServiceRef),
    /// Query parameter of the current inbound request.
    QueryParameterRef(QueryParameterRef),
}

impl ValueFrom {
    /// Reference `key` inside config map `name` (required miss policy).
    pub fn config_map(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ConfigMapKeyRef(ConfigMapKeyRef::new(name, key))
    }

    /// Reference `key` inside secret `name` (required miss policy).
    pub fn secret(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::SecretKeyRef(SecretKeyRef::new(name, key))
    }

    /// Reference the endpoint of a named service.
    pub fn service(name: impl Into<String>) -> Self {
        Self::ServiceRef(ServiceRef::new(name))
    }

    /// Reference a query parameter of the current request.
    pub fn query_parameter(name: impl Into<String>) -> Self {
        Self::QueryParameterRef(QueryParameterRef::new(name))
    }

    /// Which kind of reference this is (for diagnostics).
    #[must_use]
    pub const fn kind(&self) -> ReferenceKind {
        match self {
            Self::ConfigMapKeyRef(_) => ReferenceKind::ConfigMap,
            Self::SecretKeyRef(_) => ReferenceKind::Secret,
            Self::ServiceRef(_) => ReferenceKind::Service,
            Self::QueryParameterRef(_) => ReferenceKind::QueryParameter,
        }
    }
}

/// The four reference kinds, for error reporting and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `configMapKeyRef`
    ConfigMap,
    /// `secretKeyRef`
    Secret,
    /// `serviceRef`
    Service,
    /// `queryParameterRef`
    QueryParameter,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigMap => write!(f, "config map"),
            Self::Secret => write!(f, "secret"),
            Self::Service => write!(f, "service"),
            Self::QueryParameter => write!(f, "query parameter"),
        }
    }
}

/// Wire mirror of [`ValueFrom`]: four optional fields, at most one set.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueFromWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_map_key_ref: Option<ConfigMapKeyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret_key_ref: Option<SecretKeyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_ref: Option<ServiceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query_parameter_ref: Option<QueryParameterRef>,
}

impl TryFrom<ValueFromWire> for ValueFrom {
    type Error = String;

    fn try_from(wire: ValueFromWire) -> Result<Self, Self::Error> {
        match (
            wire.config_map_key_ref,
            wire.secret_key_ref,
            wire.service_ref,
            wire.query_parameter_ref,
        ) {
            (Some(r), None, None, None) => Ok(Self::ConfigMapKeyRef(r)),
            (None, Some(r), None, None) => Ok(Self::SecretKeyRef(r)),
            (None, None, Some(r), None) => Ok(Self::ServiceRef(r)),
            (None, None, None, Some(r)) => Ok(Self::QueryParameterRef(r)),
            (None, None, None, None) => {
                Err("valueFrom must set exactly one reference kind, none set".to_string())
            }
            _ => Err("valueFrom must set exactly one reference kind, multiple set".to_string()),
        }
    }
}

impl Serialize for ValueFrom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut wire = ValueFromWire::default();
        match self {
            Self::ConfigMapKeyRef(r) => wire.config_map_key_ref = Some(r.clone()),
            Self::SecretKeyRef(r) => wire.secret_key_ref = Some(r.clone()),
            Self::ServiceRef(r) => wire.service_ref = Some(r.clone()),
            Self::QueryParameterRef(r) => wire.query_parameter_ref = Some(r.clone()),
        }
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValueFrom {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ValueFromWire::deserialize(deserializer)?;
        Self::try_from(wire).map_err(D::Error::custom)
    }
}

/// An HTTP header whose value is resolved through the value model.
///
/// Headers are positionally significant for some transports, so header
/// lists preserve their authored order through resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name (e.g. `Authorization`).
    pub name: String,

    /// Header value, literal or referenced.
    pub value: ValueSource,
}

impl Header {
    /// Create a header with the given value source.
    pub fn new(name: impl Into<String>, value: ValueSource) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
