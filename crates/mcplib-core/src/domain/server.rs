//! MCP server resource types.
//!
//! Wire-compatible request/response records for the MCP server API, layered
//! over an external resource store. These are pure data: validation beyond
//! shape (uniqueness, namespace existence, etc.) belongs to the surrounding
//! infrastructure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::value::{Header, ValueSource};

/// Connection mechanism used to reach an MCP server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    /// Plain HTTP endpoint.
    #[default]
    Http,
    /// Server-sent events endpoint.
    Sse,
    /// Stdio-based server behind a bridge.
    Stdio,
}

/// Whether a server is currently reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// Last probe succeeded.
    Available,
    /// Last probe failed.
    Unavailable,
    /// Not probed yet.
    #[default]
    Unknown,
}

/// Desired state of an MCP server resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerSpec {
    /// How to connect to the server.
    pub transport: TransportType,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tool names exposed by this server (unset means all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,

    /// Connection address, literal or resolved from a reference.
    pub address: ValueSource,

    /// Headers applied to outgoing requests, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<Header>>,
}

impl McpServerSpec {
    /// Create a spec with the given transport and address.
    pub const fn new(transport: TransportType, address: ValueSource) -> Self {
        Self {
            transport,
            description: None,
            tools: None,
            address,
            headers: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the exposed tool list.
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<String>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Set the ordered header list.
    #[must_use]
    pub fn with_headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Container-launched transport description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpTransport {
    /// Transport kind identifier (free-form on the wire).
    #[serde(rename = "type")]
    pub kind: String,

    /// Container image that hosts the server.
    pub image: String,

    /// Environment variables for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,

    /// Arguments passed to the entrypoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Entrypoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

/// Summary of an MCP server, as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerResponse {
    /// Resource name.
    pub name: String,

    /// Resource namespace.
    pub namespace: String,

    /// Last resolved connection address, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Resource annotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,

    /// Connection transport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportType>,

    /// Reachability as of the last probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<AvailabilityStatus>,

    /// Human-readable status detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    /// Number of tools the server exposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_count: Option<u32>,
}

/// A page-less listing of MCP servers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerListResponse {
    /// The servers.
    pub items: Vec<McpServerResponse>,
    /// Total number of servers.
    pub total: usize,
}

impl McpServerListResponse {
    /// Build a listing from the given items.
    #[must_use]
    pub fn new(items: Vec<McpServerResponse>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

/// Full detail view of an MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerDetailResponse {
    /// Resource name.
    pub name: String,

    /// Resource namespace.
    pub namespace: String,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resource labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,

    /// Resource annotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,

    /// Reachability as of the last probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<AvailabilityStatus>,

    /// Last resolved connection address, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Connection transport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportType>,

    /// Declared headers (values unresolved).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<Header>>,

    /// Number of tools the server exposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_count: Option<u32>,
}

/// Request to create an MCP server resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerCreateRequest {
    /// Resource name.
    pub name: String,

    /// Resource namespace.
    pub namespace: String,

    /// Resource labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,

    /// Resource annotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,

    /// Desired state.
    pub spec: McpServerSpec,
}

/// Request to update an MCP server resource.
///
/// All fields are optional; only provided fields are updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServerUpdateRequest {
    /// New resource labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,

    /// New resource annotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<HashMap<String, String>>,

    /// New desired state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<McpServerSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::ValueFrom;

    #[test]
    fn test_spec_wire_shape() {
        let spec = McpServerSpec::new(
            TransportType::Http,
            ValueSource::from_ref(ValueFrom::service("mcp-fs")),
        )
        .with_description("filesystem tools");

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["transport"], "http");
        assert_eq!(json["description"], "filesystem tools");
        assert_eq!(json["address"]["valueFrom"]["serviceRef"]["name"], "mcp-fs");
        // Unset optionals are omitted entirely.
        assert!(json.get("tools").is_none());
        assert!(json.get("headers").is_none());
    }

    #[test]
    fn test_create_request_round_trip() {
        let request = McpServerCreateRequest {
            name: "github".to_string(),
            namespace: "tools".to_string(),
            labels: Some(HashMap::from([("team".to_string(), "infra".to_string())])),
            annotations: None,
            spec: McpServerSpec::new(
                TransportType::Sse,
                ValueSource::literal("http://github-mcp:8080/sse"),
            ),
        };

        let json = serde_json::to_string(&request).unwrap();
        let back: McpServerCreateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let request: McpServerUpdateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, McpServerUpdateRequest::default());
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
    }

    #[test]
    fn test_list_response_total_matches_items() {
        let listing = McpServerListResponse::new(vec![McpServerResponse {
            name: "github".to_string(),
            namespace: "tools".to_string(),
            address: Some("http://github-mcp:8080".to_string()),
            annotations: None,
            transport: Some(TransportType::Http),
            available: Some(AvailabilityStatus::Available),
            status_message: None,
            tool_count: Some(12),
        }]);
        assert_eq!(listing.total, 1);

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["items"][0]["tool_count"], 12);
    }

    #[test]
    fn test_transport_descriptor_type_field() {
        let transport = McpTransport {
            kind: "stdio".to_string(),
            image: "ghcr.io/acme/mcp-fs:1.2".to_string(),
            env: None,
            args: Some(vec!["--root".to_string(), "/data".to_string()]),
            command: None,
        };
        let json = serde_json::to_value(&transport).unwrap();
        assert_eq!(json["type"], "stdio");
        assert!(json.get("env").is_none());
    }

    #[test]
    fn test_detail_response_round_trip() {
        let detail = McpServerDetailResponse {
            name: "github".to_string(),
            namespace: "tools".to_string(),
            description: None,
            labels: None,
            annotations: None,
            available: Some(AvailabilityStatus::Unknown),
            address: None,
            transport: Some(TransportType::Http),
            headers: Some(vec![Header::new(
                "Authorization",
                ValueSource::from_ref(ValueFrom::secret("creds", "token")),
            )]),
            tool_count: None,
        };

        let json = serde_json::to_string(&detail).unwrap();
        let back: McpServerDetailResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, detail);
    }
}
