//! Core domain types and port definitions for mcplib.
//!
//! This crate holds the declarative MCP server resource model (wire-stable
//! request/response records and the `ValueSource`/`ValueFrom` value model)
//! plus the lookup port traits that value resolution is built on. The
//! resolution engine itself lives in `mcplib-resolve`.

#![deny(unsafe_code)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    AvailabilityStatus, ConfigMapKeyRef, Header, McpServerCreateRequest, McpServerDetailResponse,
    McpServerListResponse, McpServerResponse, McpServerSpec, McpServerUpdateRequest, McpTransport,
    MissingKeyPolicy, QueryParameterRef, ReferenceKind, SecretKeyRef, ServiceRef, TransportType,
    ValueFrom, ValueSource,
};
pub use ports::{
    ConfigMapStore, LookupError, NoQueryParameters, QueryParameters, SecretStore, ServiceDiscovery,
};
