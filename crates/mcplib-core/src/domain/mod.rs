//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (resource store, HTTP layer, etc.).
//!
//! # Structure
//!
//! - `value` - Layered value model (`ValueSource`, `ValueFrom`, `Header`)
//! - `server` - MCP server resource records (spec, requests, responses)

pub mod server;
pub mod value;

// Re-export value types at the domain level for convenience
pub use value::{
    ConfigMapKeyRef, Header, MissingKeyPolicy, QueryParameterRef, ReferenceKind, SecretKeyRef,
    ServiceRef, ValueFrom, ValueSource,
};

// Re-export server resource types at the domain level for convenience
pub use server::{
    AvailabilityStatus, McpServerCreateRequest, McpServerDetailResponse, McpServerListResponse,
    McpServerResponse, McpServerSpec, McpServerUpdateRequest, McpTransport, TransportType,
};
