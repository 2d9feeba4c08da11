//! End-to-end resolution of server specs parsed from their wire form.

use std::sync::Arc;

use mcplib_core::{Header, McpServerSpec, ValueFrom, ValueSource};
use mcplib_resolve::memory::{
    InMemoryConfigMaps, InMemorySecrets, InMemoryServices, StaticQueryParameters,
};
use mcplib_resolve::{HeaderResolveError, ResolveError, ServerResolveError, ValueResolver};

fn resolver() -> ValueResolver {
    ValueResolver::new(
        "agents",
        Arc::new(InMemoryConfigMaps::new()),
        Arc::new(InMemorySecrets::new().with_entry("agents", "creds", "token", "s3cr3t")),
        Arc::new(InMemoryServices::new().with_service(
            "agents",
            "github-mcp",
            "github-mcp.agents.svc.cluster.local",
        )),
    )
}

#[tokio::test]
async fn resolves_spec_parsed_from_json() {
    let spec: McpServerSpec = serde_json::from_value(serde_json::json!({
        "transport": "http",
        "address": {
            "valueFrom": {
                "serviceRef": {"name": "github-mcp", "port": "8080", "path": "/mcp"}
            }
        },
        "headers": [
            {
                "name": "Authorization",
                "value": {"valueFrom": {"secretKeyRef": {"name": "creds", "key": "token"}}}
            },
            {"name": "X-Trace", "value": {"value": "abc"}}
        ]
    }))
    .unwrap();

    let resolved = resolver().resolve_server(&spec).await.unwrap();
    assert_eq!(
        resolved.address,
        "github-mcp.agents.svc.cluster.local:8080/mcp"
    );
    assert_eq!(resolved.headers.len(), 2);
    assert_eq!(resolved.headers[0].name, "Authorization");
    assert_eq!(resolved.headers[0].value.as_deref(), Some("s3cr3t"));
    assert_eq!(resolved.headers[1].name, "X-Trace");
    assert_eq!(resolved.headers[1].value.as_deref(), Some("abc"));
}

#[tokio::test]
async fn header_failure_is_fail_fast_and_named() {
    // First header references a missing required secret key; the second is a
    // plain literal. The failure must name the first header and the literal
    // must never be reported.
    let headers = vec![
        Header::new(
            "Authorization",
            ValueSource::from_ref(ValueFrom::secret("creds", "missing")),
        ),
        Header::new("X-Trace", ValueSource::literal("abc")),
    ];

    let err = resolver().resolve_headers(&headers).await.unwrap_err();
    assert_eq!(err.header, "Authorization");
    assert!(matches!(err.source, ResolveError::ReferenceNotFound { .. }));
    assert!(!err.to_string().contains("X-Trace"));
}

#[tokio::test]
async fn header_order_is_preserved() {
    let headers = vec![
        Header::new("X-First", ValueSource::literal("1")),
        Header::new("X-Second", ValueSource::literal("2")),
        Header::new("X-Third", ValueSource::literal("3")),
    ];

    let resolved = resolver().resolve_headers(&headers).await.unwrap();
    let names: Vec<&str> = resolved.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["X-First", "X-Second", "X-Third"]);
}

#[tokio::test]
async fn absent_query_parameter_header_is_kept_without_value() {
    let headers = vec![Header::new(
        "X-Token",
        ValueSource::from_ref(ValueFrom::query_parameter("token")),
    )];

    let resolved = resolver().resolve_headers(&headers).await.unwrap();
    assert_eq!(resolved[0].name, "X-Token");
    assert_eq!(resolved[0].value, None);
}

#[tokio::test]
async fn request_scope_supplies_query_parameter_values() {
    let resolver = resolver().with_query_parameters(Arc::new(
        StaticQueryParameters::new().with_parameter("token", "from-request"),
    ));
    let headers = vec![Header::new(
        "X-Token",
        ValueSource::from_ref(ValueFrom::query_parameter("token")),
    )];

    let resolved = resolver.resolve_headers(&headers).await.unwrap();
    assert_eq!(resolved[0].value.as_deref(), Some("from-request"));
}

#[tokio::test]
async fn server_address_trailing_slash_is_trimmed() {
    let spec = McpServerSpec::new(
        mcplib_core::TransportType::Http,
        ValueSource::literal("http://github-mcp:8080/"),
    );

    let resolved = resolver().resolve_server(&spec).await.unwrap();
    assert_eq!(resolved.address, "http://github-mcp:8080");
}

#[tokio::test]
async fn absent_server_address_is_an_error() {
    // Address declared as an optional config map reference that misses:
    // valid absence for a value, but a server cannot dial "no address".
    let spec: McpServerSpec = serde_json::from_value(serde_json::json!({
        "transport": "http",
        "address": {
            "valueFrom": {
                "configMapKeyRef": {"name": "cfg", "key": "url", "optional": true}
            }
        }
    }))
    .unwrap();

    let err = resolver().resolve_server(&spec).await.unwrap_err();
    assert!(matches!(err, ServerResolveError::AddressAbsent));
}

#[tokio::test]
async fn header_error_surfaces_through_server_resolution() {
    let spec = McpServerSpec::new(
        mcplib_core::TransportType::Http,
        ValueSource::literal("http://github-mcp:8080"),
    )
    .with_headers(vec![Header::new(
        "Authorization",
        ValueSource::from_ref(ValueFrom::secret("creds", "missing")),
    )]);

    let err = resolver().resolve_server(&spec).await.unwrap_err();
    match err {
        ServerResolveError::Header(HeaderResolveError { header, .. }) => {
            assert_eq!(header, "Authorization");
        }
        other => panic!("expected header error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_value_from_is_rejected_at_parse_time() {
    // Zero and multiple reference kinds never reach the resolver; the wire
    // layer rejects them when the spec is parsed.
    let zero: Result<McpServerSpec, _> = serde_json::from_value(serde_json::json!({
        "transport": "http",
        "address": {"valueFrom": {}}
    }));
    assert!(zero.is_err());

    let multiple: Result<McpServerSpec, _> = serde_json::from_value(serde_json::json!({
        "transport": "http",
        "address": {"valueFrom": {
            "configMapKeyRef": {"name": "cfg", "key": "url"},
            "serviceRef": {"name": "github-mcp"}
        }}
    }));
    assert!(multiple.is_err());
}
