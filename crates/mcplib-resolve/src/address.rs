//! Service address composition.

/// Compose a fully qualified service address `host[:port][/path]`.
///
/// A missing leading `/` on `path` is added; an existing one is kept as-is.
/// Provided for [`ServiceDiscovery`](mcplib_core::ServiceDiscovery)
/// implementations so they all agree on the address shape.
#[must_use]
pub fn service_address(host: &str, port: Option<&str>, path: Option<&str>) -> String {
    let mut address = host.to_string();
    if let Some(port) = port {
        address.push(':');
        address.push_str(port);
    }
    if let Some(path) = path {
        if !path.starts_with('/') {
            address.push('/');
        }
        address.push_str(path);
    }
    address
}
