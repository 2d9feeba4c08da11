//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from infrastructure.
//! They contain no implementation details and use only domain-neutral types.
//!
//! # Design Rules
//!
//! - No client/transport types in any signature
//! - A miss is `Ok(None)`; errors mean the backing store itself failed
//! - Secret values never appear in error messages or logs

pub mod lookup;

pub use lookup::{
    ConfigMapStore, LookupError, NoQueryParameters, QueryParameters, SecretStore, ServiceDiscovery,
};
