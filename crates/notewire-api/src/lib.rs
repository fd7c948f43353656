//! Notewire API - HTTP transport adapter
//!
//! This crate implements the `INoteTransport` port from `notewire-core`
//! against the Notewire server's JSON API. It is a driven (secondary)
//! adapter in the hexagonal architecture.
//!
//! ## Key Components
//!
//! - [`ApiClient`] - typed HTTP client: endpoint construction, JSON
//!   decoding, and status → error mapping
//! - [`HttpNoteTransport`] - the `INoteTransport` implementation
//!
//! ## Error Mapping
//!
//! Every non-2xx response is a failure regardless of body content:
//! 404-class becomes `TransportError::NotFound`, 422-class becomes
//! `TransportError::Validation`, and everything else — including
//! transport-level failures and undecodable bodies — becomes
//! `TransportError::Network`. Nothing is retried here; the interaction
//! controller owns all recovery policy.

pub mod client;
pub mod provider;

pub use client::ApiClient;
pub use provider::HttpNoteTransport;
