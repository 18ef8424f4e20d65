//! # portal-client - Submission Portal HTTP Client
//!
//! Talks to the three JSON endpoints of the portal server and maps every
//! failure onto [`portal_core::Error`].
//!
//! Depends on [`portal_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### API Abstraction
//! - [`PortalApi`] - Send-able async trait implemented by every transport
//! - [`LocalPortalApi`] - Non-Send variant generated by `trait_variant`
//!
//! ### HTTP Transport
//! - [`HttpPortalClient`] - reqwest-backed implementation
//! - [`ClientConfig`] - Base URL and timeout
//! - [`endpoints`] - Endpoint paths
//!
//! ### Test Helpers (`test-helpers` feature)
//! - `test_utils::FakePortalApi` - Scripted transport with call counters

pub mod api;
pub mod endpoints;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{LocalPortalApi, PortalApi};
pub use http::{detail_from_body, ClientConfig, HttpPortalClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
