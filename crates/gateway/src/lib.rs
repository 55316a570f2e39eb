//! hawks-gateway: HTTP access to the hawk catalog service.
//!
//! [`HttpGateway`] implements [`hawks_core::HawkGateway`] with a blocking
//! `ureq` agent. Status codes are checked per call (200 for list, create
//! and update, 204 for delete); anything else becomes
//! [`GatewayError::Rejected`](hawks_core::GatewayError::Rejected) with the
//! service's own error text.

mod http;

pub use http::{HttpGateway, DEFAULT_GATEWAY_URL};
