//! Utility functions shared across layers.
//!
//! - [`short_id`] - Short identifier derivation from record ids
//! - [`url_validator`] - Destination URL validation
//! - [`client_ip`] - Client address resolution from request metadata

pub mod client_ip;
pub mod short_id;
pub mod url_validator;
