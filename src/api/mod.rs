//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Client address extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Subnet filtering and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
