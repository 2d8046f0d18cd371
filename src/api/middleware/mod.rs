//! HTTP middleware for request processing and protection.
//!
//! Provides subnet-based access control and request tracing.

pub mod subnet_filter;
pub mod tracing;
