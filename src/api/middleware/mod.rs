//! HTTP middleware for request processing.
//!
//! Provides permissive CORS handling and request tracing.

pub mod cors;
pub mod tracing;
