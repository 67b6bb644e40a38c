//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_normalizer`] - Scheme defaulting for submitted URLs
//! - [`short_url`] - Public short URL construction from request headers
//! - [`location`] - Redirect `Location` header from a stored URL
//! - [`db_error`] - Classification of PostgreSQL errors

pub mod code_generator;
pub mod db_error;
pub mod location;
pub mod short_url;
pub mod url_normalizer;
