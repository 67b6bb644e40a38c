//! PostgreSQL repository implementations.
//!
//! Queries are checked at runtime (`query_as` + `FromRow`), so building the
//! crate does not need a live database.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Short link storage, lookup, and click counting

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
