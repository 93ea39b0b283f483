//! Data synchronization and admin session core for the Lácteos storefront.
//!
//! The remote data service (a PostgREST-style hosted backend with per-table
//! CRUD endpoints and a static publishable key) is an external collaborator;
//! this crate owns the client-side half: typed repositories over the remote
//! tables, an admin session lifecycle with local persistence, per-entity
//! view-model stores with optimistic cache patching, and the feedback-form
//! verification gate.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
