//! Application services: session lifecycle, per-entity stores, feedback
//! verification, and the repository contracts they are built on.

pub mod feedback;
pub mod inventory;
pub mod outcome;
pub mod products;
pub mod repos;
pub mod session;
pub mod tickets;
pub mod verification;
