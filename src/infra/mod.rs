//! Infrastructure adapters: remote transport, local persistence, telemetry.

pub mod error;
pub mod local;
pub mod remote;
pub mod telemetry;
