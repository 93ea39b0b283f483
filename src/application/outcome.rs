//! Result shape handed to the presentation boundary.
//!
//! Expected write failures are data, not exceptions: stores convert repo
//! errors into a `Mutation` with `success = false` so UI code never needs
//! error-handling control flow for ordinary failure paths.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mutation<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Mutation<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn ok_empty() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: None,
        }
    }
}
