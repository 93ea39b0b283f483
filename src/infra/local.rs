//! Local JSON persistence: the admin session record and the product
//! fallback cache. Stands in for the browser's local storage in the
//! original deployment; the remote store stays the source of truth.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

use crate::domain::entities::{ProductRecord, SessionRecord};

#[derive(Debug, Error)]
pub enum LocalStoreError {
    #[error("io error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence seam for the admin session record.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// A missing or malformed record reads as `None`; a malformed record is
    /// also cleared so it cannot shadow a future login.
    async fn load(&self) -> Result<Option<SessionRecord>, LocalStoreError>;
    async fn save(&self, record: &SessionRecord) -> Result<(), LocalStoreError>;
    async fn clear(&self) -> Result<(), LocalStoreError>;
}

/// Persistence seam for the last-resort product mirror.
#[async_trait]
pub trait ProductCache: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<ProductRecord>>, LocalStoreError>;
    async fn save(&self, products: &[ProductRecord]) -> Result<(), LocalStoreError>;
}

/// One JSON document per file, written via a temp file + rename so a crash
/// mid-write never leaves a truncated record behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, LocalStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(LocalStoreError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding malformed local record");
                self.remove().await?;
                Ok(None)
            }
        }
    }

    async fn write<T: Serialize>(&self, value: &T) -> Result<(), LocalStoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| LocalStoreError::Io {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| LocalStoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| LocalStoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    async fn remove(&self) -> Result<(), LocalStoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(LocalStoreError::Io {
                path: self.path.clone(),
                source: err,
            }),
        }
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    async fn load(&self) -> Result<Option<SessionRecord>, LocalStoreError> {
        self.read().await
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), LocalStoreError> {
        self.write(record).await
    }

    async fn clear(&self) -> Result<(), LocalStoreError> {
        self.remove().await
    }
}

#[async_trait]
impl ProductCache for JsonFileStore {
    async fn load(&self) -> Result<Option<Vec<ProductRecord>>, LocalStoreError> {
        self.read().await
    }

    async fn save(&self, products: &[ProductRecord]) -> Result<(), LocalStoreError> {
        self.write(&products).await
    }
}
