//! Subcommand handlers. Each one owns the view-model store it drives and
//! returns a process-level error when the operation cannot complete.

pub mod feedback;
pub mod inventory;
pub mod products;
pub mod session;
pub mod tickets;

use std::sync::Arc;

use thiserror::Error;

use lactea::application::outcome::Mutation;
use lactea::application::repos::AdminUsersRepo;
use lactea::application::session::{AuthError, SessionManager, SystemClock};
use lactea::config::{LoadError, Settings};
use lactea::infra::error::InfraError;
use lactea::infra::local::JsonFileStore;
use lactea::infra::remote::{RemoteError, RemoteRepositories};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("remote connection error: {0}")]
    Remote(#[from] RemoteError),
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no hay una sesión activa; ejecuta `lactea-cli login`")]
    SessionRequired,
    #[error("{0}")]
    Failed(String),
}

/// Object graph shared by every handler.
pub struct Ctx {
    pub repos: Arc<RemoteRepositories>,
    pub sessions: SessionManager,
    pub product_cache: Arc<JsonFileStore>,
}

impl Ctx {
    pub fn build(settings: &Settings) -> Result<Self, CliError> {
        let repos = Arc::new(RemoteRepositories::connect(
            settings.remote.base_url.as_str(),
            &settings.remote.api_key,
        )?);
        let session_store = Arc::new(JsonFileStore::new(&settings.storage.session_file));
        let product_cache = Arc::new(JsonFileStore::new(&settings.storage.product_cache_file));
        let sessions = SessionManager::new(
            Arc::clone(&repos) as Arc<dyn AdminUsersRepo>,
            session_store,
            Arc::new(SystemClock),
        );
        Ok(Self {
            repos,
            sessions,
            product_cache,
        })
    }

    /// Restores the persisted session and fails if none survives the check.
    pub async fn require_session(&mut self) -> Result<(), CliError> {
        if self.sessions.restore().await.is_some() {
            Ok(())
        } else {
            Err(CliError::SessionRequired)
        }
    }
}

/// Collapses a store mutation into the process exit path.
pub fn finish<T>(outcome: Mutation<T>) -> Result<Option<T>, CliError> {
    if outcome.success {
        Ok(outcome.data)
    } else {
        Err(CliError::Failed(
            outcome
                .error
                .unwrap_or_else(|| "operación fallida".to_owned()),
        ))
    }
}
