//! Remote data-service transport.
//!
//! The hosted backend exposes one REST collection per table under
//! `/rest/v1/{table}` with PostgREST conventions: column filters as
//! `col=eq.value` query pairs, `order=col.desc`, writes answered with the
//! affected rows when `Prefer: return=representation` is sent, and a single
//! publishable key carried in both the `apikey` and `Authorization` headers.

mod admin_users;
mod inventory;
mod products;
mod tickets;

use reqwest::{
    Client, Method, Response, StatusCode,
    header::{AUTHORIZATION, HeaderValue},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::application::repos::RepoError;

const REST_PREFIX: &str = "rest/v1/";
const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid remote URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid api key: {0}")]
    Key(String),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote rejected request: status {status} body {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("failed to decode remote response: {0}")]
    Decode(String),
}

/// Shared key-authenticated client for the remote store.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    client: Client,
    base: Url,
    key: String,
}

impl RemoteClient {
    pub fn new(site: &str, key: impl Into<String>) -> Result<Self, RemoteError> {
        let base = Url::parse(site)?.join("/")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            base,
            key: key.into(),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("lactea/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn auth_header(&self) -> Result<HeaderValue, RemoteError> {
        HeaderValue::from_str(&format!("Bearer {}", self.key))
            .map_err(|err| RemoteError::Key(err.to_string()))
    }

    fn key_header(&self) -> Result<HeaderValue, RemoteError> {
        HeaderValue::from_str(&self.key).map_err(|err| RemoteError::Key(err.to_string()))
    }

    fn table_url(&self, table: &str, query: &[(&str, String)]) -> Result<Url, RemoteError> {
        let mut url = self.base.join(REST_PREFIX)?.join(table)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        table: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
        representation: bool,
    ) -> Result<Response, RemoteError> {
        let url = self.table_url(table, query)?;
        debug!(%method, table, "remote request");

        let mut request = self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, self.key_header()?)
            .header(AUTHORIZATION, self.auth_header()?);
        if representation {
            request = request.header(PREFER_HEADER, RETURN_REPRESENTATION);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(RemoteError::Rejected { status, body });
        }
        serde_json::from_slice(&bytes).map_err(|err| RemoteError::Decode(err.to_string()))
    }

    async fn expect_success(response: Response) -> Result<(), RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Rejected { status, body });
        }
        Ok(())
    }

    /// Filtered read ordered by the caller-supplied query pairs.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, RemoteError> {
        let response = self.send(Method::GET, table, query, None, false).await?;
        Self::decode(response).await
    }

    /// Insert one row; the remote assigns identity and timestamps and
    /// answers with the persisted representation.
    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        row: serde_json::Value,
    ) -> Result<T, RemoteError> {
        let body = serde_json::Value::Array(vec![row]);
        let response = self
            .send(Method::POST, table, &[], Some(&body), true)
            .await?;
        let mut rows: Vec<T> = Self::decode(response).await?;
        if rows.is_empty() {
            return Err(RemoteError::Decode(
                "insert returned no representation rows".to_string(),
            ));
        }
        Ok(rows.swap_remove(0))
    }

    /// Partial merge by filter; answers with every row the filter matched.
    /// A filter that matches nothing is a success with zero rows.
    pub async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        patch: &serde_json::Value,
    ) -> Result<Vec<T>, RemoteError> {
        let response = self
            .send(Method::PATCH, table, query, Some(patch), true)
            .await?;
        Self::decode(response).await
    }

    /// Partial merge by filter without requesting the representation back.
    pub async fn update_unit(
        &self,
        table: &str,
        query: &[(&str, String)],
        patch: &serde_json::Value,
    ) -> Result<(), RemoteError> {
        let response = self
            .send(Method::PATCH, table, query, Some(patch), false)
            .await?;
        Self::expect_success(response).await
    }

    pub async fn delete(&self, table: &str, query: &[(&str, String)]) -> Result<(), RemoteError> {
        let response = self.send(Method::DELETE, table, query, None, false).await?;
        Self::expect_success(response).await
    }
}

/// Bare low-level path to the same endpoints: a fresh one-shot client per
/// call, key header only, no bearer token. Second rung of the inventory
/// resilience ladder, kept for deployments where the primary path is
/// blocked by row-level policies or a broken client configuration.
#[derive(Clone, Debug)]
pub struct DirectTransport {
    base: Url,
    key: String,
}

impl DirectTransport {
    pub fn new(site: &str, key: impl Into<String>) -> Result<Self, RemoteError> {
        let base = Url::parse(site)?.join("/")?;
        Ok(Self {
            base,
            key: key.into(),
        })
    }

    fn table_url(&self, table: &str, query: &[(&str, String)]) -> Result<Url, RemoteError> {
        let mut url = self.base.join(REST_PREFIX)?.join(table)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    fn key_header(&self) -> Result<HeaderValue, RemoteError> {
        HeaderValue::from_str(&self.key).map_err(|err| RemoteError::Key(err.to_string()))
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, RemoteError> {
        let url = self.table_url(table, query)?;
        debug!(table, "direct transport select");
        let response = Client::new()
            .get(url)
            .header(API_KEY_HEADER, self.key_header()?)
            .send()
            .await?;
        RemoteClient::decode(response).await
    }

    pub async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        patch: &serde_json::Value,
    ) -> Result<Vec<T>, RemoteError> {
        let url = self.table_url(table, query)?;
        debug!(table, "direct transport update");
        let response = Client::new()
            .patch(url)
            .header(API_KEY_HEADER, self.key_header()?)
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(patch)
            .send()
            .await?;
        RemoteClient::decode(response).await
    }

    pub async fn delete(&self, table: &str, query: &[(&str, String)]) -> Result<(), RemoteError> {
        let url = self.table_url(table, query)?;
        debug!(table, "direct transport delete");
        let response = Client::new()
            .delete(url)
            .header(API_KEY_HEADER, self.key_header()?)
            .send()
            .await?;
        RemoteClient::expect_success(response).await
    }
}

/// Repository implementations over the remote store. One instance serves
/// every entity trait; per-table impls live in the sibling modules.
#[derive(Clone, Debug)]
pub struct RemoteRepositories {
    client: RemoteClient,
    direct: DirectTransport,
}

impl RemoteRepositories {
    pub fn new(client: RemoteClient, direct: DirectTransport) -> Self {
        Self { client, direct }
    }

    pub fn connect(site: &str, key: &str) -> Result<Self, RemoteError> {
        Ok(Self {
            client: RemoteClient::new(site, key)?,
            direct: DirectTransport::new(site, key)?,
        })
    }

    pub(crate) fn client(&self) -> &RemoteClient {
        &self.client
    }

    pub(crate) fn direct(&self) -> &DirectTransport {
        &self.direct
    }
}

pub(crate) fn map_remote_error(err: RemoteError) -> RepoError {
    match err {
        RemoteError::Rejected { status, body } => RepoError::Rejected {
            status: status.as_u16(),
            message: body,
        },
        RemoteError::Decode(message) => RepoError::Decode(message),
        RemoteError::Url(err) => RepoError::Connection(err.to_string()),
        RemoteError::Key(message) => RepoError::Connection(message),
        RemoteError::Transport(err) => RepoError::Connection(err.to_string()),
    }
}

pub(crate) fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}

/// Timestamp stamped onto client-side writes, RFC-3339 like the remote's
/// own `created_at` defaults.
pub(crate) fn utc_now_string() -> Result<String, RepoError> {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .map_err(|err| RepoError::Decode(format!("failed to format timestamp: {err}")))
}
