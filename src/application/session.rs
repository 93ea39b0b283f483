//! Admin session lifecycle: login, 24-hour expiry, logout, restore.
//!
//! The credential check happens client-side because the remote collaborator
//! exposes the `admin_users` table directly and offers no token endpoint:
//! the stored value travels to the client and is compared here. That is a
//! real security defect of the system's contract, not a style choice. The
//! comparison is at least constant-time, and lookup failure and password
//! mismatch yield the identical error so login leaks nothing about which
//! half failed.

use std::sync::Arc;

use subtle::ConstantTimeEq;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};

use crate::application::repos::{AdminUsersRepo, RepoError};
use crate::domain::entities::{AdminUserView, SessionRecord};
use crate::infra::local::SessionStore;

/// Sessions older than this (from `login_time`) are force-expired.
pub const SESSION_MAX_AGE: Duration = Duration::hours(24);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Ingresa correo y contraseña")]
    EmptyInput,
    /// Covers both "no such user" and "wrong password".
    #[error("Credenciales incorrectas")]
    InvalidCredentials,
    #[error("Usuario inactivo")]
    InactiveUser,
    /// Transport failure; distinct from credential errors so the caller can
    /// offer a retry instead of blaming the credentials.
    #[error("Error de conexión. Verifica tu internet e inténtalo de nuevo.")]
    Connection,
}

/// Injected time source; tests pin it to exercise expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

pub struct SessionManager {
    users: Arc<dyn AdminUsersRepo>,
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    current: Option<AdminUserView>,
}

impl SessionManager {
    pub fn new(
        users: Arc<dyn AdminUsersRepo>,
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            store,
            clock,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&AdminUserView> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Authenticate against the remote `admin_users` table and persist the
    /// session. Never panics; every failure path is an `AuthError`.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<AdminUserView, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::EmptyInput);
        }

        let user = match self.users.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(err) => {
                warn!(error = %err, "admin lookup failed");
                return Err(AuthError::Connection);
            }
        };

        if user.active == Some(false) {
            return Err(AuthError::InactiveUser);
        }

        let matches: bool = user
            .password_hash
            .as_bytes()
            .ct_eq(password.as_bytes())
            .into();
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        let view = user.view();
        let record = SessionRecord {
            is_active: true,
            user: view.clone(),
            login_time: self.clock.now(),
        };
        if let Err(err) = self.store.save(&record).await {
            // The login itself is valid; the session just won't survive a
            // restart.
            warn!(error = %err, "failed to persist session record");
        }

        if let Err(err) = self.users.touch_last_login(user.id).await {
            self.log_last_login_failure(&err);
        }

        debug!(email = %view.email, "admin session opened");
        self.current = Some(view.clone());
        Ok(view)
    }

    /// Clears in-memory state and removes the persisted record
    /// unconditionally.
    pub async fn logout(&mut self) {
        self.current = None;
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear persisted session");
        }
    }

    /// Run once at process start. A missing or malformed record reads as no
    /// session; a record past [`SESSION_MAX_AGE`] is logged out.
    pub async fn restore(&mut self) -> Option<AdminUserView> {
        let record = match self.store.load().await {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read persisted session");
                return None;
            }
        };

        if !record.is_active {
            self.logout().await;
            return None;
        }

        let age = self.clock.now() - record.login_time;
        if age > SESSION_MAX_AGE {
            debug!(hours = age.whole_hours(), "persisted session expired");
            self.logout().await;
            return None;
        }

        self.current = Some(record.user.clone());
        Some(record.user)
    }

    fn log_last_login_failure(&self, err: &RepoError) {
        warn!(error = %err, "failed to update last_login (non-fatal)");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use time::macros::datetime;
    use uuid::Uuid;

    use crate::domain::entities::AdminUserRecord;
    use crate::infra::local::LocalStoreError;

    use super::*;

    struct FakeUsers {
        rows: Vec<AdminUserRecord>,
        fail_lookup: bool,
        fail_touch: bool,
        touched: Mutex<Vec<Uuid>>,
    }

    impl FakeUsers {
        fn with(rows: Vec<AdminUserRecord>) -> Self {
            Self {
                rows,
                fail_lookup: false,
                fail_touch: false,
                touched: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AdminUsersRepo for FakeUsers {
        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<AdminUserRecord>, RepoError> {
            if self.fail_lookup {
                return Err(RepoError::Connection("refused".to_string()));
            }
            let normalized = email.trim().to_lowercase();
            Ok(self
                .rows
                .iter()
                .find(|row| row.email == normalized)
                .cloned())
        }

        async fn touch_last_login(&self, id: Uuid) -> Result<(), RepoError> {
            if self.fail_touch {
                return Err(RepoError::Connection("refused".to_string()));
            }
            self.touched.lock().expect("lock").push(id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        record: Mutex<Option<SessionRecord>>,
    }

    #[async_trait]
    impl SessionStore for MemoryStore {
        async fn load(&self) -> Result<Option<SessionRecord>, LocalStoreError> {
            Ok(self.record.lock().expect("lock").clone())
        }

        async fn save(&self, record: &SessionRecord) -> Result<(), LocalStoreError> {
            *self.record.lock().expect("lock") = Some(record.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), LocalStoreError> {
            *self.record.lock().expect("lock") = None;
            Ok(())
        }
    }

    struct FixedClock(OffsetDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> OffsetDateTime {
            self.0
        }
    }

    const NOW: OffsetDateTime = datetime!(2025-06-15 12:00 UTC);

    fn admin_row() -> AdminUserRecord {
        AdminUserRecord {
            id: Uuid::from_u128(7),
            email: "real@x.com".to_string(),
            password_hash: "s3cret".to_string(),
            nombre: "Real Admin".to_string(),
            role: Some("owner".to_string()),
            active: Some(true),
            last_login: None,
        }
    }

    fn manager(users: FakeUsers, store: Arc<MemoryStore>) -> SessionManager {
        SessionManager::new(Arc::new(users), store, Arc::new(FixedClock(NOW)))
    }

    #[tokio::test]
    async fn login_persists_session_and_touches_last_login() {
        let store = Arc::new(MemoryStore::default());
        let mut sessions = manager(FakeUsers::with(vec![admin_row()]), store.clone());

        let view = sessions.login("Real@X.com ", "s3cret").await.expect("login");
        assert_eq!(view.nombre, "Real Admin");
        assert_eq!(view.role, "owner");
        assert!(sessions.is_active());

        let persisted = store.record.lock().expect("lock").clone().expect("record");
        assert!(persisted.is_active);
        assert_eq!(persisted.login_time, NOW);
        assert_eq!(persisted.user.id, Uuid::from_u128(7));
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_yield_identical_errors() {
        let store = Arc::new(MemoryStore::default());
        let mut sessions = manager(FakeUsers::with(vec![admin_row()]), store);

        let missing = sessions
            .login("nonexistent@x.com", "anything")
            .await
            .expect_err("unknown user");
        let wrong = sessions
            .login("real@x.com", "wrongpassword")
            .await
            .expect_err("wrong password");

        assert_eq!(missing, wrong);
        assert_eq!(missing, AuthError::InvalidCredentials);
        assert_eq!(missing.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn inactive_user_is_rejected_before_password_check() {
        let mut row = admin_row();
        row.active = Some(false);
        let store = Arc::new(MemoryStore::default());
        let mut sessions = manager(FakeUsers::with(vec![row]), store);

        let err = sessions.login("real@x.com", "s3cret").await.expect_err("inactive");
        assert_eq!(err, AuthError::InactiveUser);
    }

    #[tokio::test]
    async fn lookup_transport_failure_is_a_connection_error() {
        let mut users = FakeUsers::with(vec![admin_row()]);
        users.fail_lookup = true;
        let mut sessions = manager(users, Arc::new(MemoryStore::default()));

        let err = sessions.login("real@x.com", "s3cret").await.expect_err("down");
        assert_eq!(err, AuthError::Connection);
    }

    #[tokio::test]
    async fn last_login_failure_does_not_fail_login() {
        let mut users = FakeUsers::with(vec![admin_row()]);
        users.fail_touch = true;
        let mut sessions = manager(users, Arc::new(MemoryStore::default()));

        sessions
            .login("real@x.com", "s3cret")
            .await
            .expect("login despite last_login failure");
        assert!(sessions.is_active());
    }

    #[tokio::test]
    async fn empty_input_short_circuits() {
        let mut sessions = manager(
            FakeUsers::with(vec![admin_row()]),
            Arc::new(MemoryStore::default()),
        );
        assert_eq!(
            sessions.login("  ", "pw").await.expect_err("empty email"),
            AuthError::EmptyInput
        );
        assert_eq!(
            sessions.login("real@x.com", "").await.expect_err("empty password"),
            AuthError::EmptyInput
        );
    }

    #[tokio::test]
    async fn restore_rejects_sessions_older_than_24_hours() {
        let store = Arc::new(MemoryStore::default());
        *store.record.lock().expect("lock") = Some(SessionRecord {
            is_active: true,
            user: admin_row().view(),
            login_time: NOW - Duration::hours(25),
        });
        let mut sessions = manager(FakeUsers::with(vec![]), store.clone());

        assert!(sessions.restore().await.is_none());
        assert!(!sessions.is_active());
        assert!(store.record.lock().expect("lock").is_none());
    }

    #[tokio::test]
    async fn restore_accepts_recent_sessions() {
        let store = Arc::new(MemoryStore::default());
        *store.record.lock().expect("lock") = Some(SessionRecord {
            is_active: true,
            user: admin_row().view(),
            login_time: NOW - Duration::hours(1),
        });
        let mut sessions = manager(FakeUsers::with(vec![]), store);

        let view = sessions.restore().await.expect("active session");
        assert_eq!(view.email, "real@x.com");
        assert!(sessions.is_active());
    }

    #[tokio::test]
    async fn restore_drops_inactive_records() {
        let store = Arc::new(MemoryStore::default());
        *store.record.lock().expect("lock") = Some(SessionRecord {
            is_active: false,
            user: admin_row().view(),
            login_time: NOW,
        });
        let mut sessions = manager(FakeUsers::with(vec![]), store.clone());

        assert!(sessions.restore().await.is_none());
        assert!(store.record.lock().expect("lock").is_none());
    }

    #[tokio::test]
    async fn logout_clears_memory_and_store() {
        let store = Arc::new(MemoryStore::default());
        let mut sessions = manager(FakeUsers::with(vec![admin_row()]), store.clone());
        sessions.login("real@x.com", "s3cret").await.expect("login");

        sessions.logout().await;
        assert!(!sessions.is_active());
        assert!(store.record.lock().expect("lock").is_none());
    }
}
