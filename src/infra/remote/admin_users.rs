use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::repos::{AdminUsersRepo, RepoError},
    domain::entities::AdminUserRecord,
};

use super::{RemoteRepositories, eq, map_remote_error, utc_now_string};

const TABLE: &str = "admin_users";

#[async_trait]
impl AdminUsersRepo for RemoteRepositories {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUserRecord>, RepoError> {
        let normalized = email.trim().to_lowercase();
        let query = [("select", "*".to_string()), ("email", eq(&normalized))];
        let mut rows: Vec<AdminUserRecord> = self
            .client()
            .select(TABLE, &query)
            .await
            .map_err(map_remote_error)?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn touch_last_login(&self, id: Uuid) -> Result<(), RepoError> {
        let body = json!({ "last_login": utc_now_string()? });
        self.client()
            .update_unit(TABLE, &[("id", eq(id))], &body)
            .await
            .map_err(map_remote_error)
    }
}
