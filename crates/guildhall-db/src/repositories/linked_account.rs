//! PostgreSQL implementation of LinkedAccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guildhall_core::entities::LinkedAccount;
use guildhall_core::traits::{LinkedAccountRepository, RepoResult};

use crate::models::LinkedAccountModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LinkedAccountRepository
#[derive(Clone)]
pub struct PgLinkedAccountRepository {
    pool: PgPool,
}

impl PgLinkedAccountRepository {
    /// Create a new PgLinkedAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkedAccountRepository for PgLinkedAccountRepository {
    #[instrument(skip(self))]
    async fn find_linked_account(
        &self,
        user_id: &str,
        provider: &str,
    ) -> RepoResult<Option<LinkedAccount>> {
        let result = sqlx::query_as::<_, LinkedAccountModel>(
            r#"
            SELECT user_id, provider, provider_account_id, access_token, expires_at
            FROM linked_accounts
            WHERE user_id = $1 AND provider = $2
            "#,
        )
        .bind(user_id)
        .bind(provider)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(LinkedAccount::from))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
