//! PostgreSQL implementation of GuildSettingsRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use guildhall_core::entities::{GuildSettings, StaffRole};
use guildhall_core::traits::{GuildSettingsRepository, RepoResult};
use guildhall_core::value_objects::Snowflake;

use crate::mappers::{staff_roles_document, to_db_id};
use crate::models::GuildSettingsModel;

use super::error::map_db_error;

const RETURNING_COLUMNS: &str =
    "guild_id, staff_roles, log_channel_id, last_updated_by, created_at, updated_at";

/// PostgreSQL implementation of GuildSettingsRepository
#[derive(Clone)]
pub struct PgGuildSettingsRepository {
    pool: PgPool,
}

impl PgGuildSettingsRepository {
    /// Create a new PgGuildSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildSettingsRepository for PgGuildSettingsRepository {
    #[instrument(skip(self))]
    async fn find_by_guild(&self, guild_id: Snowflake) -> RepoResult<Option<GuildSettings>> {
        let result = sqlx::query_as::<_, GuildSettingsModel>(&format!(
            "SELECT {RETURNING_COLUMNS} FROM guild_settings WHERE guild_id = $1"
        ))
        .bind(to_db_id(guild_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(GuildSettings::try_from).transpose()
    }

    #[instrument(skip(self, staff_roles), fields(count = staff_roles.len()))]
    async fn upsert_staff_roles(
        &self,
        guild_id: Snowflake,
        staff_roles: &[StaffRole],
        updated_by: &str,
    ) -> RepoResult<GuildSettings> {
        let model = sqlx::query_as::<_, GuildSettingsModel>(&format!(
            r#"
            INSERT INTO guild_settings (guild_id, staff_roles, last_updated_by)
            VALUES ($1, $2, $3)
            ON CONFLICT (guild_id) DO UPDATE
            SET staff_roles = EXCLUDED.staff_roles,
                last_updated_by = EXCLUDED.last_updated_by,
                updated_at = NOW()
            RETURNING {RETURNING_COLUMNS}
            "#
        ))
        .bind(to_db_id(guild_id))
        .bind(Json(staff_roles_document(staff_roles)))
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        GuildSettings::try_from(model)
    }

    #[instrument(skip(self))]
    async fn upsert_log_channel(
        &self,
        guild_id: Snowflake,
        channel_id: Option<Snowflake>,
        updated_by: &str,
    ) -> RepoResult<GuildSettings> {
        let model = sqlx::query_as::<_, GuildSettingsModel>(&format!(
            r#"
            INSERT INTO guild_settings (guild_id, log_channel_id, last_updated_by)
            VALUES ($1, $2, $3)
            ON CONFLICT (guild_id) DO UPDATE
            SET log_channel_id = EXCLUDED.log_channel_id,
                last_updated_by = EXCLUDED.last_updated_by,
                updated_at = NOW()
            RETURNING {RETURNING_COLUMNS}
            "#
        ))
        .bind(to_db_id(guild_id))
        .bind(channel_id.map(to_db_id))
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        GuildSettings::try_from(model)
    }
}
