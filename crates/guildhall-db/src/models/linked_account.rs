//! Linked account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for linked_accounts table
#[derive(Clone, FromRow)]
pub struct LinkedAccountModel {
    pub user_id: String,
    pub provider: String,
    pub provider_account_id: i64,
    pub access_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}
