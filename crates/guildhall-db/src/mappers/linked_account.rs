//! Linked account model -> entity mapper

use guildhall_core::entities::LinkedAccount;

use crate::models::LinkedAccountModel;

use super::ids::from_db_id;

impl From<LinkedAccountModel> for LinkedAccount {
    fn from(model: LinkedAccountModel) -> Self {
        Self {
            user_id: model.user_id,
            provider: model.provider,
            provider_account_id: from_db_id(model.provider_account_id),
            access_token: model.access_token,
            expires_at: model.expires_at,
        }
    }
}
