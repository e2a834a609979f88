//! Guild settings entity <-> model mapper

use guildhall_core::entities::{GuildSettings, StaffRole};
use guildhall_core::error::DomainError;
use guildhall_core::value_objects::Snowflake;

use crate::models::{GuildSettingsModel, StaffRoleDocument};

use super::ids::from_db_id;

impl From<&StaffRole> for StaffRoleDocument {
    fn from(role: &StaffRole) -> Self {
        Self {
            id: role.id.to_string(),
            name: role.name.clone(),
            color: role.color,
            position: role.position,
        }
    }
}

impl TryFrom<StaffRoleDocument> for StaffRole {
    type Error = DomainError;

    fn try_from(doc: StaffRoleDocument) -> Result<Self, Self::Error> {
        let id = Snowflake::parse(&doc.id).map_err(|_| {
            DomainError::DatabaseError(format!("Corrupt staff role id in settings: {:?}", doc.id))
        })?;

        Ok(Self {
            id,
            name: doc.name,
            color: doc.color,
            position: doc.position,
        })
    }
}

/// Convert GuildSettingsModel to GuildSettings entity
impl TryFrom<GuildSettingsModel> for GuildSettings {
    type Error = DomainError;

    fn try_from(model: GuildSettingsModel) -> Result<Self, Self::Error> {
        let staff_roles = model
            .staff_roles
            .0
            .into_iter()
            .map(StaffRole::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            guild_id: from_db_id(model.guild_id),
            staff_roles,
            log_channel_id: model.log_channel_id.map(from_db_id),
            last_updated_by: model.last_updated_by,
            updated_at: model.updated_at,
        })
    }
}

/// Staff role list prepared for the JSONB column
pub fn staff_roles_document(roles: &[StaffRole]) -> Vec<StaffRoleDocument> {
    roles.iter().map(StaffRoleDocument::from).collect()
}
