//! Payload -> entity conversions

use guildhall_core::{Channel, GuildDetail, GuildSummary, Role};

use crate::models::{ChannelPayload, GuildPayload, PartialGuildPayload, RolePayload};

impl From<PartialGuildPayload> for GuildSummary {
    fn from(payload: PartialGuildPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            icon: payload.icon,
            owner: payload.owner,
            permissions: payload.permissions,
            features: payload.features,
        }
    }
}

impl From<GuildPayload> for GuildDetail {
    fn from(payload: GuildPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            icon: payload.icon,
            approximate_member_count: payload.approximate_member_count,
            approximate_presence_count: payload.approximate_presence_count,
        }
    }
}

impl From<RolePayload> for Role {
    fn from(payload: RolePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            color: payload.color,
            position: payload.position,
            permissions: payload.permissions,
            managed: payload.managed,
        }
    }
}

impl From<ChannelPayload> for Channel {
    fn from(payload: ChannelPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name.unwrap_or_default(),
            kind: payload.kind,
            position: payload.position,
            parent_id: payload.parent_id,
        }
    }
}
