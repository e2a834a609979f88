//! Channel entity - guild channels as listed by the platform

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Channel kind, tagged from the platform's integer enumeration
///
/// Unrecognised values are preserved as `Other` so that a channel kind the
/// platform introduces later is never mistaken for a known one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ChannelKind {
    GuildText,
    Dm,
    GuildVoice,
    GroupDm,
    GuildCategory,
    GuildAnnouncement,
    AnnouncementThread,
    PublicThread,
    PrivateThread,
    GuildStageVoice,
    GuildDirectory,
    GuildForum,
    GuildMedia,
    Other(i64),
}

impl ChannelKind {
    /// Channel kinds that may receive log and announcement posts
    pub const LOG_TARGETS: [ChannelKind; 2] = [ChannelKind::GuildText, ChannelKind::GuildAnnouncement];

    /// Check if channels of this kind are valid log targets
    #[inline]
    pub fn is_log_target(self) -> bool {
        Self::LOG_TARGETS.contains(&self)
    }
}

impl From<i64> for ChannelKind {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::GuildText,
            1 => Self::Dm,
            2 => Self::GuildVoice,
            3 => Self::GroupDm,
            4 => Self::GuildCategory,
            5 => Self::GuildAnnouncement,
            10 => Self::AnnouncementThread,
            11 => Self::PublicThread,
            12 => Self::PrivateThread,
            13 => Self::GuildStageVoice,
            14 => Self::GuildDirectory,
            15 => Self::GuildForum,
            16 => Self::GuildMedia,
            other => Self::Other(other),
        }
    }
}

impl From<ChannelKind> for i64 {
    fn from(kind: ChannelKind) -> Self {
        match kind {
            ChannelKind::GuildText => 0,
            ChannelKind::Dm => 1,
            ChannelKind::GuildVoice => 2,
            ChannelKind::GroupDm => 3,
            ChannelKind::GuildCategory => 4,
            ChannelKind::GuildAnnouncement => 5,
            ChannelKind::AnnouncementThread => 10,
            ChannelKind::PublicThread => 11,
            ChannelKind::PrivateThread => 12,
            ChannelKind::GuildStageVoice => 13,
            ChannelKind::GuildDirectory => 14,
            ChannelKind::GuildForum => 15,
            ChannelKind::GuildMedia => 16,
            ChannelKind::Other(value) => value,
        }
    }
}

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub name: String,
    pub kind: ChannelKind,
    pub position: i32,
    pub parent_id: Option<Snowflake>,
}

impl Channel {
    /// Create a new channel
    pub fn new(id: Snowflake, name: String, kind: ChannelKind) -> Self {
        Self {
            id,
            name,
            kind,
            position: 0,
            parent_id: None,
        }
    }
}

/// Keep only channels that are valid log targets, in their original order
pub fn filter_log_channels(channels: Vec<Channel>) -> Vec<Channel> {
    channels
        .into_iter()
        .filter(|channel| channel.kind.is_log_target())
        .collect()
}
