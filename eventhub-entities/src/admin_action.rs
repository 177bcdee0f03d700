use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// An entry of the append-only moderation audit log.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAction {
    pub id           : Id,
    pub admin_id     : Id,
    pub action_type  : AdminActionType,
    pub target_id    : Id,
    pub target_type  : TargetType,
    pub reason       : Option<String>,
    pub performed_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AdminActionType {
    VerifyEvent,
    RejectEvent,
    DeleteEvent,
    BlockUser,
    UnblockUser,
    DeleteComment,
}

impl AdminActionType {
    pub const fn target_type(self) -> TargetType {
        match self {
            Self::VerifyEvent | Self::RejectEvent | Self::DeleteEvent => TargetType::Event,
            Self::BlockUser | Self::UnblockUser => TargetType::User,
            Self::DeleteComment => TargetType::Comment,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TargetType {
    Event,
    User,
    Comment,
}
