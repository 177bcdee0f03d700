use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id                : Id,
    pub user_id           : Id,
    pub message           : String,
    pub notification_type : NotificationType,
    pub is_read           : bool,
    pub created_at        : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationType {
    EventCreated,
    EventVerified,
    EventRejected,
    EventDeleted,
    CommentAdded,
    CommentReply,
    Participation,
    System,
}
