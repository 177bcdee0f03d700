use super::*;
use eventhub_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role as E;
        match from {
            E::User => Self::User,
            E::Admin => Self::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        match from {
            UserRole::User => Self::User,
            UserRole::Admin => Self::Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let is_blocked = from.is_blocked();
        let e::user::User {
            id,
            username,
            email,
            password: _,
            role,
            avatar_url,
            status: _,
            last_online,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            username,
            email,
            role: role.into(),
            avatar_url,
            is_blocked,
            last_online: last_online.map(Into::into),
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }
}

impl From<e::user::User> for UserShort {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            email,
            role,
            ..
        } = from;
        Self {
            id: id.into(),
            username,
            email,
            role: role.into(),
        }
    }
}

impl From<e::event::EventType> for EventType {
    fn from(from: e::event::EventType) -> Self {
        use e::event::EventType as E;
        match from {
            E::Concert => Self::Concert,
            E::Exhibition => Self::Exhibition,
            E::Meetup => Self::Meetup,
            E::Workshop => Self::Workshop,
            E::Sport => Self::Sport,
            E::Festival => Self::Festival,
            E::Other => Self::Other,
        }
    }
}

impl From<EventType> for e::event::EventType {
    fn from(from: EventType) -> Self {
        match from {
            EventType::Concert => Self::Concert,
            EventType::Exhibition => Self::Exhibition,
            EventType::Meetup => Self::Meetup,
            EventType::Workshop => Self::Workshop,
            EventType::Sport => Self::Sport,
            EventType::Festival => Self::Festival,
            EventType::Other => Self::Other,
        }
    }
}

impl From<e::tag::Tag> for Tag {
    fn from(from: e::tag::Tag) -> Self {
        let e::tag::Tag { id, name, slug, .. } = from;
        Self {
            id: id.into(),
            name,
            slug,
        }
    }
}

impl From<e::event::Media> for Media {
    fn from(from: e::event::Media) -> Self {
        let e::event::Media {
            id,
            file_url,
            file_type,
            order_index,
        } = from;
        Self {
            id: id.into(),
            file_url,
            file_type,
            order_index,
        }
    }
}

/// The creator and the number of participants are
/// not part of the entity and must be added afterwards.
impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let is_verified = from.is_verified();
        let is_active = from.is_active();
        let e::event::Event {
            id,
            title,
            description,
            event_date,
            location,
            event_type,
            max_participants,
            price,
            address,
            status: _,
            creator_id,
            created_at,
            updated_at,
            tags,
            media,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            event_date: event_date.into(),
            latitude: location.lat,
            longitude: location.lon,
            event_type: event_type.into(),
            max_participants,
            price,
            address,
            is_verified,
            is_active,
            creator_id: creator_id.into(),
            creator: None,
            participants_count: 0,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            media: media.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::participant::ParticipationStatus> for ParticipationStatus {
    fn from(from: e::participant::ParticipationStatus) -> Self {
        use e::participant::ParticipationStatus as E;
        match from {
            E::Going => Self::Going,
            E::Declined => Self::Declined,
        }
    }
}

impl From<e::participant::Participant> for Participant {
    fn from(from: e::participant::Participant) -> Self {
        let e::participant::Participant {
            event_id,
            user_id,
            status,
            joined_at,
        } = from;
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            status: status.into(),
            joined_at: joined_at.into(),
            user: None,
        }
    }
}

impl From<e::comment::VoteType> for VoteType {
    fn from(from: e::comment::VoteType) -> Self {
        use e::comment::VoteType as E;
        match from {
            E::Upvote => Self::Upvote,
            E::Downvote => Self::Downvote,
        }
    }
}

impl From<VoteType> for e::comment::VoteType {
    fn from(from: VoteType) -> Self {
        match from {
            VoteType::Upvote => Self::Upvote,
            VoteType::Downvote => Self::Downvote,
        }
    }
}

/// Author and replies are added afterwards.
impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let is_deleted = from.is_deleted();
        let e::comment::Comment {
            id,
            event_id,
            user_id,
            parent_id,
            content,
            score,
            status: _,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            // The content of deleted comments is never exposed
            content: if is_deleted { String::new() } else { content },
            event_id: event_id.into(),
            user_id: user_id.into(),
            parent_id: parent_id.map(Into::into),
            score,
            is_deleted,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
            user: None,
            replies: vec![],
        }
    }
}

impl From<e::notification::NotificationType> for NotificationType {
    fn from(from: e::notification::NotificationType) -> Self {
        use e::notification::NotificationType as E;
        match from {
            E::EventCreated => Self::EventCreated,
            E::EventVerified => Self::EventVerified,
            E::EventRejected => Self::EventRejected,
            E::EventDeleted => Self::EventDeleted,
            E::CommentAdded => Self::CommentAdded,
            E::CommentReply => Self::CommentReply,
            E::Participation => Self::Participation,
            E::System => Self::System,
        }
    }
}

impl From<e::notification::Notification> for Notification {
    fn from(from: e::notification::Notification) -> Self {
        let e::notification::Notification {
            id,
            user_id,
            message,
            notification_type,
            is_read,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            message,
            notification_type: notification_type.into(),
            read: is_read,
            created_at: created_at.into(),
        }
    }
}

impl From<e::admin_action::AdminAction> for AdminAction {
    fn from(from: e::admin_action::AdminAction) -> Self {
        let e::admin_action::AdminAction {
            id,
            admin_id,
            action_type,
            target_id,
            target_type,
            reason,
            performed_at,
        } = from;
        Self {
            id: id.into(),
            admin_id: admin_id.into(),
            action_type: action_type.to_string(),
            target_id: target_id.into(),
            target_type: target_type.to_string(),
            reason,
            performed_at: performed_at.into(),
        }
    }
}
