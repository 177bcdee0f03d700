use crate::entities::*;

pub use crate::entities::NotificationType;

/// State transitions that notify other users as a side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    EventCreated {
        title: String,
        creator_id: Id,
        admin_ids: Vec<Id>,
    },
    EventVerified {
        title: String,
        creator_id: Id,
    },
    EventRejected {
        title: String,
        creator_id: Id,
        reason: String,
    },
    EventDeleted {
        title: String,
        creator_id: Id,
    },
    EventJoined {
        title: String,
        creator_id: Id,
        participant_id: Id,
        participant_name: String,
    },
    CommentCreated {
        title: String,
        event_creator_id: Id,
        author_id: Id,
        author_name: String,
        parent_author_id: Option<Id>,
    },
    CommentDeleted {
        title: String,
        author_id: Id,
    },
    UserBlocked {
        user_id: Id,
    },
}

impl NotificationEvent {
    /// Expand the event into one notification per recipient.
    ///
    /// Users are never notified about their own actions and
    /// every recipient receives at most one notification.
    pub fn into_notifications(self, created_at: Timestamp) -> Vec<Notification> {
        use NotificationEvent as E;
        use NotificationType as T;
        let mut notices = Vec::with_capacity(1);
        match self {
            E::EventCreated {
                title,
                creator_id,
                admin_ids,
            } => {
                let message = format!("New event created: {title}");
                for admin_id in admin_ids {
                    if admin_id != creator_id && !notices.iter().any(|(id, _, _)| *id == admin_id)
                    {
                        notices.push((admin_id, T::EventCreated, message.clone()));
                    }
                }
            }
            E::EventVerified { title, creator_id } => {
                let message = format!("Your event \"{title}\" was verified by an administrator");
                notices.push((creator_id, T::EventVerified, message));
            }
            E::EventRejected {
                title,
                creator_id,
                reason,
            } => {
                let message = format!(
                    "Your event \"{title}\" was rejected by an administrator. Reason: {reason}"
                );
                notices.push((creator_id, T::EventRejected, message));
            }
            E::EventDeleted { title, creator_id } => {
                let message = format!("Your event \"{title}\" was deleted by an administrator");
                notices.push((creator_id, T::EventDeleted, message));
            }
            E::EventJoined {
                title,
                creator_id,
                participant_id,
                participant_name,
            } => {
                if creator_id != participant_id {
                    let message = format!("{participant_name} joined your event: {title}");
                    notices.push((creator_id, T::Participation, message));
                }
            }
            E::CommentCreated {
                title,
                event_creator_id,
                author_id,
                author_name,
                parent_author_id,
            } => {
                if event_creator_id != author_id {
                    let message = format!("{author_name} commented on your event: {title}");
                    notices.push((event_creator_id.clone(), T::CommentAdded, message));
                }
                if let Some(parent_author_id) = parent_author_id {
                    if parent_author_id != author_id && parent_author_id != event_creator_id {
                        let message =
                            format!("{author_name} replied to your comment on the event: {title}");
                        notices.push((parent_author_id, T::CommentReply, message));
                    }
                }
            }
            E::CommentDeleted { title, author_id } => {
                let message =
                    format!("Your comment on the event \"{title}\" was deleted by an administrator");
                notices.push((author_id, T::System, message));
            }
            E::UserBlocked { user_id } => {
                let message = "Your account was blocked by an administrator".to_string();
                notices.push((user_id, T::System, message));
            }
        }
        notices
            .into_iter()
            .map(|(user_id, notification_type, message)| Notification {
                id: Id::new(),
                user_id,
                message,
                notification_type,
                is_read: false,
                created_at,
            })
            .collect()
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}

/// Durable storage for delivered notifications.
pub trait NotificationStore {
    fn store_notifications(&self, notifications: &[Notification]) -> anyhow::Result<()>;
}
