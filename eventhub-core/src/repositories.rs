// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    // Newest first
    fn all_users(&self) -> Result<Vec<User>>;
    fn users_with_role(&self, role: Role) -> Result<Vec<User>>;

    fn count_users(&self) -> Result<usize>;
    fn count_users_created_since(&self, since: Timestamp) -> Result<usize>;
    fn count_users_online_since(&self, since: Timestamp) -> Result<usize>;
}

#[derive(Debug, Default, Clone)]
pub struct EventQuery {
    // status = None: all events independent of their status
    pub status: Option<Vec<EventStatus>>,
    // empty = any type
    pub types: Vec<EventType>,
    pub created_by: Option<Id>,
    pub starts_at_or_after: Option<Timestamp>, // lower bound (inclusive)
    pub starts_before: Option<Timestamp>,      // upper bound (exclusive)
    pub tag_slug: Option<String>,
}

pub trait EventRepo {
    // Stores the event together with its tag
    // associations and media. Tags must exist.
    fn create_event(&self, event: &Event) -> Result<()>;
    fn update_event(&self, event: &Event) -> Result<()>;

    // Regardless of the status
    fn get_event(&self, id: &str) -> Result<Event>;
    // Newest first
    fn query_events(&self, query: &EventQuery) -> Result<Vec<Event>>;

    fn count_events(&self) -> Result<usize>;
    fn count_events_with_status(&self, status: &[EventStatus]) -> Result<usize>;
    fn count_events_created_by(&self, creator_id: &str, status: &[EventStatus]) -> Result<usize>;

    // Events with the most participants that are going,
    // in descending order.
    fn most_joined_events(
        &self,
        status: &[EventStatus],
        limit: usize,
    ) -> Result<Vec<(Event, usize)>>;
}

pub trait TagRepo {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()>;
    fn try_get_tag_by_name(&self, name: &str) -> Result<Option<Tag>>;
    fn all_tags(&self) -> Result<Vec<Tag>>;
}

pub trait ParticipantRepo {
    // Insert or replace the record of (event_id, user_id)
    fn save_participant(&self, participant: &Participant) -> Result<()>;
    fn try_get_participant(&self, event_id: &str, user_id: &str) -> Result<Option<Participant>>;

    // Oldest first
    fn participants_of_event(
        &self,
        event_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>>;
    // Most recently joined first
    fn participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<Vec<Participant>>;

    fn count_participants(&self, event_id: &str, status: ParticipationStatus) -> Result<usize>;
    fn count_participations_of_user(
        &self,
        user_id: &str,
        status: ParticipationStatus,
    ) -> Result<usize>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<()>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;

    // Including deleted comments
    fn get_comment(&self, id: &str) -> Result<Comment>;
    // Including deleted comments, oldest first
    fn comments_of_event(&self, event_id: &str) -> Result<Vec<Comment>>;

    fn count_comments_with_status(&self, status: CommentStatus) -> Result<usize>;
    fn count_comments_of_user(&self, user_id: &str, status: CommentStatus) -> Result<usize>;
    // 0 if the user has no comments
    fn sum_comment_scores_of_user(&self, user_id: &str, status: CommentStatus) -> Result<i64>;
}

pub trait CommentVoteRepo {
    // Insert or replace the vote of (comment_id, user_id)
    fn save_vote(&self, vote: &CommentVote) -> Result<()>;
    fn delete_vote(&self, comment_id: &str, user_id: &str) -> Result<()>;
    fn try_get_vote(&self, comment_id: &str, user_id: &str) -> Result<Option<CommentVote>>;

    fn tally_votes(&self, comment_id: &str) -> Result<VoteTally>;
}

pub trait NotificationRepo {
    fn create_notification(&self, notification: &Notification) -> Result<()>;

    // Newest first
    fn notifications_of_user(&self, user_id: &str) -> Result<Vec<Notification>>;

    // Err(NotFound) if the notification doesn't exist
    // or belongs to another user.
    fn mark_notification_as_read(&self, user_id: &str, id: &str) -> Result<()>;
    fn mark_all_notifications_as_read(&self, user_id: &str) -> Result<usize>;

    fn count_unread_notifications(&self, user_id: &str) -> Result<usize>;
}

pub trait AdminActionRepo {
    fn log_admin_action(&self, action: &AdminAction) -> Result<()>;

    // Newest first
    fn all_admin_actions(&self) -> Result<Vec<AdminAction>>;
}
