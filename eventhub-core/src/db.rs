use crate::repositories::*;

/// The entity store with access to all repositories.
pub trait Db:
    UserRepo
    + EventRepo
    + TagRepo
    + ParticipantRepo
    + CommentRepo
    + CommentVoteRepo
    + NotificationRepo
    + AdminActionRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + EventRepo
        + TagRepo
        + ParticipantRepo
        + CommentRepo
        + CommentVoteRepo
        + NotificationRepo
        + AdminActionRepo
{
}
