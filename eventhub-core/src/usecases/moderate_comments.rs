use super::{administration::record_admin_action, delete_comment::mark_comment_as_deleted, prelude::*};

/// Soft delete any comment as administrator and inform its author.
pub fn remove_comment<D>(
    db: &D,
    admin_id: &str,
    comment_id: &str,
    reason: Option<&str>,
) -> Result<(Comment, NotificationEvent)>
where
    D: UserRepo + EventRepo + CommentRepo + AdminActionRepo,
{
    let admin = super::authorize_admin(db, admin_id)?;
    let comment = mark_comment_as_deleted(db, db.get_comment(comment_id)?)?;
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(ToOwned::to_owned);
    record_admin_action(db, &admin, AdminActionType::DeleteComment, &comment.id, reason)?;
    log::info!("Comment {} removed by {}", comment.id, admin.username);
    let title = match db.get_event(comment.event_id.as_str()) {
        Ok(event) => event.title,
        Err(RepoError::NotFound) => String::new(),
        Err(err) => return Err(err.into()),
    };
    let notification = NotificationEvent::CommentDeleted {
        title,
        author_id: comment.user_id.clone(),
    };
    Ok((comment, notification))
}
