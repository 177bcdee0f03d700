use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    account_id: &str,
    event_id: &str,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    let (comment, notification) = connections
        .exclusive()?
        .transaction(|conn| usecases::create_comment(conn, account_id, event_id, new_comment))?;
    notify.notify(notification);
    Ok(comment)
}

pub fn update_comment(
    connections: &sqlite::Connections,
    account_id: &str,
    comment_id: &str,
    content: &str,
) -> Result<Comment> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_comment(conn, account_id, comment_id, content))?)
}

pub fn delete_comment(
    connections: &sqlite::Connections,
    account_id: &str,
    comment_id: &str,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_comment(conn, account_id, comment_id))?;
    Ok(())
}

/// Toggle a vote and update the score within the same transaction.
pub fn vote_comment(
    connections: &sqlite::Connections,
    account_id: &str,
    comment_id: &str,
    vote_type: VoteType,
) -> Result<usecases::VoteResult> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::vote_comment(conn, account_id, comment_id, vote_type))?)
}
