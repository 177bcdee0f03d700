use super::*;

pub fn verify_event(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    admin_id: &str,
    event_id: &str,
) -> Result<Event> {
    let (event, notification) = connections
        .exclusive()?
        .transaction(|conn| usecases::verify_event(conn, admin_id, event_id))?;
    notify.notify(notification);
    Ok(event)
}

pub fn reject_event(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    admin_id: &str,
    event_id: &str,
    reason: &str,
) -> Result<Event> {
    let (event, notification) = connections
        .exclusive()?
        .transaction(|conn| usecases::reject_event(conn, admin_id, event_id, reason))?;
    notify.notify(notification);
    Ok(event)
}

pub fn remove_event(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    admin_id: &str,
    event_id: &str,
    reason: Option<&str>,
) -> Result<Event> {
    let (event, notification) = connections
        .exclusive()?
        .transaction(|conn| usecases::remove_event(conn, admin_id, event_id, reason))?;
    notify.notify(notification);
    Ok(event)
}

pub fn block_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    admin_id: &str,
    user_id: &str,
    reason: Option<&str>,
) -> Result<User> {
    let (user, notification) = connections
        .exclusive()?
        .transaction(|conn| usecases::block_user(conn, admin_id, user_id, reason))?;
    notify.notify(notification);
    Ok(user)
}

pub fn unblock_user(
    connections: &sqlite::Connections,
    admin_id: &str,
    user_id: &str,
) -> Result<User> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::unblock_user(conn, admin_id, user_id))?)
}

pub fn remove_comment(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    admin_id: &str,
    comment_id: &str,
    reason: Option<&str>,
) -> Result<Comment> {
    let (comment, notification) = connections
        .exclusive()?
        .transaction(|conn| usecases::remove_comment(conn, admin_id, comment_id, reason))?;
    notify.notify(notification);
    Ok(comment)
}
