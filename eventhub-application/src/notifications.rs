use super::*;

pub fn mark_notification_as_read(
    connections: &sqlite::Connections,
    account_id: &str,
    notification_id: &str,
) -> Result<()> {
    connections.exclusive()?.transaction(|conn| {
        usecases::mark_notification_as_read(conn, account_id, notification_id)
    })?;
    Ok(())
}

pub fn mark_all_notifications_as_read(
    connections: &sqlite::Connections,
    account_id: &str,
) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::mark_all_notifications_as_read(conn, account_id))?)
}
