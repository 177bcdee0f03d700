use super::*;

pub fn join_event(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    account_id: &str,
    event_id: &str,
) -> Result<Participant> {
    // The exclusive connection serializes the capacity check
    // with the insertion of concurrent joins.
    let (participant, notification) = connections
        .exclusive()?
        .transaction(|conn| usecases::join_event(conn, account_id, event_id))?;
    debug!("User {account_id} joined event {event_id}");
    notify.notify(notification);
    Ok(participant)
}

pub fn cancel_participation(
    connections: &sqlite::Connections,
    account_id: &str,
    event_id: &str,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::cancel_participation(conn, account_id, event_id))?;
    debug!("User {account_id} cancelled the participation in event {event_id}");
    Ok(())
}
