use super::*;

#[get("/notifications")]
pub fn get_notifications(
    connections: &State<Connections>,
    account: Account,
) -> Result<Vec<json::Notification>> {
    let notifications = usecases::notifications_of_user(&connections.shared()?, account.id())?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

#[get("/notifications/unread-count")]
pub fn get_unread_count(
    connections: &State<Connections>,
    account: Account,
) -> Result<json::Count> {
    let count = usecases::count_unread_notifications(&connections.shared()?, account.id())?;
    Ok(Json(json::Count {
        count: count as u64,
    }))
}

#[put("/notifications/<id>/read")]
pub fn put_notification_read(
    connections: &State<Connections>,
    account: Account,
    id: &str,
) -> Result<()> {
    flows::mark_notification_as_read(connections, account.id(), id)?;
    Ok(Json(()))
}

#[post("/notifications/mark-all-read")]
pub fn post_mark_all_read(
    connections: &State<Connections>,
    account: Account,
) -> Result<json::Count> {
    let count = flows::mark_all_notifications_as_read(connections, account.id())?;
    Ok(Json(json::Count {
        count: count as u64,
    }))
}
