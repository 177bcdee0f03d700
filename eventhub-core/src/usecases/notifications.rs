use super::prelude::*;

pub fn notifications_of_user<R: NotificationRepo>(
    repo: &R,
    account_id: &str,
) -> Result<Vec<Notification>> {
    Ok(repo.notifications_of_user(account_id)?)
}

/// Mark a single notification as read.
///
/// Notifications of other users are reported as not found.
pub fn mark_notification_as_read<R: NotificationRepo>(
    repo: &R,
    account_id: &str,
    notification_id: &str,
) -> Result<()> {
    Ok(repo.mark_notification_as_read(account_id, notification_id)?)
}

pub fn mark_all_notifications_as_read<R: NotificationRepo>(
    repo: &R,
    account_id: &str,
) -> Result<usize> {
    let count = repo.mark_all_notifications_as_read(account_id)?;
    log::debug!("Marked {count} notification(s) of {account_id} as read");
    Ok(count)
}

pub fn count_unread_notifications<R: NotificationRepo>(repo: &R, account_id: &str) -> Result<usize> {
    Ok(repo.count_unread_notifications(account_id)?)
}

/// Persist the notifications of an event on behalf of the dispatcher.
pub fn store_notifications<R: NotificationRepo>(
    repo: &R,
    notifications: &[Notification],
) -> Result<()> {
    for notification in notifications {
        repo.create_notification(notification)?;
    }
    Ok(())
}
