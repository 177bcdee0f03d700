use super::{administration::record_admin_action, load_active_event, prelude::*};

pub fn verify_event<D>(db: &D, admin_id: &str, event_id: &str) -> Result<(Event, NotificationEvent)>
where
    D: UserRepo + EventRepo + AdminActionRepo,
{
    let admin = super::authorize_admin(db, admin_id)?;
    let mut event = load_active_event(db, event_id)?;
    if event.is_verified() {
        return Err(InvalidState::EventAlreadyVerified.into());
    }
    event.status = EventStatus::Verified;
    event.updated_at = Timestamp::now();
    db.update_event(&event)?;
    record_admin_action(db, &admin, AdminActionType::VerifyEvent, &event.id, None)?;
    log::info!("Event {} verified by {}", event.id, admin.username);
    let notification = NotificationEvent::EventVerified {
        title: event.title.clone(),
        creator_id: event.creator_id.clone(),
    };
    Ok((event, notification))
}

pub fn reject_event<D>(
    db: &D,
    admin_id: &str,
    event_id: &str,
    reason: &str,
) -> Result<(Event, NotificationEvent)>
where
    D: UserRepo + EventRepo + AdminActionRepo,
{
    let admin = super::authorize_admin(db, admin_id)?;
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(Error::EmptyReason);
    }
    let mut event = load_active_event(db, event_id)?;
    if event.status != EventStatus::Pending {
        return Err(InvalidState::EventNotPending.into());
    }
    event.status = EventStatus::Rejected;
    event.updated_at = Timestamp::now();
    db.update_event(&event)?;
    record_admin_action(
        db,
        &admin,
        AdminActionType::RejectEvent,
        &event.id,
        Some(reason.to_owned()),
    )?;
    log::info!("Event {} rejected by {}: {reason}", event.id, admin.username);
    let notification = NotificationEvent::EventRejected {
        title: event.title.clone(),
        creator_id: event.creator_id.clone(),
        reason: reason.to_owned(),
    };
    Ok((event, notification))
}

/// Remove any active event as administrator.
pub fn remove_event<D>(
    db: &D,
    admin_id: &str,
    event_id: &str,
    reason: Option<&str>,
) -> Result<(Event, NotificationEvent)>
where
    D: UserRepo + EventRepo + AdminActionRepo,
{
    let admin = super::authorize_admin(db, admin_id)?;
    let mut event = load_active_event(db, event_id)?;
    event.status = EventStatus::Removed;
    event.updated_at = Timestamp::now();
    db.update_event(&event)?;
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(ToOwned::to_owned);
    record_admin_action(db, &admin, AdminActionType::DeleteEvent, &event.id, reason)?;
    log::info!("Event {} removed by {}", event.id, admin.username);
    let notification = NotificationEvent::EventDeleted {
        title: event.title.clone(),
        creator_id: event.creator_id.clone(),
    };
    Ok((event, notification))
}
