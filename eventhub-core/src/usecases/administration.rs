use super::prelude::*;

/// Append an entry to the moderation audit log.
pub(crate) fn record_admin_action<R: AdminActionRepo>(
    repo: &R,
    admin: &User,
    action_type: AdminActionType,
    target_id: &Id,
    reason: Option<String>,
) -> Result<AdminAction> {
    let action = AdminAction {
        id: Id::new(),
        admin_id: admin.id.clone(),
        action_type,
        target_id: target_id.clone(),
        target_type: action_type.target_type(),
        reason,
        performed_at: Timestamp::now(),
    };
    repo.log_admin_action(&action)?;
    Ok(action)
}

/// All events regardless of their status, newest first.
pub fn all_events<D>(db: &D, admin_id: &str) -> Result<Vec<Event>>
where
    D: UserRepo + EventRepo,
{
    super::authorize_admin(db, admin_id)?;
    Ok(db.query_events(&EventQuery::default())?)
}

pub fn all_users<R: UserRepo>(repo: &R, admin_id: &str) -> Result<Vec<User>> {
    super::authorize_admin(repo, admin_id)?;
    Ok(repo.all_users()?)
}

pub(crate) fn query_pending_events<R: EventRepo>(repo: &R) -> Result<Vec<Event>> {
    let query = EventQuery {
        status: Some(vec![EventStatus::Pending]),
        ..Default::default()
    };
    Ok(repo.query_events(&query)?)
}

/// Events that are waiting for verification.
pub fn pending_events<D>(db: &D, admin_id: &str) -> Result<Vec<Event>>
where
    D: UserRepo + EventRepo,
{
    super::authorize_admin(db, admin_id)?;
    query_pending_events(db)
}

/// The audit log, newest first.
pub fn admin_actions<D>(db: &D, admin_id: &str) -> Result<Vec<AdminAction>>
where
    D: UserRepo + AdminActionRepo,
{
    super::authorize_admin(db, admin_id)?;
    Ok(db.all_admin_actions()?)
}
