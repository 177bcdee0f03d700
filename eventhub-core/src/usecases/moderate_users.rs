use super::{administration::record_admin_action, prelude::*};

fn load_user<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    Ok(repo.get_user(user_id)?)
}

pub fn block_user<D>(
    db: &D,
    admin_id: &str,
    user_id: &str,
    reason: Option<&str>,
) -> Result<(User, NotificationEvent)>
where
    D: UserRepo + AdminActionRepo,
{
    let admin = super::authorize_admin(db, admin_id)?;
    let mut user = load_user(db, user_id)?;
    if user.id == admin.id {
        // Admins must not lock themselves out
        return Err(Error::Forbidden);
    }
    if user.is_blocked() {
        return Err(InvalidState::UserAlreadyBlocked.into());
    }
    user.status = AccountStatus::Blocked;
    user.updated_at = Timestamp::now();
    db.update_user(&user)?;
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(ToOwned::to_owned);
    record_admin_action(db, &admin, AdminActionType::BlockUser, &user.id, reason)?;
    log::info!("User {} blocked by {}", user.username, admin.username);
    let notification = NotificationEvent::UserBlocked {
        user_id: user.id.clone(),
    };
    Ok((user, notification))
}

/// Unblock a user.
///
/// Unlike blocking this does not notify the user.
pub fn unblock_user<D>(db: &D, admin_id: &str, user_id: &str) -> Result<User>
where
    D: UserRepo + AdminActionRepo,
{
    let admin = super::authorize_admin(db, admin_id)?;
    let mut user = load_user(db, user_id)?;
    if !user.is_blocked() {
        return Err(InvalidState::UserNotBlocked.into());
    }
    user.status = AccountStatus::Active;
    user.updated_at = Timestamp::now();
    db.update_user(&user)?;
    record_admin_action(db, &admin, AdminActionType::UnblockUser, &user.id, None)?;
    log::info!("User {} unblocked by {}", user.username, admin.username);
    Ok(user)
}
