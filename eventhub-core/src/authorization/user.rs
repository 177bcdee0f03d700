use eventhub_entities::user::{Role, User};

use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("blocked account")]
    Blocked,
}

pub type Result<T> = StdResult<T, Error>;

/// Blocked users may authenticate, but must not mutate anything.
pub fn authorize_active(user: &User) -> Result<()> {
    if user.is_blocked() {
        return Err(Error::Blocked);
    }
    Ok(())
}

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    authorize_active(user)?;
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_entities::{builders::*, user::AccountStatus};

    #[test]
    fn admins_have_the_highest_role() {
        let user = User::build().role(Role::User).finish();
        let admin = User::build().role(Role::Admin).finish();
        assert!(authorize_role(&user, Role::User).is_ok());
        assert_eq!(
            Err(Error::UnauthorizedRole),
            authorize_role(&user, Role::Admin)
        );
        assert!(authorize_role(&admin, Role::Admin).is_ok());
        assert!(authorize_role(&admin, Role::User).is_ok());
    }

    #[test]
    fn blocked_accounts_are_never_authorized() {
        let admin = User::build()
            .role(Role::Admin)
            .status(AccountStatus::Blocked)
            .finish();
        assert_eq!(Err(Error::Blocked), authorize_active(&admin));
        assert_eq!(Err(Error::Blocked), authorize_role(&admin, Role::User));
    }
}
