use super::{not_found_as, prelude::*};
use crate::authorization::{
    resource::{can_modify, Owned},
    user::{authorize_active, authorize_role},
};

/// Load the account of an authenticated user that is allowed to
/// perform mutating operations, i.e. it exists and is not blocked.
pub fn authorize_account<R: UserRepo>(repo: &R, account_id: &str) -> Result<User> {
    let account = repo
        .get_user(account_id)
        .map_err(|err| not_found_as(err, Error::Unauthorized))?;
    authorize_active(&account)?;
    Ok(account)
}

pub fn authorize_admin<R: UserRepo>(repo: &R, account_id: &str) -> Result<User> {
    let account = repo
        .get_user(account_id)
        .map_err(|err| not_found_as(err, Error::Unauthorized))?;
    authorize_role(&account, Role::Admin)?;
    Ok(account)
}

pub fn authorize_owner<T: Owned>(account: &User, resource: &T) -> Result<()> {
    if !can_modify(account, resource) {
        return Err(Error::Forbidden);
    }
    Ok(())
}
