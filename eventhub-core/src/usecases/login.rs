use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Verify the credentials and record the login as activity.
pub fn login<R: UserRepo>(repo: &R, login: &Credentials) -> Result<User> {
    let email = login.email.trim().to_lowercase();
    let mut user = repo
        .try_get_user_by_email(&email)?
        .ok_or(Error::Credentials)?;
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    if user.is_blocked() {
        return Err(Error::Blocked);
    }
    user.last_online = Some(Timestamp::now());
    repo.update_user(&user)?;
    Ok(user)
}
