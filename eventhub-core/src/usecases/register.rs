use super::prelude::*;

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 50;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        username,
        email,
        password,
        role,
    } = new_user;
    let username = username.trim().to_owned();
    let username_len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username_len) {
        return Err(Error::Username);
    }
    let email = email.trim().to_lowercase();
    if !fast_chemail::is_valid_email(&email) {
        return Err(Error::Email);
    }
    let password = password.parse::<Password>()?;
    let role = role
        .as_deref()
        .and_then(|role| {
            role.parse::<Role>()
                .map_err(|_| log::debug!("Unknown role '{role}' requested, falling back to user"))
                .ok()
        })
        .unwrap_or_default();
    if repo.try_get_user_by_email(&email)?.is_some()
        || repo.try_get_user_by_username(&username)?.is_some()
    {
        return Err(Error::UserExists);
    }
    let now = Timestamp::now();
    let user = User {
        id: Id::new(),
        username,
        email,
        password,
        role,
        avatar_url: None,
        status: AccountStatus::Active,
        last_online: None,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Registering new user: username = {}", user.username);
    repo.create_user(&user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })?;
    Ok(user)
}
