use super::*;

pub fn register_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::register_user(conn, new_user))?;
    info!("Registered new user {} ({})", user.username, user.id);
    Ok(user)
}

pub fn login(connections: &sqlite::Connections, credentials: &usecases::Credentials) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::login(conn, credentials))?;
    debug!("User {} logged in", user.id);
    Ok(user)
}

/// Refresh the last activity of an authenticated user
/// and return the current account.
pub fn record_activity(connections: &sqlite::Connections, account_id: &str) -> Result<User> {
    let now = Timestamp::now();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::record_activity(conn, account_id, now)?;
        usecases::get_profile(conn, account_id)
    })?)
}
