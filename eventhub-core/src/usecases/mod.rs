mod administration;
mod authorize;
mod create_comment;
mod create_event;
mod delete_comment;
mod delete_event;
mod error;
mod load_comments;
mod login;
mod moderate_comments;
mod moderate_events;
mod moderate_users;
mod notifications;
mod participate;
mod query_events;
mod register;
mod statistics;
mod update_comment;
mod update_event;
mod user;
mod vote_comment;

#[cfg(test)]
pub mod tests;

pub use self::{
    administration::*, authorize::*, create_comment::*, create_event::*, delete_comment::*,
    delete_event::*, error::*, load_comments::*, login::*, moderate_comments::*,
    moderate_events::*, moderate_users::*, notifications::*, participate::*, query_events::*,
    register::*, statistics::*, update_comment::*, update_event::*, user::*, vote_comment::*,
};

mod prelude {
    pub use super::error::{Error, InvalidState};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        gateways::notify::NotificationEvent,
        repositories::{Error as RepoError, *},
    };
}

use self::prelude::*;

/// Map a missing entity onto a use case specific error.
fn not_found_as(err: RepoError, replacement: Error) -> Error {
    match err {
        RepoError::NotFound => replacement,
        err => Error::Repo(err),
    }
}

/// Load an event that has not been logically deleted.
fn load_active_event<R: EventRepo>(repo: &R, id: &str) -> Result<Event> {
    let event = repo.get_event(id)?;
    if !event.is_active() {
        return Err(RepoError::NotFound.into());
    }
    Ok(event)
}
