use crate::{authorization, repositories};
use eventhub_entities::password;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The description is invalid")]
    Description,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid price")]
    Price,
    #[error("Invalid max. number of participants")]
    MaxParticipants,
    #[error("Invalid tag")]
    Tag,
    #[error("Invalid username")]
    Username,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Missing reason")]
    EmptyReason,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The account is blocked")]
    Blocked,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The event is fully booked")]
    EventFull,
    #[error("Already participating in this event")]
    AlreadyParticipating,
    #[error(transparent)]
    InvalidState(#[from] InvalidState),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// The operation is not valid for the current state of an entity.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    #[error("The event is not active")]
    EventInactive,
    #[error("The event has already been verified")]
    EventAlreadyVerified,
    #[error("Only events that are pending verification can be rejected")]
    EventNotPending,
    #[error("The max. number of participants is below the number of participants")]
    CapacityBelowParticipants,
    #[error("The comment has been deleted")]
    CommentDeleted,
    #[error("The user is already blocked")]
    UserAlreadyBlocked,
    #[error("The user is not blocked")]
    UserNotBlocked,
}

impl From<password::ParseError> for Error {
    fn from(_: password::ParseError) -> Self {
        Self::Password
    }
}

impl From<authorization::user::Error> for Error {
    fn from(err: authorization::user::Error) -> Self {
        match err {
            authorization::user::Error::UnauthorizedRole => Self::Forbidden,
            authorization::user::Error::Blocked => Self::Blocked,
        }
    }
}
