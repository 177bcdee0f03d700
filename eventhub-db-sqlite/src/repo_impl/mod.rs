// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};
use eventhub_core::{
    entities::*,
    repositories::{self as repo, *},
};
use std::str::FromStr;

use super::*;

mod admin_action;
mod comment;
mod comment_vote;
mod event;
mod notification;
mod participant;
mod tag;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_primitive<T, P>(primitive: P, what: &str) -> Result<T>
where
    T: TryFrom<P, Error = InvalidPrimitive>,
{
    T::try_from(primitive).map_err(|InvalidPrimitive(value)| {
        // This should never happen
        log::error!("Invalid {what} in database: {value}");
        anyhow!("Invalid {what}: {value}").into()
    })
}

fn load_enum<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value.parse().map_err(|_| {
        // This should never happen
        log::error!("Invalid {what} in database: {value}");
        anyhow!("Invalid {what}: {value}").into()
    })
}

fn count(n: i64) -> usize {
    usize::try_from(n).unwrap_or_default()
}
