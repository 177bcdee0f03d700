#[macro_use]
extern crate log;

mod accounts;
mod comments;
mod events;
mod moderation;
mod notifications;
mod participation;

pub mod prelude {
    pub use super::{
        accounts::*, comments::*, events::*, moderation::*, notifications::*, participation::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use eventhub_core::{entities::*, gateways::notify::NotificationGateway, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use eventhub_db_sqlite::Connections;
}
