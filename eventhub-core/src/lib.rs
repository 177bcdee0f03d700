pub mod authorization;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use eventhub_entities::{
        admin_action::*, comment::*, event::*, id::*, location::*, notification::*,
        participant::*, password::*, primitive::*, tag::*, time::*, user::*,
    };
}
