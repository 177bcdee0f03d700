#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # eventhub-entities
//!
//! Reusable, agnostic domain entities for eventhub.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod admin_action;
pub mod comment;
pub mod event;
pub mod id;
pub mod location;
pub mod notification;
pub mod participant;
pub mod password;
pub mod primitive;
pub mod tag;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
