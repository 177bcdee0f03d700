use std::{fmt::Display, result};

use eventhub_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Catcher, Request, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{jwt, Cfg},
};
use eventhub_application::prelude as flows;
use eventhub_db_sqlite::Connections;

mod admin;
mod comments;
mod error;
mod events;
mod notifications;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_register,
        users::post_login,
        users::get_profile,
        users::get_dashboard,
        users::get_created_events,
        users::get_participated_events,
        // ---   events   --- //
        events::get_events,
        events::post_event,
        events::post_events_filter,
        events::get_event,
        events::put_event,
        events::delete_event,
        events::post_participation,
        events::delete_participation,
        events::get_participants,
        events::get_comments,
        events::post_comment,
        // ---   comments   --- //
        comments::put_comment,
        comments::delete_comment,
        comments::post_vote,
        // ---   notifications   --- //
        notifications::get_notifications,
        notifications::get_unread_count,
        notifications::put_notification_read,
        notifications::post_mark_all_read,
        // ---   administration   --- //
        admin::get_events,
        admin::get_pending_events,
        admin::put_verify_event,
        admin::put_reject_event,
        admin::delete_event,
        admin::get_users,
        admin::put_block_user,
        admin::put_unblock_user,
        admin::delete_comment,
        admin::get_statistics,
        admin::get_actions,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, Json<JsonErrorResponse>) {
    let message = status.reason().unwrap_or("Unknown error").to_owned();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    (status, Json(boundary_error))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Attach the creator and the number of participants.
fn event_details<D>(db: &D, events: Vec<Event>) -> result::Result<Vec<json::Event>, ApiError>
where
    D: UserRepo + ParticipantRepo,
{
    Ok(usecases::load_event_details(db, events)?
        .into_iter()
        .map(to_json::event_details)
        .collect())
}

fn single_event_details<D>(db: &D, event: Event) -> Result<json::Event>
where
    D: UserRepo + ParticipantRepo,
{
    event_details(db, vec![event])?
        .pop()
        .map(Json)
        .ok_or_else(|| RepoError::NotFound.into())
}
