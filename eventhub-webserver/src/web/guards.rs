use std::ops::Deref;

use rocket::{
    http::Status,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{core::prelude::*, web::jwt};
use eventhub_application::prelude as flows;
use eventhub_core::gateways::notify::NotificationGateway;
use eventhub_db_sqlite::Connections;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    auth_header_val
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// The authenticated user of a request.
///
/// Resolving the account refreshes the time the
/// user has been seen online for the last time.
#[derive(Debug)]
pub struct Account(User);

impl Account {
    pub fn id(&self) -> &str {
        self.0.id.as_str()
    }

    pub fn into_user(self) -> User {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(jwt_state) = request.guard::<&State<jwt::JwtState>>().await.succeeded() else {
            error!("JWT state is not managed");
            return Outcome::Error((Status::InternalServerError, ()));
        };
        let Some(connections) = request.guard::<&State<Connections>>().await.succeeded() else {
            error!("Database connections are not managed");
            return Outcome::Error((Status::InternalServerError, ()));
        };
        let claims = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .find_map(|token| jwt_state.validate_token(token).ok());
        let Some(claims) = claims else {
            return Outcome::Error((Status::Unauthorized, ()));
        };
        match flows::record_activity(connections, &claims.sub) {
            Ok(user) => {
                if claims.role() != Some(user.role) {
                    debug!("The role of user {} has changed since login", user.id);
                }
                Outcome::Success(Account(user))
            }
            Err(err) => {
                debug!("Rejecting token of user {}: {err}", claims.sub);
                Outcome::Error((Status::Unauthorized, ()))
            }
        }
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_tokens() {
        assert_eq!(Some("abc"), get_bearer_token("Bearer abc"));
        assert_eq!(None, get_bearer_token("Bearer "));
        assert_eq!(None, get_bearer_token("Basic abc"));
        assert_eq!(None, get_bearer_token("abc"));
    }
}
