use super::json_error_response;
use anyhow::anyhow;
use eventhub_application::error::{AppError, BError};
pub use eventhub_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

fn parameter_error_status(err: &ParameterError) -> Status {
    match err {
        ParameterError::Credentials | ParameterError::Unauthorized => Status::Unauthorized,
        ParameterError::Forbidden | ParameterError::Blocked => Status::Forbidden,
        ParameterError::EventFull
        | ParameterError::AlreadyParticipating
        | ParameterError::UserExists
        | ParameterError::InvalidState(_) => Status::Conflict,
        ParameterError::Repo(err) => repo_error_status(err),
        _ => Status::BadRequest,
    }
}

fn repo_error_status(err: &RepoError) -> Status {
    match err {
        RepoError::NotFound => Status::NotFound,
        RepoError::AlreadyExists => Status::Conflict,
        RepoError::Other(_) => Status::InternalServerError,
    }
}

fn app_error_status(err: &AppError) -> Status {
    match err {
        AppError::Business(BError::Parameter(err)) => parameter_error_status(err),
        AppError::Business(BError::Repo(err)) => repo_error_status(err),
        AppError::Other(_) => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let status = match &self {
            Error::App(err) => app_error_status(err),
            Error::OtherWithStatus(_, status) => *status,
            Error::Other(_) => Status::InternalServerError,
        };
        if status == Status::InternalServerError {
            // Internals are logged but never exposed
            error!("Error: {self}");
            return json_error_response(req, &"Internal server error", status);
        }
        debug!("Rejecting request to {}: {self}", req.uri());
        json_error_response(req, &self, status)
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
