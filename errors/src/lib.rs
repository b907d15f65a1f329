#[macro_use]
extern crate log;

use actix_web::{
    error::{BlockingError, ResponseError},
    http::StatusCode,
    HttpResponse,
};
use derive_more::Display;
use diesel::result::Error as DBError;
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

/// Failures a route can end in. The first four map to the public error
/// envelopes; the rest are internal and only ever reach a client as 500,
/// unless the route masks them into one of the public kinds.
#[derive(Debug, Display, PartialEq)]
pub enum Error {
    BadRequest(String),
    NotFound(String),
    UnprocessableEntity(String),
    InternalServerError(String),
    #[display(fmt = "Database error: {}", _0)]
    DBError(String),
    #[display(fmt = "Pool error: {}", _0)]
    PoolError(String),
    BlockingError(String),
}

impl Error {
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            Error::BadRequest(_) | Error::NotFound(_) | Error::UnprocessableEntity(_)
        )
    }

    /// Replaces an internal failure with the public error kind a route reports
    /// for it. Public kinds pass through untouched.
    pub fn masked_as(self, fallback: fn(String) -> Error) -> Error {
        if self.is_internal() {
            error!("{}", self);
            return fallback(self.to_string());
        }
        self
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<StatusCode> for ErrorResponse {
    fn from(status: StatusCode) -> Self {
        let (error, message) = match status {
            StatusCode::BAD_REQUEST => (400, "Bad request"),
            StatusCode::NOT_FOUND => (404, "Resource not found"),
            StatusCode::UNPROCESSABLE_ENTITY => (422, "Unprocessable entity"),
            _ => (500, "Internal server error"),
        };

        ErrorResponse {
            success: false,
            error,
            message: message.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("{}", self);
        }
        HttpResponse::build(status).json(ErrorResponse::from(status))
    }
}

// Convert DBErrors to our Error type
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::NotFound => Error::NotFound("Record not found".into()),
            _ => Error::DBError(error.to_string()),
        }
    }
}

// Convert PoolError to our Error type
impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::BlockingError("Thread blocking error".into())
    }
}
