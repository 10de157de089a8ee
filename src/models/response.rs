use crate::constants::{
    CONSTRAINT_VIOLATION_ERROR, INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MESSAGE,
    METHOD_ARGUMENT_TYPE_MISMATCH_ERROR, MISSING_REQUEST_PARAMETER_ERROR, NOT_FOUND_ERROR,
};
use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::BadRequest => 400,
            ResponseStatus::NotFound => 404,
            ResponseStatus::InternalServerError => 500,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            ResponseStatus::Ok => "OK",
            ResponseStatus::BadRequest => "Bad Request",
            ResponseStatus::NotFound => "Not Found",
            ResponseStatus::InternalServerError => "Internal Server Error",
        }
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.code())
    }

    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.code())
    }

    pub fn is_server_error(self) -> bool {
        self.code() >= 500
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// The structured body returned for every failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: ResponseStatus,
}

impl ErrorResponse {
    pub fn new(
        error: impl Into<String>,
        message: impl Into<String>,
        status: ResponseStatus,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status,
        }
    }
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        match err {
            Error::MissingParameter(_) => ErrorResponse::new(
                MISSING_REQUEST_PARAMETER_ERROR,
                err.to_string(),
                ResponseStatus::BadRequest,
            ),
            Error::BlankParameter(_)
            | Error::NonPositiveParameter(_)
            | Error::ConstraintViolations(_) => ErrorResponse::new(
                CONSTRAINT_VIOLATION_ERROR,
                err.to_string(),
                ResponseStatus::BadRequest,
            ),
            Error::TypeMismatch { .. } => ErrorResponse::new(
                METHOD_ARGUMENT_TYPE_MISMATCH_ERROR,
                err.to_string(),
                ResponseStatus::BadRequest,
            ),
            Error::RouteNotFound(_) => {
                ErrorResponse::new(NOT_FOUND_ERROR, err.to_string(), ResponseStatus::NotFound)
            }
            Error::Internal(_) | Error::IoError(_) | Error::CsvError(_) | Error::JsonError(_) => {
                ErrorResponse::new(
                    INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE,
                    ResponseStatus::InternalServerError,
                )
            }
        }
    }
}

/// A status paired with the JSON body to send back.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: ResponseStatus,
    pub body: Value,
}

impl Response {
    pub fn ok(body: Value) -> Self {
        Self {
            status: ResponseStatus::Ok,
            body,
        }
    }

    pub fn from_error(err: &Error) -> Self {
        let error_response = ErrorResponse::from(err);

        Self {
            status: error_response.status,
            // A struct of plain strings always serializes
            body: serde_json::to_value(&error_response).unwrap_or_default(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the body back into an `ErrorResponse`, if this is a failure response.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        if self.is_success() {
            return None;
        }

        serde_json::from_value(self.body.clone()).ok()
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String, Error> {
        let json = if pretty {
            serde_json::to_string_pretty(&self.body)?
        } else {
            serde_json::to_string(&self.body)?
        };

        Ok(json)
    }
}
