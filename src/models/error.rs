use std::fmt;

#[derive(Debug)]
pub enum Error {
    MissingParameter(String),
    BlankParameter(String),
    NonPositiveParameter(String),
    /// Several constraint failures on one request, in parameter order.
    ConstraintViolations(Vec<Error>),
    TypeMismatch {
        parameter: String,
        expected_type: String,
    },
    RouteNotFound(String),
    Internal(String),
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
}

impl Error {
    /// Errors caused by the caller's input, as opposed to failures on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MissingParameter(_)
                | Error::BlankParameter(_)
                | Error::NonPositiveParameter(_)
                | Error::ConstraintViolations(_)
                | Error::TypeMismatch { .. }
                | Error::RouteNotFound(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingParameter(name) => write!(f, "{} parameter is missing", name),
            Error::BlankParameter(name) => {
                write!(f, "The parameter '{}' must not be blank", name)
            }
            Error::NonPositiveParameter(name) => {
                write!(f, "The parameter '{}' must be a positive integer", name)
            }
            Error::ConstraintViolations(violations) => {
                let messages: Vec<String> = violations.iter().map(Error::to_string).collect();
                write!(f, "{}", messages.join(". "))
            }
            Error::TypeMismatch {
                parameter,
                expected_type,
            } => write!(f, "{} should be of type {}", parameter, expected_type),
            Error::RouteNotFound(path) => write!(f, "No handler found for {}", path),
            Error::Internal(msg) => write!(f, "Internal Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::CsvError(err) => write!(f, "CSV Error: {}", err),
            Error::JsonError(err) => write!(f, "JSON Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            Error::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::CsvError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_parameter() {
        assert_eq!(
            Error::MissingParameter("text".to_string()).to_string(),
            "text parameter is missing"
        );
        assert_eq!(
            Error::BlankParameter("word".to_string()).to_string(),
            "The parameter 'word' must not be blank"
        );
        assert_eq!(
            Error::NonPositiveParameter("n".to_string()).to_string(),
            "The parameter 'n' must be a positive integer"
        );
        assert_eq!(
            Error::TypeMismatch {
                parameter: "n".to_string(),
                expected_type: "int".to_string()
            }
            .to_string(),
            "n should be of type int"
        );
    }

    #[test]
    fn test_constraint_violations_are_joined() {
        let err = Error::ConstraintViolations(vec![
            Error::BlankParameter("text".to_string()),
            Error::NonPositiveParameter("n".to_string()),
        ]);

        assert!(err.is_client_error());
        assert_eq!(
            err.to_string(),
            "The parameter 'text' must not be blank. The parameter 'n' must be a positive integer"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::MissingParameter("text".to_string()).is_client_error());
        assert!(Error::RouteNotFound("/nope".to_string()).is_client_error());
        assert!(!Error::Internal("boom".to_string()).is_client_error());
        assert!(!Error::IoError(std::io::Error::other("disk")).is_client_error());
    }
}
