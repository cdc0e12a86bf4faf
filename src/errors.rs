use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Error kinds (the application error catalog)
// ---------------------------------------------------------------------------

/// Enumerated application error kind.
///
/// Each kind carries a fixed wire tag, a default HTTP status, and a default
/// human-readable message. The tag and status are part of the API contract
/// consumed by gateway layers; the message is a fallback for errors
/// constructed without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Unclassified internal failure.
    #[serde(rename = "SERVER_ERROR")]
    Server,
    /// A database call failed.
    #[serde(rename = "DB_ERROR")]
    Db,
    /// The requested item does not exist.
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    /// A mandatory request parameter is absent or null.
    #[serde(rename = "MISSING_PARAMETER")]
    MissingParameter,
    /// A record could not be put on the stream.
    #[serde(rename = "KINESIS_PUT_RECORD_ERROR")]
    KinesisPutRecord,
    /// Fallback kind for errors raised without a classification.
    #[serde(rename = "ErrorUnknown")]
    Unknown,
}

impl ErrorKind {
    /// All defined kinds, in catalog order.
    pub const ALL: &'static [ErrorKind] = &[
        ErrorKind::Server,
        ErrorKind::Db,
        ErrorKind::NotFound,
        ErrorKind::MissingParameter,
        ErrorKind::KinesisPutRecord,
        ErrorKind::Unknown,
    ];

    /// Wire-format tag string for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ErrorKind::Server => "SERVER_ERROR",
            ErrorKind::Db => "DB_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::MissingParameter => "MISSING_PARAMETER",
            ErrorKind::KinesisPutRecord => "KINESIS_PUT_RECORD_ERROR",
            ErrorKind::Unknown => "ErrorUnknown",
        }
    }

    /// HTTP status a gateway layer should answer with for this kind.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::MissingParameter => 422,
            ErrorKind::Server | ErrorKind::Db | ErrorKind::KinesisPutRecord | ErrorKind::Unknown => {
                500
            }
        }
    }

    /// Default message used when an error of this kind is built without one.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::Server => "An internal server error occurred.",
            ErrorKind::Db => "An error occurred while trying to call the DB.",
            ErrorKind::NotFound => "Request item was not Found.",
            ErrorKind::MissingParameter => "Mandatory parameter is missing",
            ErrorKind::KinesisPutRecord => "Failed to put record in kinesis stream",
            ErrorKind::Unknown => "An unknown error occurred.",
        }
    }

    /// Look up a kind by its wire-format tag (e.g. `"NOT_FOUND"`).
    pub fn from_tag(tag: &str) -> Option<ErrorKind> {
        ErrorKind::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Application error value
// ---------------------------------------------------------------------------

/// A typed application error: a kind plus a human-readable message.
///
/// The HTTP status is derived from the kind and therefore not stored or
/// serialized. Values are immutable after construction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.tag(), self.message)
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Create an error of the given kind with its default message.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_owned(),
        }
    }

    /// Create an error of the given kind with a message override.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// `SERVER_ERROR` with its default message.
    pub fn server_error() -> Self {
        Self::new(ErrorKind::Server)
    }

    /// `DB_ERROR` with its default message.
    pub fn db_error() -> Self {
        Self::new(ErrorKind::Db)
    }

    /// `NOT_FOUND` with its default message.
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// `MISSING_PARAMETER` with its default message.
    pub fn missing_parameter() -> Self {
        Self::new(ErrorKind::MissingParameter)
    }

    /// `KINESIS_PUT_RECORD_ERROR` with its default message.
    pub fn kinesis_put_record() -> Self {
        Self::new(ErrorKind::KinesisPutRecord)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the wire-format tag of the kind.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status associated with the kind.
    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Returns `true` if this is a "missing parameter" error.
    pub fn is_missing_parameter(&self) -> bool {
        self.kind == ErrorKind::MissingParameter
    }
}

impl Default for AppError {
    fn default() -> Self {
        Self::new(ErrorKind::Unknown)
    }
}

// ---------------------------------------------------------------------------
// Main crate error type
// ---------------------------------------------------------------------------

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// A typed application error from the catalog.
    #[error("{0}")]
    App(Box<AppError>),

    /// Failure reported by the underlying stream client.
    #[error("stream error: {0}")]
    Stream(String),

    /// Serialization / deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl EventError {
    /// Returns the application error, if this is one.
    pub fn as_app(&self) -> Option<&AppError> {
        match self {
            EventError::App(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the application error kind, if this is an application error.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_app().map(AppError::kind)
    }
}

impl From<AppError> for EventError {
    fn from(err: AppError) -> Self {
        EventError::App(Box::new(err))
    }
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}

#[cfg(feature = "kinesis-client")]
impl From<aws_sdk_kinesis::error::SdkError<aws_sdk_kinesis::operation::put_record::PutRecordError>>
    for EventError
{
    fn from(
        err: aws_sdk_kinesis::error::SdkError<
            aws_sdk_kinesis::operation::put_record::PutRecordError,
        >,
    ) -> Self {
        match err.as_service_error() {
            Some(service_err) => EventError::Stream(service_err.to_string()),
            None => EventError::Stream(err.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Result type alias
// ---------------------------------------------------------------------------

pub type Result<T> = std::result::Result<T, EventError>;
