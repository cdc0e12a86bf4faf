use kinevent::{AppError, ErrorKind, EventError};
use serde_json::json;

// ---------------------------------------------------------------------------
// ErrorKind catalog tests
// ---------------------------------------------------------------------------

#[test]
fn test_kind_tags() {
    assert_eq!(ErrorKind::Server.tag(), "SERVER_ERROR");
    assert_eq!(ErrorKind::Db.tag(), "DB_ERROR");
    assert_eq!(ErrorKind::NotFound.tag(), "NOT_FOUND");
    assert_eq!(ErrorKind::MissingParameter.tag(), "MISSING_PARAMETER");
    assert_eq!(ErrorKind::KinesisPutRecord.tag(), "KINESIS_PUT_RECORD_ERROR");
    assert_eq!(ErrorKind::Unknown.tag(), "ErrorUnknown");
}

#[test]
fn test_kind_http_statuses() {
    assert_eq!(ErrorKind::Server.http_status(), 500);
    assert_eq!(ErrorKind::Db.http_status(), 500);
    assert_eq!(ErrorKind::NotFound.http_status(), 404);
    assert_eq!(ErrorKind::MissingParameter.http_status(), 422);
    assert_eq!(ErrorKind::KinesisPutRecord.http_status(), 500);
    assert_eq!(ErrorKind::Unknown.http_status(), 500);
}

#[test]
fn test_kind_default_messages() {
    assert_eq!(
        ErrorKind::Server.default_message(),
        "An internal server error occurred."
    );
    assert_eq!(
        ErrorKind::Db.default_message(),
        "An error occurred while trying to call the DB."
    );
    assert_eq!(
        ErrorKind::NotFound.default_message(),
        "Request item was not Found."
    );
    assert_eq!(
        ErrorKind::MissingParameter.default_message(),
        "Mandatory parameter is missing"
    );
    assert_eq!(
        ErrorKind::KinesisPutRecord.default_message(),
        "Failed to put record in kinesis stream"
    );
}

#[test]
fn test_kind_from_tag() {
    let kind = ErrorKind::from_tag("NOT_FOUND").unwrap();
    assert_eq!(kind, ErrorKind::NotFound);
    assert_eq!(kind.http_status(), 404);
}

#[test]
fn test_kind_from_tag_covers_all() {
    for kind in ErrorKind::ALL {
        assert_eq!(ErrorKind::from_tag(kind.tag()), Some(*kind));
    }
}

#[test]
fn test_unknown_tag_returns_none() {
    assert!(ErrorKind::from_tag("DOES_NOT_EXIST").is_none());
}

// ---------------------------------------------------------------------------
// AppError tests
// ---------------------------------------------------------------------------

#[test]
fn test_app_error_default_message() {
    let err = AppError::not_found();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), "Request item was not Found.");
    assert_eq!(err.http_status(), 404);
}

#[test]
fn test_app_error_message_override() {
    let err = AppError::with_message(ErrorKind::Db, "orders table unreachable");
    assert_eq!(err.kind(), ErrorKind::Db);
    assert_eq!(err.message(), "orders table unreachable");
    // Status stays fixed by the kind
    assert_eq!(err.http_status(), 500);
}

#[test]
fn test_app_error_shorthands() {
    assert_eq!(AppError::server_error().kind(), ErrorKind::Server);
    assert_eq!(AppError::db_error().kind(), ErrorKind::Db);
    assert_eq!(AppError::not_found().kind(), ErrorKind::NotFound);
    assert_eq!(
        AppError::missing_parameter().kind(),
        ErrorKind::MissingParameter
    );
    assert_eq!(
        AppError::kinesis_put_record().kind(),
        ErrorKind::KinesisPutRecord
    );
}

#[test]
fn test_app_error_default_is_unknown() {
    let err = AppError::default();
    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert_eq!(err.http_status(), 500);
}

#[test]
fn test_app_error_display() {
    let err = AppError::not_found();
    assert_eq!(err.to_string(), "[NOT_FOUND] Request item was not Found.");
}

#[test]
fn test_app_error_predicates() {
    assert!(AppError::not_found().is_not_found());
    assert!(!AppError::not_found().is_missing_parameter());
    assert!(AppError::missing_parameter().is_missing_parameter());
}

// ---------------------------------------------------------------------------
// AppError serde tests
// ---------------------------------------------------------------------------

#[test]
fn test_app_error_serializes_wire_tags() {
    let err = AppError::kinesis_put_record();
    let value = serde_json::to_value(&err).unwrap();

    assert_eq!(value["kind"], "KINESIS_PUT_RECORD_ERROR");
    assert_eq!(value["message"], "Failed to put record in kinesis stream");
}

#[test]
fn test_app_error_deserializes_wire_tags() {
    let value = json!({
        "kind": "MISSING_PARAMETER",
        "message": "Mandatory parameter is missing"
    });

    let err: AppError = serde_json::from_value(value).unwrap();
    assert_eq!(err.kind(), ErrorKind::MissingParameter);
    assert_eq!(err.http_status(), 422);
}

// ---------------------------------------------------------------------------
// EventError tests
// ---------------------------------------------------------------------------

#[test]
fn test_event_error_app_display_passthrough() {
    let err = EventError::from(AppError::not_found());
    assert_eq!(err.to_string(), "[NOT_FOUND] Request item was not Found.");
}

#[test]
fn test_event_error_stream_display() {
    let err = EventError::Stream("connection reset".into());
    assert_eq!(err.to_string(), "stream error: connection reset");
}

#[test]
fn test_event_error_serialization_display() {
    let err = EventError::Serialization("invalid JSON".into());
    assert_eq!(err.to_string(), "serialization error: invalid JSON");
}

#[test]
fn test_event_error_kind_accessors() {
    let err = EventError::from(AppError::db_error());
    assert_eq!(err.kind(), Some(ErrorKind::Db));
    assert_eq!(err.as_app().unwrap().http_status(), 500);

    let err = EventError::Stream("down".into());
    assert_eq!(err.kind(), None);
    assert!(err.as_app().is_none());
}

#[test]
fn test_serde_json_error_into_event_error() {
    let bad_json = "not valid json{{{";
    let json_err = serde_json::from_str::<serde_json::Value>(bad_json).unwrap_err();
    let err: EventError = json_err.into();

    match err {
        EventError::Serialization(msg) => assert!(!msg.is_empty()),
        other => panic!("expected Serialization variant, got: {:?}", other),
    }
}

#[test]
fn test_app_error_into_event_error() {
    let err: EventError = AppError::missing_parameter().into();

    match err {
        EventError::App(boxed) => {
            assert_eq!(boxed.kind(), ErrorKind::MissingParameter);
            assert_eq!(boxed.http_status(), 422);
        }
        other => panic!("expected App variant, got: {:?}", other),
    }
}
