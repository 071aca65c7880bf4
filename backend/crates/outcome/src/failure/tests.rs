//! Tests for the failure taxonomy.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn blank_messages_are_rejected(#[case] message: &str) {
    let err = Failure::try_new(ErrorLevel::Warning, ErrorType::Validation, message)
        .expect_err("blank message must fail");
    assert_eq!(err, FailureValidationError::EmptyMessage);
}

#[test]
#[should_panic(expected = "failure messages must satisfy validation")]
fn new_panics_on_blank_message() {
    let _ = Failure::new(ErrorLevel::Information, ErrorType::System, " ");
}

#[rstest]
#[case::validation(|message| Failure::validation(message))]
#[case::data_process(|message| Failure::data_process(message))]
#[case::system(|message| Failure::system(message))]
#[should_panic(expected = "failure messages must satisfy validation")]
fn convenience_constructors_panic_on_blank_message(#[case] construct: fn(&'static str) -> Failure) {
    let _ = construct("  ");
}

#[rstest]
#[case(Failure::validation("bad"), ErrorLevel::Warning, ErrorType::Validation)]
#[case(Failure::data_process("taken"), ErrorLevel::Warning, ErrorType::DataProcess)]
#[case(Failure::system("down"), ErrorLevel::Critical, ErrorType::System)]
#[case(Failure::unclassified(), ErrorLevel::Critical, ErrorType::System)]
fn convenience_constructors_classify_failures(
    #[case] failure: Failure,
    #[case] level: ErrorLevel,
    #[case] category: ErrorType,
) {
    assert_eq!(failure.level(), level);
    assert_eq!(failure.category(), category);
    assert_eq!(failure.kind(), FailureKind::Reported);
    assert!(failure.fault().is_none());
}

#[rstest]
fn authentication_failure_has_fixed_shape() {
    let failure = Failure::authentication();
    assert_eq!(failure.kind(), FailureKind::Authentication);
    assert_eq!(failure.level(), ErrorLevel::Critical);
    assert_eq!(failure.category(), ErrorType::Validation);
    assert_eq!(failure.message(), AUTHENTICATION_MESSAGE);
}

#[rstest]
fn callback_failure_keeps_the_fault_but_hides_it_from_clients() {
    let failure = Failure::callback(Fault::new("index out of bounds"));
    assert_eq!(failure.kind(), FailureKind::Callback);
    assert_eq!(failure.level(), ErrorLevel::Critical);
    assert_eq!(failure.category(), ErrorType::System);
    assert_eq!(failure.message(), CALLBACK_MESSAGE);
    assert_eq!(
        failure.fault().map(Fault::message),
        Some("index out of bounds")
    );

    let wire = serde_json::to_value(&failure).expect("failure serialises");
    assert_eq!(
        wire,
        json!({"level": "critical", "category": "system", "message": CALLBACK_MESSAGE})
    );
}

#[rstest]
fn source_points_at_the_captured_fault() {
    let failure = Failure::callback(Fault::new("boom"));
    let source = StdError::source(&failure).expect("callback failures expose a source");
    assert_eq!(source.to_string(), "boom");
    assert!(StdError::source(&Failure::validation("bad")).is_none());
}

#[rstest]
fn fault_from_panic_reads_static_and_owned_payloads() {
    let borrowed: Box<dyn Any + Send> = Box::new("static text");
    let owned: Box<dyn Any + Send> = Box::new(String::from("owned text"));
    let opaque: Box<dyn Any + Send> = Box::new(7_u8);

    assert_eq!(Fault::from_panic(borrowed.as_ref()).message(), "static text");
    assert_eq!(Fault::from_panic(owned.as_ref()).message(), "owned text");
    assert_eq!(
        Fault::from_panic(opaque.as_ref()).message(),
        "panic with a non-string payload"
    );
}

#[derive(Debug, Error)]
#[error("query failed")]
struct QueryError {
    #[source]
    cause: std::io::Error,
}

#[rstest]
fn fault_from_error_walks_the_source_chain() {
    let error = QueryError {
        cause: std::io::Error::other("connection reset"),
    };
    assert_eq!(
        Fault::from_error(&error).message(),
        "query failed: connection reset"
    );
}

#[rstest]
fn failure_body_deserialises_from_wire_shape() {
    let body: FailureBody = serde_json::from_value(json!({
        "level": "information",
        "category": "data_process",
        "message": "nothing to update"
    }))
    .expect("body parses");
    assert_eq!(
        body,
        FailureBody {
            level: ErrorLevel::Information,
            category: ErrorType::DataProcess,
            message: "nothing to update".to_owned(),
        }
    );
}

#[rstest]
fn failure_body_rejects_unknown_fields() {
    let parsed = serde_json::from_value::<FailureBody>(json!({
        "level": "warning",
        "category": "validation",
        "message": "bad",
        "kind": "authentication"
    }));
    assert!(parsed.is_err());
}

#[rstest]
fn display_uses_the_message() {
    assert_eq!(Failure::validation("too long").to_string(), "too long");
}
