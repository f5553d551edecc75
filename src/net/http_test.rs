use super::*;

use std::sync::Mutex;

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn error(&self, text: &str) {
        self.messages.lock().unwrap().push(text.to_owned());
    }
}

// =============================================================
// URL building
// =============================================================

#[test]
fn join_url_uses_single_separator() {
    assert_eq!(join_url("/", "api/user"), "/api/user");
    assert_eq!(join_url("/", "/api/user"), "/api/user");
    assert_eq!(join_url("https://h/x/", "/api"), "https://h/x/api");
    assert_eq!(join_url("https://h/x", "api"), "https://h/x/api");
}

#[test]
fn url_appends_encoded_query() {
    let spec = RequestSpec::new(Method::Get, "/api/user")
        .query("page", 2)
        .query("size", 10)
        .query("search", "张 三&");
    assert_eq!(
        spec.url("/"),
        "/api/user?page=2&size=10&search=%E5%BC%A0%20%E4%B8%89%26"
    );
}

#[test]
fn json_body_is_serialized() {
    let spec = RequestSpec::new(Method::Delete, "/api/user/batch").json(&[1, 2, 3]).unwrap();
    assert_eq!(spec.body.as_deref(), Some("[1,2,3]"));
}

// =============================================================
// classify / decode
// =============================================================

#[test]
fn classify_accepts_2xx() {
    let resp = classify(204, String::new()).unwrap();
    assert_eq!(resp.status, 204);
}

#[test]
fn classify_parses_structured_error_body() {
    let err = classify(500, r#"{"message":"生成失败","details":"uri=/x"}"#.into()).unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.server_message(), Some("生成失败"));
}

#[test]
fn classify_reads_message_next_to_numeric_timestamp() {
    let text = r#"{"timestamp":1700000000000,"message":"X","details":"uri=/api/user/9"}"#;
    let err = classify(500, text.into()).unwrap_err();
    assert_eq!(err.server_message(), Some("X"));
    assert_eq!(crate::net::interceptor::failure_text(&err), "X");
}

#[test]
fn classify_reads_message_next_to_object_details() {
    let err = classify(400, r#"{"message":"X","details":{"path":"/x"}}"#.into()).unwrap_err();
    assert_eq!(err.server_message(), Some("X"));
}

#[test]
fn classify_ignores_non_string_message() {
    let err = classify(500, r#"{"message":42}"#.into()).unwrap_err();
    assert!(matches!(err, HttpError::Status { body: Some(_), .. }));
    assert_eq!(err.server_message(), None);
    assert_eq!(crate::net::interceptor::failure_text(&err), crate::net::interceptor::REQUEST_FAILED);
}

#[test]
fn classify_keeps_unstructured_error_without_body() {
    let err = classify(502, "<html>Bad Gateway</html>".into()).unwrap_err();
    assert_eq!(err, HttpError::Status { status: 502, body: None });
    assert!(err.has_response());
    assert_eq!(err.server_message(), None);
}

#[test]
fn decode_json_unwraps_typed_payload() {
    let resp = Response { status: 200, data: r#"["a","b"]"#.to_owned() };
    let decoded: Response<Vec<String>> = decode_json(resp).unwrap();
    assert_eq!(decoded.data, ["a", "b"]);
}

#[test]
fn decode_json_reports_status_on_failure() {
    let resp = Response { status: 200, data: "后端代码生成成功".to_owned() };
    let err = decode_json::<Vec<String>>(resp).unwrap_err();
    assert!(matches!(err, HttpError::Decode { status: 200, .. }));
}

#[test]
fn network_errors_have_no_response() {
    let err = HttpError::Network("offline".into());
    assert!(!err.has_response());
    assert_eq!(err.status(), None);
}

// =============================================================
// client
// =============================================================

#[test]
fn client_keeps_configured_base() {
    let client = HttpClient::new("/", Arc::new(RecordingNotifier::default()));
    assert_eq!(client.base_url(), "/");
}

#[test]
fn reject_notifies_and_returns_same_error() {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = HttpClient::new("/", notifier.clone());
    let err = HttpError::Status {
        status: 400,
        body: Some(ErrorBody { message: Some("X".into()), ..ErrorBody::default() }),
    };
    let result: Result<(), _> = client.reject(err.clone());
    assert_eq!(result.unwrap_err(), err);
    assert_eq!(*notifier.messages.lock().unwrap(), ["X"]);
}
