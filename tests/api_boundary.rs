//! Request/response contract of the `/process` boundary.

use fio_extract::api::process_request;
use fio_extract::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;

fn pipeline() -> Pipeline {
    Pipeline::builder().build()
}

#[test]
fn test_text_column_preferred() {
    let body = json!([
        {"id": 1, "text": "Иванов Иван Иванович обратился по вопросу"},
        {"id": 2, "text": "код обращения 4521, без имени"},
        {"id": 3, "text": "спасибо"}
    ])
    .to_string();

    let resp = process_request(&pipeline(), &body);
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.body,
        json!([
            {"Обращение": "Иванов Иван Иванович обратился по вопросу", "ФИО или Номер": "Иванов Иван Иванович"},
            {"Обращение": "код обращения 4521, без имени", "ФИО или Номер": "4521"},
            {"Обращение": "спасибо", "ФИО или Номер": ""}
        ])
    );
}

#[test]
fn test_first_column_when_no_text_field() {
    let body = r#"[{"message": "код 4777"}, {"message": "Петров Петр Петрович"}]"#;
    let resp = process_request(&pipeline(), body);
    assert!(resp.is_success());
    let names: Vec<&str> = resp
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["ФИО или Номер"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["4777", "Петров Петр Петрович"]);
}

#[test]
fn test_field_order_in_rows() {
    let resp = process_request(&pipeline(), r#"["код 4521"]"#);
    let body = resp.body_string();
    let text_at = body.find("Обращение").unwrap();
    let name_at = body.find("ФИО или Номер").unwrap();
    assert!(text_at < name_at, "{}", body);
}

// A body that is not JSON at all is reported as a client error (400),
// not as an internal failure (500).
#[test]
fn test_malformed_json_rejected_as_client_error() {
    for body in ["[{\"text\": ", "not json", "{\"text\": \"Иванов\""] {
        let resp = process_request(&pipeline(), body);
        assert_eq!(resp.status, 400, "{body:?}");
        assert!(!resp.is_success());
        assert!(resp.body["error"].is_string());
        assert!(resp.body.as_array().is_none());
    }
}

#[test]
fn test_empty_request_rejected() {
    for body in ["", "[]", "{}", "null"] {
        let resp = process_request(&pipeline(), body);
        assert_eq!(resp.status, 400, "body {:?}", body);
        assert_eq!(resp.body, json!({"error": "No data provided"}));
    }
}

#[test]
fn test_unsupported_shape_rejected() {
    let resp = process_request(&pipeline(), "\"просто строка\"");
    assert_eq!(resp.status, 400);
    assert!(resp.body["error"].is_string());
}

#[test]
fn test_tagger_abort_maps_to_500() {
    let mock = MockTagger::new("broken").failing_on("второй");
    let config = ExtractorConfig::default().with_failure_policy(FailurePolicy::Abort);
    let p = Pipeline::builder().tagger(Arc::new(mock)).config(config).build();

    let resp = process_request(&p, r#"[{"text": "первый"}, {"text": "второй"}]"#);
    assert_eq!(resp.status, 500);
    let message = resp.body["error"].as_str().unwrap();
    assert!(message.contains("broken"), "{}", message);
    assert!(!matches!(resp.body, Value::Array(_)));
}
