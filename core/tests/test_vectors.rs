//! Check build/parse methods against the JSON vectors in `test-vectors/`.
//!
//! Each case describes the input, the request the client must build, a
//! simulated server response and either the parsed result or the error
//! variant it must map to. Bodies are compared as parsed JSON so field order
//! does not matter.

use serde_json::Value;
use todo_core::{
    ApiError, CreateTodo, DeleteTodo, HttpMethod, HttpRequest, HttpResponse, Todo, TodoClient,
    UpdateTodo,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let pair = h.as_array().unwrap();
                (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let actual: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&actual, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

/// Compare a parse outcome with the case's `expected_result` or `expected_error`.
fn check_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    match case.get("expected_error").and_then(Value::as_str) {
        Some(expected) => {
            let err = result.unwrap_err();
            let matched = match expected {
                "NotFound" => matches!(err, ApiError::NotFound),
                "Validation" => matches!(err, ApiError::Validation(_)),
                "Http" => matches!(err, ApiError::Http { .. }),
                other => panic!("{name}: unknown expected_error: {other}"),
            };
            assert!(matched, "{name}: expected {expected}, got {err:?}");
        }
        None => {
            let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_list_todos(), &case["expected_request"]);
        check_outcome::<Vec<Todo>>(name, &case, c.parse_list_todos(simulated_response(&case)));
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        check_request(name, &c.build_create_todo(&input).unwrap(), &case["expected_request"]);
        check_outcome::<Todo>(name, &case, c.parse_create_todo(simulated_response(&case)));
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        check_request(name, &c.build_update_todo(&input).unwrap(), &case["expected_request"]);
        check_outcome::<Todo>(name, &case, c.parse_update_todo(simulated_response(&case)));
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let input: DeleteTodo = serde_json::from_value(case["input"].clone()).unwrap();
        check_request(name, &c.build_delete_todo(&input).unwrap(), &case["expected_request"]);
        check_outcome::<String>(name, &case, c.parse_delete_todo(simulated_response(&case)));
    }
}
