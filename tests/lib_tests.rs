use canonical_request::{error::MissingField, Error, Request, RequestBuilder, Result};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::{Hash, Hasher};

fn hash_of(request: &Request) -> u64 {
    let mut hasher = DefaultHasher::new();
    request.hash(&mut hasher);
    hasher.finish()
}

fn sample() -> Result<Request> {
    Request::builder()
        .method("POST")?
        .uri_with_query("https://akaa-baseurl.luna.akamaiapis.net/billing/v1/usage?from=2024-01")?
        .header("Content-Type", "application/json")?
        .header("X-Trace-Id", "0af7651916cd43dd")?
        .body(br#"{"product":"cdn"}"#)
        .build()
}

#[test]
fn test_identical_builds_are_equal() {
    let a = sample().unwrap();
    let b = sample().unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_requests_work_in_hash_and_ordered_sets() {
    let a = sample().unwrap();
    let b = sample().unwrap();
    let c = a
        .to_builder()
        .method("PUT")
        .unwrap()
        .build()
        .unwrap();

    let hashed: HashSet<Request> = [a.clone(), b.clone(), c.clone()].into_iter().collect();
    assert_eq!(hashed.len(), 2);

    let ordered: BTreeSet<Request> = [c.clone(), b, a.clone()].into_iter().collect();
    assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![a, c]);
}

#[test]
fn test_header_names_normalized() {
    let request = sample().unwrap();
    let names: Vec<&str> = request.headers().keys().map(String::as_str).collect();
    assert_eq!(names, ["content-type", "x-trace-id"]);
}

#[test]
fn test_case_variant_header_is_duplicate() {
    let mut builder = RequestBuilder::new();
    builder.header("Content-Type", "text/plain").unwrap();

    let err = builder.header("content-type", "text/html").unwrap_err();
    assert!(matches!(err, Error::DuplicateHeader(ref name) if name == "content-type"));
}

#[test]
fn test_external_buffer_mutation_is_not_observed() {
    let mut buf = vec![b'a'; 8];
    let mut builder = Request::builder();
    builder
        .body(&buf)
        .method("PUT")
        .unwrap()
        .uri_with_query("https://example.com/blob")
        .unwrap();
    let request = builder.build().unwrap();

    buf.iter_mut().for_each(|b| *b = b'z');
    assert_eq!(request.body(), b"aaaaaaaa");
    assert_eq!(request.body_bytes().as_ref(), b"aaaaaaaa");
}

#[test]
fn test_uri_text_round_trips() {
    for text in [
        "https://h.example/p?q=1#frag-a",
        "https://h.example",
        "https://h.example?only=query",
    ] {
        let request = Request::builder()
            .method("GET")
            .unwrap()
            .uri_with_query(text)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.uri_with_query().as_str(), text);
        assert_eq!(request.uri_with_query().to_string(), text);
    }
}

#[test]
fn test_build_reports_missing_fields() {
    let mut builder = Request::builder();
    assert_eq!(
        builder.build().unwrap_err(),
        Error::IncompleteRequest(MissingField::Method)
    );

    builder.method("GET").unwrap();
    let err = builder.build().unwrap_err();
    assert!(err.is_incomplete_request());
    assert_eq!(err.to_string(), "uriWithQuery must be set before build");

    builder.uri_with_query("https://example.com/").unwrap();
    assert!(builder.build().is_ok());
}

#[test]
fn test_headers_from_hash_map() {
    let mut map = HashMap::new();
    map.insert("a".to_string(), "1".to_string());
    map.insert("b".to_string(), "2".to_string());

    let mut builder = Request::builder();
    builder
        .headers(&map)
        .unwrap()
        .method("GET")
        .unwrap()
        .uri_with_query("https://example.com/")
        .unwrap();
    let request = builder.build().unwrap();

    let observed: HashMap<String, String> = request
        .headers()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    assert_eq!(observed, map);
}

#[test]
fn test_empty_header_parts_are_invalid() {
    let mut builder = Request::builder();
    let err = builder.header("", "value").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "header name cannot be blank");

    let err = builder.header("x-empty", "").unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.to_string(), "header value cannot be blank");
}

#[test]
fn test_error_propagates_through_question_mark() {
    fn build_with(method: &str) -> Result<Request> {
        Request::builder()
            .method(method)?
            .uri_with_query("https://example.com/")?
            .build()
    }

    assert!(build_with("GET").is_ok());
    assert!(build_with("  ").unwrap_err().is_invalid_argument());
}

#[test]
fn test_request_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Request>();

    let request = std::sync::Arc::new(sample().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let request = request.clone();
            std::thread::spawn(move || request.header("content-type").map(str::to_owned))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("application/json"));
    }
}

#[test]
fn test_from_http_request() {
    let http_request = http::Request::builder()
        .method("POST")
        .uri("https://akaa-baseurl.luna.akamaiapis.net/billing/v1/usage?from=2024-01")
        .header("Content-Type", "application/json")
        .header("X-Trace-Id", "0af7651916cd43dd")
        .body(br#"{"product":"cdn"}"#.to_vec())
        .unwrap();

    assert_eq!(Request::try_from(&http_request).unwrap(), sample().unwrap());
}

#[test]
fn test_serialize() {
    let request = Request::builder()
        .method("GET")
        .unwrap()
        .uri_with_query("https://example.com/?a=b")
        .unwrap()
        .header("Accept", "*/*")
        .unwrap()
        .body(b"ok")
        .build()
        .unwrap();

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "body": [111, 107],
            "headers": { "accept": "*/*" },
            "method": "GET",
            "uriWithQuery": "https://example.com/?a=b"
        })
    );
}
