// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search suggestions end to end.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[tokio::test(flavor = "multi_thread")]
async fn query_prints_titles_and_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search_suggestions"))
        .and(query_param("q", "neural nets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "title": "Neural nets 101"},
            {"id": 17, "title": "Pruning"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let home = home();
    hub_for(&home, &server)
        .args(["search", "neural nets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Neural nets 101  /post/3"))
        .stdout(predicate::str::contains("Pruning          /post/17"));
}

#[tokio::test(flavor = "multi_thread")]
async fn stdin_keystrokes_send_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search_suggestions"))
        .and(query_param("q", "rust"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "title": "Rust"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = home();
    hub_for(&home, &server)
        .arg("search")
        .write_stdin("r\nru\nrus\nrust\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust  /post/1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn no_suggestions_prints_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search_suggestions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let home = home();
    hub_for(&home, &server)
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let home = home();
    hub_for(&home, &server)
        .args(["search", "ai"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: request failed"))
        .stderr(predicate::str::contains("500"));
}

#[test]
fn blank_query_sends_nothing() {
    let home = home();
    hub(&home)
        .env("HUB_BASE_URL", DEAD_URL)
        .args(["search", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
