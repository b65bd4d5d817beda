// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Student roster end to end.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

async fn mount_roster(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/list_students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn list_prints_table() {
    let server = MockServer::start().await;
    mount_roster(
        &server,
        json!([
            {"id": 1, "name": "Ada", "email": "ada@example.com", "course": "Maths"},
            {"id": 2, "name": "Alan"}
        ]),
    )
    .await;

    let home = home();
    hub_for(&home, &server)
        .args(["students", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID  NAME  EMAIL            COURSE"))
        .stdout(predicate::str::contains("1   Ada   ada@example.com  Maths"))
        .stdout(predicate::str::contains("2   Alan  -                -"));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_empty_roster() {
    let server = MockServer::start().await;
    mount_roster(&server, json!([])).await;

    let home = home();
    hub_for(&home, &server)
        .args(["students", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No students yet."));
}

#[test]
fn list_unreachable_server_fails() {
    let home = home();
    hub(&home)
        .env("HUB_BASE_URL", DEAD_URL)
        .args(["students", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: request failed"))
        .stderr(predicate::str::contains("hint:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn add_posts_then_shows_roster() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add_student"))
        .and(body_json(json!({"name": "Grace Hopper", "course": "COBOL"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Student added."
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_roster(&server, json!([{"id": 5, "name": "Grace Hopper", "course": "COBOL"}])).await;

    let home = home();
    hub_for(&home, &server)
        .args(["students", "add", "--name", "Grace Hopper", "--course", "COBOL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[success] Student added."))
        .stdout(predicate::str::contains("Grace Hopper"));
}

#[test]
fn add_with_invalid_email_fails_locally() {
    let home = home();
    hub(&home)
        .env("HUB_BASE_URL", DEAD_URL)
        .args(["students", "add", "--name", "Ada", "--email", "ada@"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[danger] invalid email address"))
        .stderr(predicate::str::contains("error:").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_rejected_by_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/delete_student/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "fail",
            "message": "No such student."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = home();
    hub_for(&home, &server)
        .args(["students", "delete", "99"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[danger] No such student."));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_string_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/delete_student/stu-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_roster(&server, json!([])).await;

    let home = home();
    hub_for(&home, &server)
        .args(["students", "delete", "stu-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[success] Student deleted."))
        .stdout(predicate::str::contains("No students yet."));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_keeps_zero_padded_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/delete_student/007"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/delete_student/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(0)
        .mount(&server)
        .await;
    mount_roster(&server, json!([])).await;

    let home = home();
    hub_for(&home, &server)
        .args(["students", "delete", "007"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[success] Student deleted."));
}
