//! Tests for users API handlers.

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockUserStore, UserStore};
use crate::outbound::memory::InMemoryUserStore;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn test_app(
    users: Arc<dyn UserStore>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(users)))
        .service(register_user)
        .service(get_user)
}

fn register_request(username: &str, email: &str) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/register/")
        .set_json(&RegisterRequest {
            username: username.into(),
            email: email.into(),
        })
        .to_request()
}

fn lookup_request(username: &str) -> actix_http::Request {
    actix_test::TestRequest::get()
        .uri(&format!("/user/{username}"))
        .to_request()
}

#[actix_web::test]
async fn register_then_lookup_returns_record() {
    let store = Arc::new(InMemoryUserStore::new());
    let app = actix_test::init_service(test_app(store.clone())).await;

    let response = actix_test::call_service(&app, register_request("alice", "a@x.com")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"message": "User registered successfully."}));

    let response = actix_test::call_service(&app, lookup_request("alice")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"username": "alice", "email": "a@x.com"}));
    assert_eq!(store.len().await, 1);
}

#[actix_web::test]
async fn duplicate_registration_is_rejected() {
    let app = actix_test::init_service(test_app(Arc::new(InMemoryUserStore::new()))).await;
    let first = actix_test::call_service(&app, register_request("alice", "a@x.com")).await;
    assert!(first.status().is_success());

    let second = actix_test::call_service(&app, register_request("alice", "other@x.com")).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = actix_test::read_body_json(second).await;
    assert_eq!(body.status_code, 400);
    assert_eq!(body.message, "User already exists.");
    assert_eq!(body.error_code, ErrorCode::InvalidUserData);
}

#[actix_web::test]
async fn empty_username_is_invalid_user_data() {
    let store = Arc::new(InMemoryUserStore::new());
    let app = actix_test::init_service(test_app(store.clone())).await;

    let response = actix_test::call_service(&app, register_request("", "a@x.com")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, "username must not be empty");
    assert_eq!(body.error_code, ErrorCode::InvalidUserData);
    assert!(store.is_empty().await);
}

#[rstest]
#[case(" ", "%20")]
#[case("   ", "%20%20%20")]
#[actix_web::test]
async fn whitespace_username_registers_and_resolves(#[case] username: &str, #[case] encoded: &str) {
    let store = Arc::new(InMemoryUserStore::new());
    let app = actix_test::init_service(test_app(store.clone())).await;

    let response = actix_test::call_service(&app, register_request(username, "a@x.com")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.len().await, 1);

    let response = actix_test::call_service(&app, lookup_request(encoded)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({"username": username, "email": "a@x.com"}));
}

#[rstest]
#[case("bob")]
#[case("nobody")]
#[actix_web::test]
async fn unknown_user_is_not_found(#[case] username: &str) {
    let app = actix_test::init_service(test_app(Arc::new(InMemoryUserStore::new()))).await;

    let response = actix_test::call_service(&app, lookup_request(username)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.status_code, 404);
    assert_eq!(body.message, format!("User with ID {username} not found."));
    assert_eq!(body.error_code, ErrorCode::UserNotFound);
}

#[actix_web::test]
async fn repeated_lookups_only_read_the_store() {
    let alice = User::try_from_parts("alice", "a@x.com").expect("valid user");
    let mut store = MockUserStore::new();
    store.expect_insert().never();
    store
        .expect_find()
        .withf(|username: &str| username == "alice")
        .times(3)
        .returning(move |_| Ok(alice.clone()));
    let app = actix_test::init_service(test_app(Arc::new(store))).await;

    for _ in 0..3 {
        let response = actix_test::call_service(&app, lookup_request("alice")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({"username": "alice", "email": "a@x.com"}));
    }
}

#[actix_web::test]
async fn store_errors_propagate_to_the_mapper() {
    let mut store = MockUserStore::new();
    store
        .expect_insert()
        .times(1)
        .returning(|_| Err(Error::invalid_user_data("store refused")));
    let app = actix_test::init_service(test_app(Arc::new(store))).await;

    let response = actix_test::call_service(&app, register_request("alice", "a@x.com")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.message, "store refused");
}

#[actix_web::test]
async fn malformed_body_keeps_framework_default_response() {
    let store = Arc::new(InMemoryUserStore::new());
    let app = actix_test::init_service(test_app(store.clone())).await;

    let request = actix_test::TestRequest::post()
        .uri("/register/")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"username":"alice"}"#)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = actix_test::read_body(response).await;
    assert!(serde_json::from_slice::<ErrorResponse>(&bytes).is_err());
    assert!(store.is_empty().await);
}
