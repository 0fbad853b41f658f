use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, Activity, Location, User};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn empty_post(uri: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Sends one request through a router that keeps its state between calls.
async fn call(app: &mut Router, request: Request<String>) -> axum::response::Response {
    ServiceExt::<Request<String>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap()
}

async fn register(app: &mut Router, first: &str, email: &str) -> User {
    let body = format!(
        r#"{{"firstName":"{first}","lastName":"Test","email":"{email}","password":"pw"}}"#
    );
    let resp = call(app, json_request("POST", "/users", &body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- users ---

#[tokio::test]
async fn list_users_empty() {
    let resp = app().oneshot(get("/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn create_user_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"firstName":"Ana","lastName":"Lee","email":"ana@x.com","password":"pw"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.email, "ana@x.com");
    assert!(!user.id.is_empty());
}

#[tokio::test]
async fn create_user_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/users", r#"{"firstName":"Ana"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- activities ---

#[tokio::test]
async fn activities_of_unknown_user_is_404() {
    let resp = app().oneshot(get("/users/nobody/activities")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn activity_and_location_lifecycle() {
    let mut app = app();
    let ana = register(&mut app, "Ana", "ana@x.com").await;

    let resp = call(
        &mut app,
        json_request(
            "POST",
            &format!("/users/{}/activities", ana.id),
            r#"{"type":"run","location":"park","distance":5.0}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let activity: Activity = body_json(resp).await;
    assert_eq!(activity.kind, "run");

    let resp = call(
        &mut app,
        get(&format!("/users/{}/activities/{}", ana.id, activity.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Activity = body_json(resp).await;
    assert_eq!(fetched.id, activity.id);

    let locations_uri = format!("/users/{}/activities/{}/locations", ana.id, activity.id);
    let resp = call(
        &mut app,
        json_request("POST", &locations_uri, r#"{"latitude":52.1,"longitude":-7.1}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = call(&mut app, get(&locations_uri)).await;
    let locations: Vec<Location> = body_json(resp).await;
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].latitude, 52.1);

    let resp = call(
        &mut app,
        get(&format!("/users/{}/activities/missing/locations", ana.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- friends and messages ---

#[tokio::test]
async fn follow_message_unfollow() {
    let mut app = app();
    let ana = register(&mut app, "Ana", "ana@x.com").await;
    let bo = register(&mut app, "Bo", "bo@x.com").await;

    // messaging someone you do not follow is rejected
    let message_uri = format!("/users/{}/message/bo%40x.com", ana.id);
    let resp = call(&mut app, json_request("POST", &message_uri, r#""hi""#)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let friend_uri = format!("/users/{}/friends/bo%40x.com", ana.id);
    let resp = call(&mut app, get(&friend_uri)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation: String = body_json(resp).await;
    assert_eq!(confirmation, "now following bo@x.com");

    // following twice is idempotent
    call(&mut app, get(&friend_uri)).await;
    let resp = call(&mut app, get(&format!("/users/{}/friendslist", ana.id))).await;
    let friends: Vec<User> = body_json(resp).await;
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id, bo.id);

    let resp = call(&mut app, json_request("POST", &message_uri, r#""hi bo""#)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = call(&mut app, get(&format!("/users/{}/retrivemessage", bo.id))).await;
    let inbox: Vec<String> = body_json(resp).await;
    assert_eq!(inbox, vec!["hi bo".to_string()]);

    let resp = call(&mut app, get(&format!("/users/{}/retrivemessage", ana.id))).await;
    let inbox: Vec<String> = body_json(resp).await;
    assert!(inbox.is_empty());

    let resp = call(&mut app, empty_post(&friend_uri)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = call(&mut app, empty_post(&friend_uri)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn follow_unknown_email_is_404() {
    let mut app = app();
    let ana = register(&mut app, "Ana", "ana@x.com").await;
    let resp = call(
        &mut app,
        get(&format!("/users/{}/friends/ghost%40x.com", ana.id)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
