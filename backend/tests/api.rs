//! Router-level tests: requests go through the full middleware stack against
//! a fresh in-memory database.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;

use schoolsync::auth::AuthService;
use schoolsync::database::Database;
use schoolsync::AppState;

const TOKEN: &str = "test-token";

struct TestApp {
    router: Router,
}

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: Value,
}

impl TestApp {
    async fn new() -> Self {
        let db = Database::open_local(":memory:").await.unwrap();
        let state = AppState::new(db, AuthService::new(TOKEN));
        Self {
            router: schoolsync::router(state),
        }
    }

    async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = authorization {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let auth = format!("Bearer {TOKEN}");
        self.request(method, uri, body, Some(&auth)).await
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.call(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.call(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.call(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> TestResponse {
        self.call(Method::DELETE, uri, None).await
    }
}

fn school_body(name: &str, domain: &str) -> Value {
    json!({
        "name": name,
        "address": "1 High Street",
        "city": "Leeds",
        "county": "West Yorkshire",
        "postcode": "LS1 1AA",
        "phone": 1132345678,
        "website": format!("https://{domain}"),
        "domain": domain
    })
}

fn user_body(email: &str) -> Value {
    json!({
        "email": email,
        "password": "johnpass",
        "account_type": "supervisor"
    })
}

fn session_body(supervisor_id: i64, client_id: i64, school_id: Option<i64>) -> Value {
    json!({
        "school_id": school_id,
        "supervisor_id": supervisor_id,
        "supervisor_email": "sup@school.example",
        "client_id": client_id,
        "client_email": "client@school.example",
        "date": "2024-05-01"
    })
}

fn edit_body(supervisor_id: i64, session_id: Option<i64>) -> Value {
    json!({
        "session_id": session_id,
        "supervisor_id": supervisor_id,
        "supervisor_email": "sup@school.example",
        "client_id": 2,
        "client_email": "client@school.example",
        "date": "2024-05-08",
        "request": "Move to the afternoon"
    })
}

fn id_of(response: &TestResponse) -> i64 {
    response.body["id"].as_i64().unwrap()
}

/// Supervisor id, client id and school id.
async fn seed(app: &TestApp) -> (i64, i64, i64) {
    let school = app.post("/schools", school_body("Hillside", "hillside.example")).await;
    let supervisor = app.post("/users", user_body("sup@school.example")).await;
    let client = app.post("/users", user_body("client@school.example")).await;
    (id_of(&supervisor), id_of(&client), id_of(&school))
}

#[tokio::test]
async fn root_banner_is_public() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!("Welcome to SchoolSync!"));
}

#[rstest]
#[case("/users")]
#[case("/schools/")]
#[case("/sessions/1")]
#[case("/session_edits/supervisor/a@b.c")]
#[case("/contact")]
#[tokio::test]
async fn resources_require_credentials(#[case] uri: &str) {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, uri, None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({"detail": "Not authenticated"}));
    assert_eq!(response.headers[header::WWW_AUTHENTICATE], "Bearer");
}

#[rstest]
#[case("Basic dXNlcjpwYXNz", StatusCode::UNAUTHORIZED)]
#[case("Bearer wrong-token", StatusCode::BAD_REQUEST)]
#[case("bearer test-token", StatusCode::OK)]
#[case("Bearer", StatusCode::BAD_REQUEST)]
#[case("Bearer ", StatusCode::BAD_REQUEST)]
#[case("Bearer  test-token", StatusCode::BAD_REQUEST)]
#[case("Bearer test-token ", StatusCode::BAD_REQUEST)]
#[tokio::test]
async fn authorization_header_handling(#[case] header_value: &str, #[case] expected: StatusCode) {
    let app = TestApp::new().await;
    let response = app
        .request(Method::GET, "/users", None, Some(header_value))
        .await;
    assert_eq!(response.status, expected);
    if expected == StatusCode::BAD_REQUEST {
        assert_eq!(response.body, json!({"detail": "Unauthorized"}));
    }
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/nowhere", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn user_lifecycle() {
    let app = TestApp::new().await;

    let created = app.post("/users/", user_body("johndoe@gmail.com")).await;
    assert_eq!(created.status, StatusCode::OK);
    let id = id_of(&created);
    assert_eq!(
        created.body,
        json!({"id": id, "email": "johndoe@gmail.com", "account_type": "supervisor", "school_id": null})
    );

    let fetched = app.get("/users/johndoe@gmail.com").await;
    assert_eq!(fetched.body, created.body);

    let listed = app.get("/users").await;
    assert_eq!(listed.body, json!([created.body]));

    let updated = app
        .put(
            "/users/johndoe@gmail.com",
            json!({"email": "john@school.example", "password": "new", "account_type": "client"}),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], json!(id));
    assert_eq!(updated.body["email"], json!("john@school.example"));
    assert_eq!(updated.body["account_type"], json!("client"));

    let gone = app.get("/users/johndoe@gmail.com").await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body, json!({"detail": "User not found"}));

    let deleted = app.delete(&format!("/users/{id}")).await;
    assert_eq!(deleted.body, json!({"message": "User deleted"}));

    let again = app.delete(&format!("/users/{id}")).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_user_email_conflicts() {
    let app = TestApp::new().await;
    app.post("/users", user_body("dup@school.example")).await;
    let second = app.post("/users", user_body("dup@school.example")).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert!(second.body["detail"].as_str().unwrap().contains("users.email"));
}

#[tokio::test]
async fn delete_user_requires_numeric_id() {
    let app = TestApp::new().await;
    let response = app.delete("/users/someone@school.example").await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["detail"].is_string());
}

#[tokio::test]
async fn user_with_unknown_school_is_rejected() {
    let app = TestApp::new().await;
    let mut body = user_body("a@school.example");
    body["school_id"] = json!(404);
    let response = app.post("/users", body).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body,
        json!({"detail": "Referenced record does not exist"})
    );
}

#[tokio::test]
async fn school_lifecycle() {
    let app = TestApp::new().await;

    let created = app.post("/schools", school_body("Hillside", "hillside.example")).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["phone"], json!("1132345678"));
    let id = id_of(&created);

    assert_eq!(app.get(&format!("/schools/{id}")).await.body, created.body);
    assert_eq!(app.get("/schools/").await.body, json!([created.body]));

    let mut replacement = school_body("Hillside Academy", "hillside.example");
    replacement["phone"] = json!("01132345678");
    let updated = app.put(&format!("/schools/{id}"), replacement).await;
    assert_eq!(updated.body["name"], json!("Hillside Academy"));
    assert_eq!(updated.body["phone"], json!("01132345678"));

    let missing = app
        .put("/schools/999", school_body("X", "x.example"))
        .await;
    assert_eq!(missing.body, json!({"detail": "School not found"}));

    let deleted = app.delete(&format!("/schools/{id}")).await;
    assert_eq!(deleted.body, json!({"message": "School deleted"}));
    assert_eq!(app.get(&format!("/schools/{id}")).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_bodies_are_rejected_with_detail() {
    let app = TestApp::new().await;

    let missing_field = app.post("/schools", json!({"name": "Only a name"})).await;
    assert_eq!(missing_field.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(missing_field.body["detail"].is_string());

    let auth = format!("Bearer {TOKEN}");
    let request = Request::builder()
        .method(Method::POST)
        .uri("/contact")
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn session_lifecycle_and_lookups() {
    let app = TestApp::new().await;
    let (sup, client, school) = seed(&app).await;

    let created = app.post("/sessions", session_body(sup, client, Some(school))).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["date"], json!("2024-05-01"));
    assert_eq!(created.body["additional_info"], Value::Null);
    let id = id_of(&created);

    let by_supervisor = app.get("/sessions/supervisor/sup@school.example").await;
    assert_eq!(by_supervisor.body, json!([created.body]));
    let by_client = app.get("/sessions/client/client@school.example").await;
    assert_eq!(by_client.body, json!([created.body]));
    let by_school = app.get(&format!("/sessions/school/{school}")).await;
    assert_eq!(by_school.body, json!([created.body]));

    let nobody = app.get("/sessions/client/nobody@school.example").await;
    assert_eq!(nobody.status, StatusCode::OK);
    assert_eq!(nobody.body, json!([]));

    let mut replacement = session_body(sup, client, None);
    replacement["date"] = json!("2024-06-02");
    replacement["additional_info"] = json!("Bring notes");
    let updated = app.put(&format!("/sessions/{id}"), replacement).await;
    assert_eq!(updated.body["date"], json!("2024-06-02"));
    assert_eq!(updated.body["school_id"], Value::Null);
    assert_eq!(updated.body["additional_info"], json!("Bring notes"));

    let deleted = app.delete(&format!("/sessions/{id}")).await;
    assert_eq!(deleted.body, json!({"message": "Session deleted"}));
    let gone = app.get(&format!("/sessions/{id}")).await;
    assert_eq!(gone.body, json!({"detail": "Session not found"}));
}

#[tokio::test]
async fn sessions_listed_by_school_with_trailing_slash() {
    let app = TestApp::new().await;
    let (sup, client, school) = seed(&app).await;
    let created = app.post("/sessions", session_body(sup, client, Some(school))).await;
    app.post("/sessions", session_body(sup, client, None)).await;

    let by_school = app.get(&format!("/sessions/{school}/")).await;
    assert_eq!(by_school.status, StatusCode::OK);
    assert_eq!(by_school.body, json!([created.body]));

    let unknown = app.get(&format!("/sessions/{}/", school + 100)).await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(unknown.body, json!([]));

    let by_id = app.get(&format!("/sessions/{}", id_of(&created))).await;
    assert_eq!(by_id.body, created.body);
}

#[tokio::test]
async fn session_with_bad_date_is_rejected() {
    let app = TestApp::new().await;
    let (sup, client, _) = seed(&app).await;
    let mut body = session_body(sup, client, None);
    body["date"] = json!("01/05/2024");
    let response = app.post("/sessions", body).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn session_edit_listings_404_when_empty() {
    let app = TestApp::new().await;
    for uri in [
        "/session_edits",
        "/session_edits/supervisor/sup@school.example",
        "/session_edits/client/client@school.example",
        "/session_edits/school/1",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(response.body, json!({"detail": "Session Edit not found"}));
    }
}

#[tokio::test]
async fn session_edit_lifecycle() {
    let app = TestApp::new().await;
    let (sup, client, school) = seed(&app).await;
    let session = app.post("/sessions", session_body(sup, client, Some(school))).await;

    let linked = app.post("/session_edits", edit_body(sup, Some(id_of(&session)))).await;
    assert_eq!(linked.status, StatusCode::OK);
    assert_eq!(linked.body["request"], json!("Move to the afternoon"));
    let unlinked = app.post("/session_edits/", edit_body(sup, None)).await;

    assert_eq!(
        app.get("/session_edits").await.body,
        json!([linked.body, unlinked.body])
    );
    assert_eq!(
        app.get("/session_edits/supervisor/sup@school.example").await.body,
        json!([linked.body, unlinked.body])
    );
    assert_eq!(
        app.get(&format!("/session_edits/school/{school}")).await.body,
        json!([linked.body])
    );

    let id = id_of(&unlinked);
    assert_eq!(app.get(&format!("/session_edits/{id}")).await.body, unlinked.body);
    let deleted = app.delete(&format!("/session_edits/{id}")).await;
    assert_eq!(deleted.body, json!({"message": "Session Edit deleted"}));
    let gone = app.delete(&format!("/session_edits/{id}")).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn session_edits_cannot_be_updated() {
    let app = TestApp::new().await;
    let (sup, _, _) = seed(&app).await;
    let created = app.post("/session_edits", edit_body(sup, None)).await;
    let response = app
        .put(&format!("/session_edits/{}", id_of(&created)), edit_body(sup, None))
        .await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn contact_lifecycle() {
    let app = TestApp::new().await;

    let created = app
        .post(
            "/contact/",
            json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = id_of(&created);
    assert_eq!(
        created.body,
        json!({"id": id, "name": "Ada", "email": "ada@example.com", "message": "Hello"})
    );

    assert_eq!(app.get("/contact").await.body, json!([created.body]));
    assert_eq!(app.get(&format!("/contact/{id}")).await.body, created.body);

    let deleted = app.delete(&format!("/contact/{id}")).await;
    assert_eq!(deleted.body, json!({"message": "Contact deleted"}));
    let missing = app.get(&format!("/contact/{id}")).await;
    assert_eq!(missing.body, json!({"detail": "Contact not found"}));
}

#[tokio::test]
async fn deleting_school_keeps_sessions() {
    let app = TestApp::new().await;
    let (sup, client, school) = seed(&app).await;
    let session = app.post("/sessions", session_body(sup, client, Some(school))).await;

    app.delete(&format!("/schools/{school}")).await;

    let fetched = app.get(&format!("/sessions/{}", id_of(&session))).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["school_id"], Value::Null);
}
