#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use shopshare_api::auth::jwt::{self, JwtConfig};
use shopshare_api::auth::password::hash_password;
use shopshare_api::config::ServerConfig;
use shopshare_api::router::build_app_router;
use shopshare_api::state::AppState;
use shopshare_core::roles::Role;
use shopshare_db::models::user::{CreateUser, User};
use shopshare_db::repositories::UserRepo;

pub const TEST_SECRET: &str = "test-secret-for-integration-tests";
pub const TEST_PASSWORD: &str = "secret123";
pub const TEST_ORIGIN: &str = "http://localhost:5000";

/// Build a test `ServerConfig` with safe defaults and a fresh upload directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        upload_dir: std::env::temp_dir().join(format!("shopshare-test-{}", uuid::Uuid::new_v4())),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool).0
}

/// Like [`build_test_app`], also returning the upload directory in use.
pub fn build_test_app_with(pool: PgPool) -> (Router, PathBuf) {
    let config = test_config();
    let upload_dir = config.upload_dir.clone();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), upload_dir)
}

/// Number of files currently stored in an upload directory.
pub fn stored_upload_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] and return it with a valid token.
pub async fn create_user(pool: &PgPool, email: &str, role: Role) -> (User, String) {
    let input = CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        role,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let token = token_for(user.id);
    (user, token)
}

pub fn token_for(user_id: i64) -> String {
    jwt::issue(
        user_id,
        &JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    )
    .expect("token issue should succeed")
}

/// Insert a product through SQL and return its id.
pub async fn insert_product(pool: &PgPool, name: &str, price: f64) -> i64 {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(price)
            .fetch_one(pool)
            .await
            .expect("product insert should succeed");
    id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, json_request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, json_request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, json_request(Method::DELETE, uri, Some(token), None)).await
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "----shopshare-test-boundary";

/// A file part for [`MultipartForm`].
pub struct FilePart {
    pub field: &'static str,
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

/// Minimal `multipart/form-data` body builder.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                part.field, part.file_name, part.content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(&part.data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

pub async fn send_multipart(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    form: MultipartForm,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(form.finish())).unwrap()).await
}

/// A tiny PNG: signature plus the start of an IHDR chunk.
pub fn png_bytes() -> Vec<u8> {
    b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x02\0\0\0".to_vec()
}

pub fn png_part(field: &'static str) -> FilePart {
    FilePart {
        field,
        file_name: "photo.png",
        content_type: "image/png",
        data: png_bytes(),
    }
}
