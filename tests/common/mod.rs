// tests/common/mod.rs

#![allow(dead_code)]

use bloglist::{config::Config, db, routes, state::AppState, utils::hash::hash_password};
use sqlx::SqlitePool;

pub const ROOT_USERNAME: &str = "root";
pub const ROOT_PASSWORD: &str = "salasana";

/// Blogs present before every test; none of them has an owner.
pub const INITIAL_BLOGS: [(&str, &str, &str, i64); 2] = [
    ("Blogin otsikko", "Erkko Mäkinen", "google.fi", 10),
    ("Heipä hei!", "Testi Teppo", "testaa.fi", 10),
];

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

/// Spawns the app on a random port over a fresh in-memory database holding
/// `INITIAL_BLOGS` and a `root` user.
pub async fn spawn_app() -> TestApp {
    let pool = db::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::migrate(&pool).await.expect("Failed to migrate database");

    for (title, author, url, likes) in INITIAL_BLOGS {
        sqlx::query("INSERT INTO blogs (title, author, url, likes) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind(author)
            .bind(url)
            .bind(likes)
            .execute(&pool)
            .await
            .unwrap();
    }

    let password_hash = hash_password(ROOT_PASSWORD).unwrap();
    db::users::insert(&pool, ROOT_USERNAME, "Superuser", &password_hash)
        .await
        .unwrap();

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test_secret_for_integration_tests".to_string(),
        jwt_expiration: 600,
        port: 0,
        rust_log: "error".to_string(),
        seed_username: None,
        seed_password: None,
    };

    let state = AppState {
        pool: pool.clone(),
        config,
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        pool,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn blog_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn user_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Logs in as `root` and returns the bearer token.
    pub async fn root_token(&self) -> String {
        let body: serde_json::Value = self
            .login(ROOT_USERNAME, ROOT_PASSWORD)
            .await
            .json()
            .await
            .expect("Failed to parse login json");

        body["token"].as_str().expect("Token not found").to_string()
    }

    pub async fn create_blog(&self, token: Option<&str>, body: serde_json::Value) -> reqwest::Response {
        let mut request = self.client.post(self.url("/api/blogs")).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn register(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/users"))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn unique_username() -> String {
    format!("u_{}", &uuid::Uuid::new_v4().to_string()[..8])
}

pub fn is_json(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
