// src/main.rs

use bloglist::config::Config;
use bloglist::db;
use bloglist::routes;
use bloglist::state::AppState;
use bloglist::utils::hash::hash_password;
use sqlx::SqlitePool;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("JWT_SECRET must be set");

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open database");
    tracing::info!("Database opened at {}", config.database_url);

    db::migrate(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    if let Err(e) = seed_user(&pool, &config).await {
        tracing::error!("Failed to seed user: {:?}", e);
    }

    let state = AppState {
        pool,
        config: config.clone(),
    };

    let app = routes::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, app).await.unwrap();
}

/// Creates the configured seed user unless the username already exists.
async fn seed_user(pool: &SqlitePool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if let (Some(username), Some(password)) = (&config.seed_username, &config.seed_password) {
        if db::users::username_exists(pool, username).await? {
            return Ok(());
        }

        tracing::info!("Seeding user: {}", username);
        let password_hash = hash_password(password)?;
        db::users::insert(pool, username, "", &password_hash).await?;
        tracing::info!("Seed user created successfully.");
    }
    Ok(())
}
