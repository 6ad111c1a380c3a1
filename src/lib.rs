pub mod config;
pub mod data_formats;
pub mod db_helpers;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod validation;

use std::{net::TcpListener, str::FromStr, sync::Arc};

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
use handlers::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::AppConfig;

pub type JsonResponse<T> = (StatusCode, Json<T>);

/// Builds the pool, serves until Ctrl-C, then closes the pool.
pub async fn run(config: AppConfig) -> Result<()> {
    let pool = init_db(&config.database_url).await?;
    let listener = TcpListener::bind(config.address())
        .with_context(|| format!("Could not bind {}", config.address()))?;
    tracing::info!("Server started on {}", config.address());

    let result = run_app(make_router(pool.clone()), listener).await;

    tracing::info!("Closing database pool");
    pool.close().await;
    result
}

pub async fn run_app(app: Router, listener: TcpListener) -> Result<()> {
    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .context("Failed to create database")?;
    } else {
        tracing::info!("Database already exists");
    }
    let options = SqliteConnectOptions::from_str(db_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    migrate(&pool).await?;
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Running Migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations completed");
    Ok(())
}

pub fn make_router(pool: SqlitePool) -> Router {
    let api = Router::new()
        .route("/", get(get_endpoints))
        .route("/topics", get(get_topics).post(post_topic))
        .route("/articles", get(get_articles).post(post_article))
        .route(
            "/articles/:article_id",
            get(get_article_by_id)
                .patch(patch_article_by_id)
                .delete(remove_article_by_id),
        )
        .route(
            "/articles/:article_id/comments",
            get(get_comments_by_article_id).post(post_comment_by_article_id),
        )
        .route(
            "/comments/:comment_id",
            patch(patch_comment_by_id).delete(remove_comment_by_id),
        )
        .route("/users", get(get_users))
        .route("/users/:username", get(get_user_by_username));

    Router::new()
        .route("/check_health", get(alive))
        .nest("/api", api)
        .fallback(not_found)
        .layer(Extension(Arc::new(pool)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
