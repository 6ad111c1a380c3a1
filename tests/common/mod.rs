#![allow(dead_code)]

use std::net::TcpListener;
use std::str::FromStr;

use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Executor, SqlitePool};

const TEST_DATA: &str = include_str!("../fixtures/test_data.sql");

/// A running server backed by its own seeded in-memory database.
pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

/// In-memory SQLite lives as long as its connection, so the pool is pinned
/// to a single connection that never expires.
async fn seeded_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    nc_news::migrate(&pool).await.unwrap();
    pool.execute(TEST_DATA).await.unwrap();
    pool
}

pub async fn spawn_app() -> TestApp {
    let pool = seeded_pool().await;
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    let router = nc_news::make_router(pool.clone());
    tokio::spawn(nc_news::run_app(router, listener));

    TestApp {
        address,
        pool,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        into_parts(response).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        into_parts(response).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .patch(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        into_parts(response).await
    }

    pub async fn delete(&self, path: &str) -> (u16, String) {
        let response = self.client.delete(self.url(path)).send().await.unwrap();
        let status = response.status().as_u16();
        (status, response.text().await.unwrap())
    }

    pub async fn count(&self, query: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(query)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

async fn into_parts(response: reqwest::Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

pub fn ids(rows: &Value, key: &str) -> Vec<i64> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| row[key].as_i64().unwrap())
        .collect()
}

pub fn is_sorted_by<F>(rows: &Value, descending: bool, key: F) -> bool
where
    F: Fn(&Value) -> Value,
{
    let keys: Vec<Value> = rows.as_array().unwrap().iter().map(key).collect();
    keys.windows(2).all(|pair| {
        let ordering = compare(&pair[0], &pair[1]);
        if descending {
            ordering != std::cmp::Ordering::Less
        } else {
            ordering != std::cmp::Ordering::Greater
        }
    })
}

fn compare(a: &Value, b: &Value) -> std::cmp::Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.as_i64().cmp(&b.as_i64()),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => std::cmp::Ordering::Equal,
    }
}
