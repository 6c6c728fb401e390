//! Table DDL, connection setup, and the startup reset + seed.

use crate::config::{SeedData, Settings};
use crate::error::{AppError, ConfigError};
use crate::model::Entity;
use crate::sql;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Dependency order: offers reference orders and users, orders reference users.
const CREATE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE "user" (
        "id" INTEGER PRIMARY KEY,
        "first_name" VARCHAR(100),
        "last_name" VARCHAR(100),
        "age" INTEGER,
        "email" VARCHAR(100),
        "role" VARCHAR(100),
        "phone" VARCHAR(100)
    )
    "#,
    r#"
    CREATE TABLE "order" (
        "id" INTEGER PRIMARY KEY,
        "name" VARCHAR(100),
        "description" VARCHAR(100),
        "start_date" VARCHAR(100),
        "end_date" VARCHAR(100),
        "address" VARCHAR(100),
        "price" INTEGER,
        "customer_id" INTEGER REFERENCES "user" ("id"),
        "executor_id" INTEGER REFERENCES "user" ("id")
    )
    "#,
    r#"
    CREATE TABLE "offer" (
        "id" INTEGER PRIMARY KEY,
        "order_id" INTEGER REFERENCES "order" ("id"),
        "executor_id" INTEGER REFERENCES "user" ("id")
    )
    "#,
];

const DROP_TABLES: &[&str] = &[
    r#"DROP TABLE IF EXISTS "offer""#,
    r#"DROP TABLE IF EXISTS "order""#,
    r#"DROP TABLE IF EXISTS "user""#,
];

/// Open the pool described by `settings`.
///
/// References are declared in the DDL but not enforced, so foreign key checks are
/// switched off. An in-memory database is dropped with its last connection, so that
/// connection is never reaped.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&settings.database_url)
        .map_err(|_| ConfigError::InvalidSetting {
            key: "DATABASE_URL",
            value: settings.database_url.clone(),
        })?
        .foreign_keys(false);

    let mut pool_opts = SqlitePoolOptions::new().max_connections(settings.pool_size());
    if settings.is_in_memory() {
        pool_opts = pool_opts
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = pool_opts.connect_with(opts).await?;
    tracing::debug!(url = %settings.database_url, size = settings.pool_size(), "store connected");
    Ok(pool)
}

/// Drop and recreate `user`, `order` and `offer`.
pub async fn reset(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in DROP_TABLES.iter().chain(CREATE_TABLES) {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("tables recreated");
    Ok(())
}

/// Insert every seed row in one transaction. Any constraint violation aborts the whole seed.
pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    insert_all(&mut tx, &data.users).await?;
    insert_all(&mut tx, &data.orders).await?;
    insert_all(&mut tx, &data.offers).await?;
    tx.commit().await?;
    tracing::info!(
        users = data.users.len(),
        orders = data.orders.len(),
        offers = data.offers.len(),
        "store seeded"
    );
    Ok(())
}

async fn insert_all<E: Entity>(conn: &mut SqliteConnection, rows: &[E]) -> Result<(), AppError> {
    let sql = sql::insert::<E>();
    for row in rows {
        row.bind_all(sqlx::query(&sql))
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::from_write(e, E::describe(row.id())))?;
    }
    Ok(())
}
