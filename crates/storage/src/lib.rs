use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use shared::{
    domain::{PlateState, PlateStates, PopNumber, QrId, ShopNumber},
    protocol::PlateRecord,
};

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // A single connection keeps `sqlite::memory:` databases shared across queries.
        let max_connections = if database_url.starts_with("sqlite::memory:") {
            1
        } else {
            5
        };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    /// Writes the latest state for a tag within a shop, replacing any previous row.
    pub async fn upsert_plate(
        &self,
        shop_number: ShopNumber,
        plate: &PlateStates,
    ) -> Result<PlateRecord> {
        let row = sqlx::query(
            "INSERT INTO plates (shop_number, qr_id, pop_number, state, updated_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(shop_number, qr_id) DO UPDATE SET
                pop_number=excluded.pop_number,
                state=excluded.state,
                updated_at=excluded.updated_at
             RETURNING qr_id, pop_number, state, updated_at",
        )
        .bind(shop_number.0)
        .bind(plate.qr_id.as_str())
        .bind(plate.pop_number.0)
        .bind(i8::from(plate.state))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .with_context(|| {
            format!(
                "failed to upsert plate '{}' for shop {}",
                plate.qr_id.as_str(),
                shop_number.0
            )
        })?;
        plate_from_row(&row)
    }

    pub async fn list_plates_for_shop(&self, shop_number: ShopNumber) -> Result<Vec<PlateRecord>> {
        let rows = sqlx::query(
            "SELECT qr_id, pop_number, state, updated_at
             FROM plates
             WHERE shop_number = ?
             ORDER BY pop_number, qr_id",
        )
        .bind(shop_number.0)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(plate_from_row).collect()
    }
}

fn plate_from_row(row: &SqliteRow) -> Result<PlateRecord> {
    let raw_state = row.get::<i8, _>(2);
    let state = PlateState::try_from(raw_state).map_err(|e| anyhow!("corrupt plate row: {e}"))?;
    Ok(PlateRecord {
        qr_id: QrId(row.get::<String, _>(0)),
        pop_number: PopNumber(row.get::<i16, _>(1)),
        state,
        updated_at: row.get::<DateTime<Utc>, _>(3),
    })
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url.starts_with("sqlite::memory:") || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
