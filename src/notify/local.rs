//! Delivery backed by the local database.
//!
//! A CLI has no resident process to pop OS notifications, so registrations
//! land in a `deliveries` ledger table that desktop integrations (or the
//! user, via `notify --upcoming`) can poll. The scheduler neither knows nor
//! cares: it only sees the trait.

use super::{DeliveryHandle, NotificationDelivery, Permission};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use rusqlite::params;
use uuid::Uuid;

pub struct LocalDelivery {
    pool: DbPool,
}

impl LocalDelivery {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        pool.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS deliveries (
                id         TEXT PRIMARY KEY,
                title      TEXT NOT NULL,
                body       TEXT NOT NULL,
                fire_date  TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )?;
        Ok(Self { pool })
    }

    /// Number of pending registrations.
    pub fn pending_count(&self) -> AppResult<i64> {
        let count: i64 =
            self.pool
                .conn
                .query_row("SELECT COUNT(*) FROM deliveries", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl NotificationDelivery for LocalDelivery {
    fn request_permission(&self) -> AppResult<Permission> {
        // Local ledger, nothing to ask the OS for.
        Ok(Permission::Granted)
    }

    fn schedule_at(
        &self,
        title: &str,
        body: &str,
        fire_date: DateTime<Local>,
    ) -> AppResult<DeliveryHandle> {
        let id = Uuid::new_v4().to_string();
        self.pool
            .conn
            .execute(
                "INSERT INTO deliveries (id, title, body, fire_date, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    id,
                    title,
                    body,
                    fire_date.to_rfc3339(),
                    Local::now().to_rfc3339()
                ],
            )
            .map_err(|e| AppError::Delivery(e.to_string()))?;
        Ok(DeliveryHandle(id))
    }

    fn cancel_all(&self) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM deliveries", [])
            .map_err(|e| AppError::Delivery(e.to_string()))?;
        Ok(())
    }
}
