use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{EmailSentCounts, WaitlistRepo},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

fn row_to_entry(row: sqlx::postgres::PgRow) -> WaitlistEntry {
    WaitlistEntry {
        id: row.get("id"),
        email: row.get("email"),
        user_agent: row.get("user_agent"),
        ip_address: row.get("ip_address"),
        referrer: row.get("referrer"),
        source: row.get("source"),
        email_sent: row.get("email_sent"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let row = sqlx::query(
            r#"
            INSERT INTO waitlist (email, user_agent, ip_address, referrer, source)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, user_agent, ip_address, referrer, source, email_sent, created_at
            "#,
        )
        .bind(&entry.email)
        .bind(&entry.user_agent)
        .bind(&entry.ip_address)
        .bind(&entry.referrer)
        .bind(entry.source.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(row_to_entry(row))
    }

    async fn mark_email_sent(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE waitlist SET email_sent = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM waitlist")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(row.get("total"))
    }

    async fn created_since(&self, since: DateTime<Utc>) -> AppResult<Vec<DateTime<Utc>>> {
        let rows = sqlx::query(
            "SELECT created_at FROM waitlist WHERE created_at >= $1 ORDER BY created_at ASC",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(rows.into_iter().map(|row| row.get("created_at")).collect())
    }

    async fn email_sent_counts(&self) -> AppResult<EmailSentCounts> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE email_sent) AS sent,
                COUNT(*) FILTER (WHERE NOT email_sent) AS not_sent
            FROM waitlist
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(EmailSentCounts {
            sent: row.get("sent"),
            not_sent: row.get("not_sent"),
        })
    }
}
