use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::instrument;
use url::Url;
use uuid::Uuid;

use crate::app_error::{AppError, AppResult};
use crate::application::email_templates;
use crate::application::validators::{is_plausible_email, normalize_email};
use crate::domain::entities::waitlist_entry::{
    NewWaitlistEntry, SignupMetadata, SignupSource, WaitlistEntry,
};

/// Trailing window covered by the per-day breakdown.
pub const ANALYTICS_WINDOW_DAYS: i64 = 30;

// ============================================================================
// Ports
// ============================================================================

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Insert a new entry. Returns `AppError::AlreadyRegistered` when the
    /// email is already on the list.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;

    async fn mark_email_sent(&self, id: Uuid) -> AppResult<()>;

    async fn count_all(&self) -> AppResult<i64>;

    /// Creation timestamps of entries created at or after `since`, oldest first.
    async fn created_since(&self, since: DateTime<Utc>) -> AppResult<Vec<DateTime<Utc>>>;

    async fn email_sent_counts(&self) -> AppResult<EmailSentCounts>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

// ============================================================================
// Analytics Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmailSentCounts {
    pub sent: i64,
    pub not_sent: i64,
}

impl EmailSentCounts {
    /// Percentage of entries whose welcome email went out, one decimal place.
    pub fn success_rate(&self) -> f64 {
        let total = self.sent + self.not_sent;
        if total <= 0 {
            return 0.0;
        }
        (self.sent as f64 / total as f64 * 1000.0).round() / 10.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistAnalytics {
    pub total_signups: i64,
    /// `YYYY-MM-DD` (UTC) -> signups that day.
    pub daily_signups: BTreeMap<String, u64>,
    pub email_stats: EmailSentCounts,
    pub success_rate: f64,
    /// Days in the window with at least one signup.
    pub active_days: usize,
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Arc<dyn EmailSender>,
    site_origin: Url,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, email: Arc<dyn EmailSender>, site_origin: Url) -> Self {
        Self {
            repo,
            email,
            site_origin,
        }
    }

    /// Put an email on the waitlist and try to send the welcome email.
    ///
    /// The welcome email is best effort: its failure is logged and the signup
    /// still succeeds with `email_sent` left false.
    #[instrument(skip_all)]
    pub async fn join(&self, raw_email: &str, metadata: SignupMetadata) -> AppResult<WaitlistEntry> {
        if !is_plausible_email(raw_email) {
            return Err(AppError::InvalidInput("Valid email is required".into()));
        }

        let new_entry = NewWaitlistEntry::new(
            normalize_email(raw_email),
            metadata,
            SignupSource::LandingPage,
        );

        let mut entry = self.repo.insert(&new_entry).await?;
        tracing::info!(entry_id = %entry.id, "Waitlist signup recorded");

        entry.email_sent = self.deliver_welcome(&entry).await;
        Ok(entry)
    }

    /// Returns whether the entry is now flagged as sent.
    async fn deliver_welcome(&self, entry: &WaitlistEntry) -> bool {
        let (subject, html) = email_templates::welcome_email(&self.site_origin);

        if let Err(err) = self.email.send(&entry.email, &subject, &html).await {
            tracing::error!(entry_id = %entry.id, error = %err, "Failed to send welcome email");
            return false;
        }

        match self.repo.mark_email_sent(entry.id).await {
            Ok(()) => {
                tracing::info!(entry_id = %entry.id, "Welcome email sent");
                true
            }
            Err(err) => {
                tracing::warn!(entry_id = %entry.id, error = %err, "Welcome email sent but flag update failed");
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn total_signups(&self) -> AppResult<i64> {
        self.repo.count_all().await
    }

    #[instrument(skip(self))]
    pub async fn analytics(&self, now: DateTime<Utc>) -> AppResult<WaitlistAnalytics> {
        let total_signups = self.repo.count_all().await?;

        let since = now - Duration::days(ANALYTICS_WINDOW_DAYS);
        let recent = self.repo.created_since(since).await?;
        let daily_signups = bucket_by_day(&recent);

        let email_stats = self.repo.email_sent_counts().await?;

        Ok(WaitlistAnalytics {
            total_signups,
            active_days: daily_signups.len(),
            daily_signups,
            success_rate: email_stats.success_rate(),
            email_stats,
        })
    }
}

/// Counts timestamps per UTC calendar date.
pub fn bucket_by_day(timestamps: &[DateTime<Utc>]) -> BTreeMap<String, u64> {
    let mut days = BTreeMap::new();
    for ts in timestamps {
        let day = ts.date_naive().format("%Y-%m-%d").to_string();
        *days.entry(day).or_insert(0) += 1;
    }
    days
}
