//! In-memory mock implementations of the waitlist ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{EmailSender, EmailSentCounts, WaitlistRepo},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Enforces the unique email constraint the real table has.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    insert_calls: AtomicUsize,
    fail_all: AtomicBool,
    fail_mark_sent: AtomicBool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail like an unreachable database.
    pub fn fail_all(&self) {
        self.fail_all.store(true, Ordering::SeqCst);
    }

    /// Make only `mark_email_sent` fail.
    pub fn fail_mark_sent(&self) {
        self.fail_mark_sent.store(true, Ordering::SeqCst);
    }

    /// Number of insert attempts (for asserting validation short-circuits).
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn get_by_email(&self, email: &str) -> Option<WaitlistEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AppError::Database("Database operation failed".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::AlreadyRegistered);
        }

        let stored = WaitlistEntry {
            id: Uuid::new_v4(),
            email: entry.email.clone(),
            user_agent: entry.user_agent.clone(),
            ip_address: entry.ip_address.clone(),
            referrer: entry.referrer.clone(),
            source: entry.source.as_str().to_string(),
            email_sent: false,
            created_at: Utc::now(),
        };
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn mark_email_sent(&self, id: Uuid) -> AppResult<()> {
        self.check_available()?;
        if self.fail_mark_sent.load(Ordering::SeqCst) {
            return Err(AppError::Database("Database operation failed".into()));
        }

        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
            entry.email_sent = true;
        }
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        self.check_available()?;
        Ok(self.entries.lock().unwrap().len() as i64)
    }

    async fn created_since(&self, since: DateTime<Utc>) -> AppResult<Vec<DateTime<Utc>>> {
        self.check_available()?;
        let mut stamps: Vec<DateTime<Utc>> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.created_at)
            .filter(|created_at| *created_at >= since)
            .collect();
        stamps.sort();
        Ok(stamps)
    }

    async fn email_sent_counts(&self) -> AppResult<EmailSentCounts> {
        self.check_available()?;
        let entries = self.entries.lock().unwrap();
        let sent = entries.iter().filter(|e| e.email_sent).count() as i64;
        Ok(EmailSentCounts {
            sent,
            not_sent: entries.len() as i64 - sent,
        })
    }
}

/// A captured outgoing email.
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Email sender that records every message instead of sending it.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<SentEmail>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// Email sender whose provider is always down.
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> AppResult<()> {
        Err(AppError::Internal("Email API error: 503 Service Unavailable".into()))
    }
}
