use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a signup came from. Stored as a plain text tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignupSource {
    #[default]
    LandingPage,
}

impl SignupSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupSource::LandingPage => "landing_page",
        }
    }
}

/// One recorded signup intent, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub user_agent: String,
    pub ip_address: String,
    pub referrer: String,
    pub source: String,
    pub email_sent: bool,
    pub created_at: DateTime<Utc>,
}

/// Request metadata captured alongside a signup. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupMetadata {
    pub user_agent: String,
    pub ip_address: String,
    pub referrer: String,
}

/// Insert payload. `id`, `email_sent` and `created_at` are left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub user_agent: String,
    pub ip_address: String,
    pub referrer: String,
    pub source: SignupSource,
}

impl NewWaitlistEntry {
    pub fn new(email: String, metadata: SignupMetadata, source: SignupSource) -> Self {
        Self {
            email,
            user_agent: metadata.user_agent,
            ip_address: metadata.ip_address,
            referrer: metadata.referrer,
            source,
        }
    }
}
