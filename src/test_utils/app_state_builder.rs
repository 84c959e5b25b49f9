//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` with in-memory mocks.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{EmailSender, WaitlistRepo, WaitlistUseCases},
    infra::config::{AppConfig, DEFAULT_EMAIL_FROM},
    test_utils::{InMemoryEmailSender, InMemoryWaitlistRepo},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(InMemoryWaitlistRepo::new());
/// let app_state = TestAppStateBuilder::new()
///     .with_repo(repo.clone())
///     .with_email_sender(Arc::new(FailingEmailSender))
///     .build();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the waitlist store (keep a clone of the Arc for assertions).
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Set a custom email sender (for testing delivery outcomes).
    pub fn with_email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Build the AppState with all configured mocks.
    pub fn build(self) -> AppState {
        let config = test_config();

        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::new()));
        let email_sender = self
            .email_sender
            .unwrap_or_else(|| Arc::new(InMemoryEmailSender::new()));

        let waitlist_use_cases =
            WaitlistUseCases::new(repo, email_sender, config.site_origin.clone());

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/waitlist_test".to_string(),
        database_max_connections: 1,
        run_migrations: false,
        resend_api_key: SecretString::new("re_test_key".into()),
        email_from: DEFAULT_EMAIL_FROM.to_string(),
        site_origin: Url::parse("https://boosted.band").unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        log_file: "app.log".to_string(),
    }
}
