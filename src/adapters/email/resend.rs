use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::infra::http_client;
use crate::{
    app_error::{AppError, AppResult},
    use_cases::waitlist::EmailSender,
};

const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";

/// Sends transactional email through the Resend HTTP API with a fixed sender.
#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    api_key: SecretString,
    from: String,
    endpoint: String,
}

impl ResendEmailSender {
    pub fn new(api_key: SecretString, from: String) -> Self {
        Self::with_endpoint(api_key, from, RESEND_EMAILS_URL.to_string())
    }

    pub fn with_endpoint(api_key: SecretString, from: String, endpoint: String) -> Self {
        Self {
            client: http_client::build_client(),
            api_key,
            from,
            endpoint,
        }
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        self.client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to send email: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Internal(format!("Email API error: {e}")))?;

        Ok(())
    }
}
