use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub const DEFAULT_EMAIL_FROM: &str = "Boosted <noreply@boosted.band>";

pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    /// Apply the embedded migrations on startup. The hosted table is normally
    /// provisioned out of band, so this stays off unless running locally.
    pub run_migrations: bool,
    pub resend_api_key: SecretString,
    /// Fixed sender for the welcome email, e.g. "Boosted <noreply@boosted.band>".
    pub email_from: String,
    /// Public landing page URL, linked from outgoing email.
    pub site_origin: Url,
    pub cors_origin: HeaderValue,
    pub bind_addr: SocketAddr,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: String = get_env("DATABASE_URL");
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let run_migrations: bool = get_env_default("RUN_MIGRATIONS", false);

        let resend_api_key: SecretString =
            SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let email_from: String = get_env_default("EMAIL_FROM", DEFAULT_EMAIL_FROM.to_string());
        let site_origin: Url = get_env_default(
            "SITE_ORIGIN",
            Url::parse("https://boosted.band").expect("default SITE_ORIGIN must parse"),
        );

        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            database_url,
            database_max_connections,
            run_migrations,
            resend_api_key,
            email_from,
            site_origin,
            cors_origin,
            bind_addr,
            log_file,
        }
    }
}
