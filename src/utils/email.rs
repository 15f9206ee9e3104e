use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::{abstract_trait::email::EmailServiceTrait, config::EmailConfig, errors::ServiceError};

const VERIFICATION_SUBJECT: &str = "Account Verification";

fn verification_body(verification_link: &str) -> String {
    format!(r#"<a href="{verification_link}">Click here to verify your account</a>"#)
}

/// Delivers mail through an HTTP mail API that accepts
/// `{ from, to, subject, html }` JSON with bearer authentication.
#[derive(Clone)]
pub struct HttpEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmailServiceTrait for HttpEmailService {
    async fn send_account_verification(
        &self,
        email: &str,
        verification_link: &str,
    ) -> Result<(), ServiceError> {
        let payload = json!({
            "from": self.config.from,
            "to": [email],
            "subject": VERIFICATION_SUBJECT,
            "html": verification_body(verification_link),
        });

        let mut request = self.client.post(&self.config.api_url).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Email(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Mail API rejected verification email with {}", status);
            return Err(ServiceError::Email(format!("mail API responded with {status}")));
        }

        info!("Verification email sent");
        Ok(())
    }
}

/// Used when no mail API is configured: the link only goes to the log.
#[derive(Debug, Clone, Default)]
pub struct LogEmailService;

#[async_trait]
impl EmailServiceTrait for LogEmailService {
    async fn send_account_verification(
        &self,
        email: &str,
        verification_link: &str,
    ) -> Result<(), ServiceError> {
        info!(to = email, link = verification_link, "Email delivery disabled, verification link logged");
        Ok(())
    }
}
