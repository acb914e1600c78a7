use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::Identity;

#[derive(Debug, Clone, Deserialize)]
pub struct MagicLinkRequested {
    pub message: String,
    #[serde(default)]
    pub demo_token: Option<String>,
    pub expires_in_minutes: i64,
}

/// The accounts backend: magic-link authentication and the current session's
/// identity. The wizard only reads the identity; it never logs in or out
/// itself.
#[async_trait]
pub trait AccountsProvider: Send + Sync {
    /// The authenticated patient, or `None` when the session has none.
    /// Absence is a normal outcome, not an error.
    async fn current_identity(&self) -> anyhow::Result<Option<Identity>>;

    async fn request_magic_link(&self, email: &str) -> anyhow::Result<MagicLinkRequested>;

    async fn verify_magic_link(&self, token: &str) -> anyhow::Result<Identity>;

    async fn logout(&self) -> anyhow::Result<()>;
}

pub struct HttpAccountsProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAccountsProvider {
    pub fn new(base_url: String, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build accounts HTTP client")?;
        Ok(HttpAccountsProvider { base_url, client })
    }
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct TokenBody<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct VerifyResponse {
    user: Identity,
}

#[async_trait]
impl AccountsProvider for HttpAccountsProvider {
    async fn current_identity(&self) -> anyhow::Result<Option<Identity>> {
        let url = format!("{}/accounts/me/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to reach accounts backend")?;

        // Any non-success answer means "not signed in" here; transport
        // failures above still surface as errors.
        if !response.status().is_success() {
            return Ok(None);
        }
        let identity = response.json().await.context("invalid identity response")?;
        Ok(Some(identity))
    }

    async fn request_magic_link(&self, email: &str) -> anyhow::Result<MagicLinkRequested> {
        let url = format!("{}/accounts/magic/request/", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&EmailBody { email })
            .send()
            .await
            .context("failed to reach accounts backend")?
            .error_for_status()
            .context("accounts backend rejected magic link request")?;

        response
            .json()
            .await
            .context("invalid magic link response")
    }

    async fn verify_magic_link(&self, token: &str) -> anyhow::Result<Identity> {
        let url = format!("{}/accounts/magic/verify/", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&TokenBody { token })
            .send()
            .await
            .context("failed to reach accounts backend")?
            .error_for_status()
            .context("magic link verification failed")?;

        let verified: VerifyResponse = response
            .json()
            .await
            .context("invalid verification response")?;
        Ok(verified.user)
    }

    async fn logout(&self) -> anyhow::Result<()> {
        let url = format!("{}/accounts/logout/", self.base_url);
        self.client
            .post(&url)
            .send()
            .await
            .context("failed to reach accounts backend")?
            .error_for_status()
            .context("logout failed")?;
        Ok(())
    }
}
