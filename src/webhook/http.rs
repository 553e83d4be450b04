use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use super::{RawReply, Webhook};
use crate::errors::Result;

/// reqwest-backed webhook. No timeout unless one is configured.
pub struct HttpWebhook {
    endpoint: String,
    client: Client,
}

impl HttpWebhook {
    pub fn new(endpoint: impl Into<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            endpoint: endpoint.into(),
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Webhook for HttpWebhook {
    async fn post_json(&self, body: String) -> Result<RawReply> {
        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "POST webhook");

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "webhook replied");

        Ok(RawReply { status: status.as_u16(), body })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
