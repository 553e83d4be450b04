use async_trait::async_trait;

use crate::errors::Result;

pub mod http;

pub use http::HttpWebhook;

pub const DEFAULT_ENDPOINT: &str = "https://poojatailor.app.n8n.cloud/webhook/ux-blueprint";

/// What came back over the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam for the blueprint webhook. Errors here are transport
/// failures only; status and body are judged by the caller.
#[async_trait]
pub trait Webhook: Send + Sync {
    async fn post_json(&self, body: String) -> Result<RawReply>;

    fn endpoint(&self) -> &str;
}

pub type DynWebhook = Box<dyn Webhook + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let reply = |status| RawReply { status, body: String::new() };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(301).is_success());
        assert!(!reply(500).is_success());
    }
}
