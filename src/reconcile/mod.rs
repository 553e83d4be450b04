use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::{BlueprintError, Result};
use crate::intake::IntakeRecord;
use crate::log::{self, ArtifactSettings};
use crate::webhook::{DynWebhook, RawReply};
use crate::wire::{present_keys, BlueprintResult, WebhookResponse};

/// Sends an intake record to the webhook and maps the reply onto result
/// slots. Holds no per-submission state beyond the last submission id.
pub struct Reconciler {
    webhook: DynWebhook,
    artifacts: Option<ArtifactSettings>,
    debug: bool,
    last_submission: Option<Uuid>,
}

impl Reconciler {
    pub fn new(webhook: DynWebhook) -> Self {
        Self { webhook, artifacts: None, debug: false, last_submission: None }
    }

    pub fn with_artifacts(mut self, settings: ArtifactSettings, debug: bool) -> Self {
        self.artifacts = settings.enabled().then_some(settings);
        self.debug = debug;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.webhook.endpoint()
    }

    pub fn last_submission(&self) -> Option<Uuid> {
        self.last_submission
    }

    /// One POST, one classification. `&mut self` keeps submissions sequential.
    pub async fn submit(&mut self, record: IntakeRecord) -> Result<BlueprintResult> {
        let tx = Uuid::new_v4();
        self.last_submission = Some(tx);

        let body = serde_json::to_string(&record).map_err(BlueprintError::Encode)?;
        let sent_at = Utc::now();
        tracing::debug!(submission = %tx, endpoint = self.webhook.endpoint(), "submitting intake");

        let reply = self.webhook.post_json(body.clone()).await;

        if let Some(settings) = &self.artifacts {
            let saved = log::save_submission(settings, tx, self.webhook.endpoint(), sent_at, &body, reply.as_ref().ok());
            match saved {
                Ok(paths) if self.debug => log::print_saved_paths(&paths),
                Ok(_) => {}
                Err(e) => tracing::warn!(submission = %tx, error = %e, "could not save submission artifacts"),
            }
        }

        reconcile_reply(tx, &reply?)
    }
}

/// Status check, JSON parse, then shape classification.
pub fn reconcile_reply(tx: Uuid, reply: &RawReply) -> Result<BlueprintResult> {
    if !reply.is_success() {
        return Err(BlueprintError::HttpStatus(reply.status));
    }

    let doc: Value = serde_json::from_str(&reply.body).map_err(BlueprintError::MalformedResponse)?;
    let shape = WebhookResponse::classify(&doc);
    match &shape {
        WebhookResponse::Unrecognized => {
            tracing::warn!(submission = %tx, keys = ?present_keys(&doc), "webhook reply matched no known shape; showing empty result")
        }
        other => tracing::debug!(submission = %tx, shape = other.kind(), "classified webhook reply"),
    }

    Ok(shape.into_result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::webhook::Webhook;

    /// Replays canned replies and remembers the bodies it was sent.
    #[derive(Default)]
    struct Scripted {
        replies: Mutex<VecDeque<RawReply>>,
        sent: std::sync::Arc<Mutex<Vec<String>>>,
    }

    impl Scripted {
        fn with(replies: &[(u16, &str)]) -> Self {
            let s = Self::default();
            s.replies
                .lock()
                .unwrap()
                .extend(replies.iter().map(|(status, body)| RawReply { status: *status, body: body.to_string() }));
            s
        }
    }

    #[async_trait]
    impl Webhook for Scripted {
        async fn post_json(&self, body: String) -> Result<RawReply> {
            self.sent.lock().unwrap().push(body);
            Ok(self.replies.lock().unwrap().pop_front().expect("no scripted reply left"))
        }

        fn endpoint(&self) -> &str {
            "scripted://hook"
        }
    }

    fn ok(body: &str) -> RawReply {
        RawReply { status: 200, body: body.into() }
    }

    #[test]
    fn non_success_status_is_http_failure() {
        let err = reconcile_reply(Uuid::nil(), &RawReply { status: 500, body: r#"{"research_summary":"A"}"#.into() })
            .unwrap_err();
        assert!(matches!(err, BlueprintError::HttpStatus(500)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = reconcile_reply(Uuid::nil(), &ok("<html>oops</html>")).unwrap_err();
        assert!(matches!(err, BlueprintError::MalformedResponse(_)));
        let err = reconcile_reply(Uuid::nil(), &ok("")).unwrap_err();
        assert!(matches!(err, BlueprintError::MalformedResponse(_)));
    }

    #[test]
    fn empty_object_is_empty_success() {
        let res = reconcile_reply(Uuid::nil(), &ok("{}")).unwrap();
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn sends_record_and_classifies() {
        let hook = Scripted::with(&[(200, r#"{"research_summary":"A","prompt_seeds":"B","wireframe_raw":"C"}"#)]);
        let sent = hook.sent.clone();
        let mut rec = Reconciler::new(Box::new(hook));

        let record = IntakeRecord { brand_name: "Acme".into(), ..IntakeRecord::default() };
        let res = rec.submit(record.clone()).await.unwrap();

        assert_eq!(res.research_summary, "A");
        assert_eq!(res.prompt_seeds, "B");
        assert_eq!(res.wireframe_raw, "C");
        let sent: Vec<IntakeRecord> = sent.lock().unwrap().iter().map(|b| serde_json::from_str(b).unwrap()).collect();
        assert_eq!(sent, vec![record]);
        assert!(rec.last_submission().is_some());
    }

    #[tokio::test]
    async fn sequential_submissions_do_not_leak() {
        let hook = Scripted::with(&[
            (200, r#"{"research_summary":"A","prompt_seeds":"B","wireframe_raw":{"a":1}}"#),
            (200, r#"{"choices":[{"message":{"content":"hello"}}]}"#),
            (200, r#"{}"#),
        ]);
        let mut rec = Reconciler::new(Box::new(hook));

        let first = rec.submit(IntakeRecord::default()).await.unwrap();
        let first_id = rec.last_submission();
        assert_eq!(first.prompt_seeds, "B");

        let second = rec.submit(IntakeRecord::default()).await.unwrap();
        assert_eq!(
            second,
            BlueprintResult { research_summary: "hello".into(), ..BlueprintResult::default() }
        );
        assert_ne!(rec.last_submission(), first_id);

        let third = rec.submit(IntakeRecord::default()).await.unwrap();
        assert!(third.is_empty());
    }

    #[tokio::test]
    async fn saves_artifacts_when_enabled() {
        let tmp = tempfile::tempdir().unwrap();
        let hook = Scripted::with(&[(404, "not found")]);
        let settings = ArtifactSettings { root: tmp.path().to_path_buf(), save_request: true, save_response: true };
        let mut rec = Reconciler::new(Box::new(hook)).with_artifacts(settings, false);

        let err = rec.submit(IntakeRecord::default()).await.unwrap_err();
        assert!(matches!(err, BlueprintError::HttpStatus(404)));

        let dir = log::tx_dir(tmp.path(), rec.last_submission().unwrap());
        assert!(dir.join("request.json").is_file());
        assert_eq!(std::fs::read_to_string(dir.join("response.txt")).unwrap(), "not found");
    }
}
