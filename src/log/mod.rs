use chrono::{DateTime, Utc};
use fs_err as fs;
use serde::Serialize;
use serde_json::{to_string_pretty, Value};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::webhook::RawReply;

/// Install the stderr subscriber. `RUST_LOG` wins over the flag.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { "ux_blueprint=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Where (and whether) request/response bodies are kept for operators.
#[derive(Debug, Clone)]
pub struct ArtifactSettings {
    pub root: PathBuf,
    pub save_request: bool,
    pub save_response: bool,
}

impl ArtifactSettings {
    pub fn enabled(&self) -> bool {
        self.save_request || self.save_response
    }
}

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

#[derive(Serialize)]
struct SubmissionMeta<'a> {
    id: Uuid,
    endpoint: &'a str,
    sent_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

pub fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join(".blueprint").join("tx").join(tx.to_string())
}

/// Persist one submission. A missing reply means the transport failed.
pub fn save_submission(
    settings: &ArtifactSettings,
    tx: Uuid,
    endpoint: &str,
    sent_at: DateTime<Utc>,
    request_body: &str,
    reply: Option<&RawReply>,
) -> io::Result<SavedPaths> {
    let dir = tx_dir(&settings.root, tx);
    fs::create_dir_all(&dir)?;

    let meta = SubmissionMeta { id: tx, endpoint, sent_at, status: reply.map(|r| r.status) };
    fs::write(dir.join("submission.json"), to_string_pretty(&meta)?)?;

    let mut request_path = None;
    let mut response_path = None;

    if settings.save_request {
        let p = dir.join("request.json");
        fs::write(&p, pretty_or_raw(request_body))?;
        request_path = Some(p);
    }

    if settings.save_response {
        if let Some(reply) = reply {
            let ext = if serde_json::from_str::<Value>(&reply.body).is_ok() { "json" } else { "txt" };
            let p = dir.join(format!("response.{ext}"));
            fs::write(&p, pretty_or_raw(&reply.body))?;
            response_path = Some(p);
        }
    }

    Ok(SavedPaths { dir, request: request_path, response: response_path })
}

fn pretty_or_raw(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|v| to_string_pretty(&v).ok())
        .unwrap_or_else(|| text.to_string())
}

pub fn print_saved_paths(saved: &SavedPaths) {
    eprintln!("debug: artifacts directory: {}", saved.dir.display());
    match &saved.request {
        Some(p) => eprintln!("debug: request saved at: {}", p.display()),
        None => eprintln!("debug: request not saved (flag off)"),
    }
    match &saved.response {
        Some(p) => eprintln!("debug: response saved at: {}", p.display()),
        None => eprintln!("debug: response not saved"),
    }
    io::stderr().flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(root: &Path, save_request: bool, save_response: bool) -> ArtifactSettings {
        ArtifactSettings { root: root.to_path_buf(), save_request, save_response }
    }

    #[test]
    fn saves_pretty_request_and_response() {
        let tmp = tempfile::tempdir().unwrap();
        let tx = Uuid::new_v4();
        let reply = RawReply { status: 200, body: r#"{"research_summary":"A"}"#.into() };
        let saved = save_submission(
            &settings(tmp.path(), true, true),
            tx,
            "http://hook",
            Utc::now(),
            r#"{"brandName":"Acme"}"#,
            Some(&reply),
        )
        .unwrap();

        assert_eq!(saved.dir, tmp.path().join(".blueprint").join("tx").join(tx.to_string()));
        let req = std::fs::read_to_string(saved.request.unwrap()).unwrap();
        assert_eq!(req, "{\n  \"brandName\": \"Acme\"\n}");
        let resp_path = saved.response.unwrap();
        assert!(resp_path.ends_with("response.json"));

        let meta: Value = serde_json::from_str(&std::fs::read_to_string(saved.dir.join("submission.json")).unwrap()).unwrap();
        assert_eq!(meta["status"], 200);
        assert_eq!(meta["endpoint"], "http://hook");
    }

    #[test]
    fn non_json_response_is_kept_as_text() {
        let tmp = tempfile::tempdir().unwrap();
        let reply = RawReply { status: 502, body: "<html>bad gateway</html>".into() };
        let saved = save_submission(&settings(tmp.path(), false, true), Uuid::new_v4(), "x", Utc::now(), "{}", Some(&reply))
            .unwrap();
        assert!(saved.request.is_none());
        let p = saved.response.unwrap();
        assert!(p.ends_with("response.txt"));
        assert_eq!(std::fs::read_to_string(p).unwrap(), "<html>bad gateway</html>");
    }

    #[test]
    fn transport_failure_has_no_response_file() {
        let tmp = tempfile::tempdir().unwrap();
        let saved = save_submission(&settings(tmp.path(), true, true), Uuid::new_v4(), "x", Utc::now(), "{}", None).unwrap();
        assert!(saved.request.is_some());
        assert!(saved.response.is_none());
    }
}
