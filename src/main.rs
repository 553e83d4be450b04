use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

use ux_blueprint::log::{self, ArtifactSettings};
use ux_blueprint::webhook::HttpWebhook;
use ux_blueprint::{Reconciler, RequestState, Session};

mod cli;
mod ux;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log::init_tracing(args.debug);

    let cfg = args.resolve_config()?;
    if args.debug {
        eprintln!("debug: endpoint {}", cfg.endpoint);
    }

    let webhook = HttpWebhook::new(cfg.endpoint.clone(), cfg.timeout_secs).context("failed to build HTTP client")?;
    let artifacts = ArtifactSettings {
        root: PathBuf::from(&cfg.root),
        save_request: cfg.save_request,
        save_response: cfg.save_response,
    };
    let reconciler = Reconciler::new(Box::new(webhook)).with_artifacts(artifacts, args.debug);
    let mut session = Session::new(reconciler);

    // ===== PHASE 0: INTAKE =====
    args.apply_intake(session.intake_mut()).context("invalid --set")?;
    if args.interactive {
        ux::collect_intake(session.intake_mut()).context("failed to read intake")?;
    }
    ux::show_intake(&session.intake().snapshot());

    // ===== PHASES 1-4: GENERATE =====
    let spinner = cfg.progress.then(ux::spinner);
    let state = session.generate().await.clone();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    ux::render(&session);

    if let RequestState::Failed(_) = state {
        std::process::exit(1);
    }

    // ===== PHASE 5: EXPORT =====
    if !session.result().research_summary.is_empty() {
        let wanted = args.export || (args.interactive && ux::confirm("Download research summary (.txt)?"));
        if wanted {
            if let Some(path) = session.export_summary(Path::new(&cfg.export_dir))? {
                println!("Research summary saved to {}", path.display());
            }
        }
    }

    Ok(())
}
