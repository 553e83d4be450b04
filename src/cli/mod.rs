use clap::Parser;
use std::path::Path;

use ux_blueprint::config::Config;
use ux_blueprint::intake::{IntakeField, IntakeState};

#[derive(Parser, Debug)]
#[command(name="ux-blueprint", version, about="Research-to-structure intake: sends a project brief to the UX blueprint webhook")]
pub struct Args {
    /// TOML config file; flags below override it.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory that receives `.blueprint/tx/<id>` artifacts.
    #[arg(long)]
    pub root: Option<String>,

    #[arg(long)]
    pub export_dir: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Write the research summary to disk without asking.
    #[arg(long, default_value_t = false)]
    pub export: bool,

    /// Prompt for every intake field before submitting.
    #[arg(long, short = 'i', default_value_t = false)]
    pub interactive: bool,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    // ===== Phase 0: intake =====
    #[arg(long)]
    pub brand_name: Option<String>,

    #[arg(long)]
    pub market_industry: Option<String>,

    #[arg(long)]
    pub project_type: Option<String>,

    #[arg(long)]
    pub target_audience: Option<String>,

    #[arg(long)]
    pub user_goal: Option<String>,

    #[arg(long)]
    pub business_goal: Option<String>,

    #[arg(long)]
    pub must_include: Option<String>,

    #[arg(long)]
    pub must_avoid: Option<String>,

    #[arg(long)]
    pub design_guidelines: Option<String>,

    /// Set any intake field by name, e.g. `--set brandName=Acme`.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got `{s}`"))?;
    Ok((name.to_string(), value.to_string()))
}

impl Args {
    /// Config file (or defaults) with flag overrides applied.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(Path::new(path))?,
            None => Config::default(),
        };
        if let Some(e) = &self.endpoint {
            cfg.endpoint = e.clone();
        }
        if let Some(r) = &self.root {
            cfg.root = r.clone();
        }
        if let Some(d) = &self.export_dir {
            cfg.export_dir = d.clone();
        }
        if self.timeout_secs.is_some() {
            cfg.timeout_secs = self.timeout_secs;
        }
        cfg.save_request |= self.save_request;
        cfg.save_response |= self.save_response;
        if self.no_progress {
            cfg.progress = false;
        }
        Ok(cfg)
    }

    /// Field flags first, then `--set` pairs in command-line order.
    pub fn apply_intake(&self, state: &mut IntakeState) -> ux_blueprint::errors::Result<()> {
        let flags = [
            (IntakeField::BrandName, &self.brand_name),
            (IntakeField::MarketIndustry, &self.market_industry),
            (IntakeField::ProjectType, &self.project_type),
            (IntakeField::PrimaryTargetAudience, &self.target_audience),
            (IntakeField::PrimaryUserGoal, &self.user_goal),
            (IntakeField::BusinessGoal, &self.business_goal),
            (IntakeField::MustInclude, &self.must_include),
            (IntakeField::MustAvoid, &self.must_avoid),
            (IntakeField::DesignGuidelines, &self.design_guidelines),
        ];
        for (field, value) in flags {
            if let Some(v) = value {
                state.update(field, v.clone());
            }
        }
        for (name, value) in &self.set {
            state.update_by_name(name, value.clone())?;
        }
        Ok(())
    }
}
