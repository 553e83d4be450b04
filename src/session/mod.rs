use std::path::{Path, PathBuf};

use crate::errors::{Result, USER_FACING_FAILURE};
use crate::export;
use crate::intake::{IntakeField, IntakeState};
use crate::reconcile::Reconciler;
use crate::wire::BlueprintResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

/// One intake session: the form, the last result and the request status.
pub struct Session {
    intake: IntakeState,
    result: BlueprintResult,
    state: RequestState,
    reconciler: Reconciler,
}

impl Session {
    pub fn new(reconciler: Reconciler) -> Self {
        Self {
            intake: IntakeState::new(),
            result: BlueprintResult::default(),
            state: RequestState::Idle,
            reconciler,
        }
    }

    pub fn intake(&self) -> &IntakeState {
        &self.intake
    }

    pub fn intake_mut(&mut self) -> &mut IntakeState {
        &mut self.intake
    }

    pub fn result(&self) -> &BlueprintResult {
        &self.result
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn has_results(&self) -> bool {
        !self.result.is_empty()
    }

    /// Run one submission to completion. Failures end in `Failed` with the
    /// uniform message; the diagnostic goes to the log only.
    pub async fn generate(&mut self) -> &RequestState {
        self.state = RequestState::InFlight;
        self.result = BlueprintResult::default();

        let record = self.intake.snapshot();
        match self.reconciler.submit(record).await {
            Ok(result) => {
                self.result = result;
                self.state = RequestState::Succeeded;
            }
            Err(e) => {
                tracing::error!(
                    submission = ?self.reconciler.last_submission(),
                    endpoint = self.reconciler.endpoint(),
                    error = %e,
                    "blueprint error"
                );
                self.state = RequestState::Failed(USER_FACING_FAILURE.to_string());
            }
        }
        &self.state
    }

    /// Export the research summary, named after the current brand.
    pub fn export_summary(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let name = export::summary_filename(self.intake.get(IntakeField::BrandName));
        export::export_text(&self.result.research_summary, &name, dir)
    }
}
