use std::ffi::OsString;
use std::process::Command;

use log::{debug, info, warn};

use crate::batch::outcome::SubmitOutcome;
use crate::batch::script::JobPath;
use crate::config::BatchOptions;

/// Submits job scripts with the batch queue command (`BatchFerme` on the cluster)
pub struct BatchQueue<'a> {
    options: &'a BatchOptions,
    dry_run: bool,
}

impl<'a> BatchQueue<'a> {
    pub fn new(options: &'a BatchOptions, dry_run: bool) -> BatchQueue<'a> {
        BatchQueue { options, dry_run }
    }

    /// Arguments for one submission, the job script goes last
    fn arguments(&self, job: &JobPath) -> Vec<OsString> {
        let mut cmd = OsString::from("--cmd=");
        cmd.push(job.path.as_os_str());
        vec![
            format!("--name={}", self.options.name).into(),
            format!("--queue={}", self.options.queue).into(),
            "--no-confirm".into(),
            "--notify=n".into(),
            format!("--memory={}", self.options.memory).into(),
            cmd,
        ]
    }

    /// Run the batch command and wait for it to exit. Never fails, see [`SubmitOutcome`].
    pub fn submit(&self, job: &JobPath) -> SubmitOutcome {
        let mut batch = Command::new(&self.options.program);
        let cmd = batch.args(self.arguments(job));
        debug!("{:?}", &cmd);

        if self.dry_run {
            info!("--dry-run set, not submitting {}", job.path.display());
            return SubmitOutcome::Skipped;
        }

        info!("Submitting {}", job.path.display());
        let outcome = match cmd.status() {
            Ok(status) if status.success() => SubmitOutcome::Submitted,
            Ok(status) => SubmitOutcome::NonZeroExit(status.code()),
            Err(err) => SubmitOutcome::SpawnFailure(err.to_string()),
        };
        if outcome.is_failure() {
            warn!("Batch command {} for {}: {}", self.options.program.display(), job.path.display(), outcome);
        }
        outcome
    }
}
