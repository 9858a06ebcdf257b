use std::fmt;

/// What happened when a job script was handed to the batch queue.
///
/// The batch command's output isn't parsed, so `Submitted` only means the command exited 0, not
/// that the job ran. Whether anything other than `Submitted` stops the run is decided by
/// [`SubmitPolicy`](crate::config::SubmitPolicy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// `None` when the command was killed by a signal
    NonZeroExit(Option<i32>),
    SpawnFailure(String),
    /// `--dry-run`, the command was never started
    Skipped,
}

impl SubmitOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SubmitOutcome::NonZeroExit(_) | SubmitOutcome::SpawnFailure(_))
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmitOutcome::Submitted => write!(f, "submitted"),
            SubmitOutcome::NonZeroExit(Some(code)) => write!(f, "exited with status {code}"),
            SubmitOutcome::NonZeroExit(None) => write!(f, "terminated by signal"),
            SubmitOutcome::SpawnFailure(err) => write!(f, "failed to start: {err}"),
            SubmitOutcome::Skipped => write!(f, "skipped (dry run)"),
        }
    }
}
