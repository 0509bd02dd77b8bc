//! Progress reporting infrastructure
//!
//! Rebuilding from the raw exports walks tens of millions of lines, so each
//! pipeline step reports how far along it is. To avoid corrupted terminal
//! output, you should not write anything to stdout or stderr yourself as
//! long as a report is being displayed. Please use logs for debug messages.

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::borrow::Cow;

/// CLI progress report of the ongoing pipeline run
#[derive(Clone, Debug, Default)]
pub struct ProgressReport(MultiProgress);
//
impl ProgressReport {
    /// Prepare to report progress on the cli
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that never draws anything
    ///
    /// Used by tests and `--quiet` runs.
    pub fn hidden() -> Self {
        Self(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    /// Prepare to report on a new pipeline step
    ///
    /// The amount of upcoming work is unknown (input files are not measured
    /// in advance), so the tracker counts processed records instead of
    /// displaying a completion percentage.
    pub fn start(&self, what: impl Into<Cow<'static, str>>) -> ProgressTracker {
        let bar = ProgressBar::new_spinner().with_prefix(what.into());
        bar.set_style(
            ProgressStyle::with_template("{prefix} {spinner} {human_pos} records ({per_sec})")
                .expect("the template above should be a valid indicatif style"),
        );
        ProgressTracker {
            bar: self.0.add(bar),
            report: self.0.clone(),
        }
    }
}

/// Mechanism to track progress of one pipeline step
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    /// Progress bar for this specific step
    bar: ProgressBar,

    /// Underlying process report
    report: MultiProgress,
}
//
impl ProgressTracker {
    /// Show that a number of records has been processed
    pub fn make_progress(&self, records: u64) {
        self.bar.inc(records);
    }

    /// Hide the step once done
    pub fn finish(self) {
        self.bar.finish_and_clear();
        self.report.remove(&self.bar);
    }
}
