//! Progress notification port
//!
//! Defines the interface for reporting progress during a SCAMPER run.

use scamper_domain::Technique;

/// Callback for progress updates during a SCAMPER run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, ...)
pub trait ProgressNotifier: Send + Sync {
    /// Called before the handlers are dispatched
    fn on_fan_out_start(&self, total_techniques: usize);

    /// Called as each handler settles (in completion order)
    fn on_technique_complete(&self, technique: Technique, success: bool);

    /// Called before the executive summary is requested
    fn on_summary_start(&self) {}

    /// Called once the summary exists; `synthesized` is false for the fallback
    fn on_summary_complete(&self, _synthesized: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_fan_out_start(&self, _total_techniques: usize) {}
    fn on_technique_complete(&self, _technique: Technique, _success: bool) {}
}
