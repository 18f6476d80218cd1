//! Progress notification port
//!
//! Defines the interface for reporting progress during protocol generation.

use std::fmt;

/// Stages of one generation call, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationPhase {
    Tally,
    CompanySignature,
    VoterSignatures,
    Compose,
    Package,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Tally => "tally",
            GenerationPhase::CompanySignature => "company signature",
            GenerationPhase::VoterSignatures => "voter signatures",
            GenerationPhase::Compose => "compose",
            GenerationPhase::Package => "package",
        }
    }
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates during protocol generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &GenerationPhase, total_tasks: usize);

    /// Called when a task completes within a phase
    fn on_task_complete(&self, phase: &GenerationPhase, label: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &GenerationPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &GenerationPhase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &GenerationPhase, _label: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &GenerationPhase) {}
}
