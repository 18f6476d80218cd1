//! Progress reporting for protocol generation

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use protocol_application::{GenerationPhase, ProgressNotifier};
use std::sync::Mutex;

/// Reports progress during protocol generation with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &GenerationPhase) -> &'static str {
        match phase {
            GenerationPhase::Tally => "Phase 1: Tally",
            GenerationPhase::CompanySignature => "Phase 2: Company signature",
            GenerationPhase::VoterSignatures => "Phase 3: Voter signatures",
            GenerationPhase::Compose => "Phase 4: Compose",
            GenerationPhase::Package => "Phase 5: Package",
        }
    }

    fn phase_short_name(phase: &GenerationPhase) -> &'static str {
        match phase {
            GenerationPhase::Tally => "Phase 1",
            GenerationPhase::CompanySignature => "Phase 2",
            GenerationPhase::VoterSignatures => "Phase 3",
            GenerationPhase::Compose => "Phase 4",
            GenerationPhase::Package => "Phase 5",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &GenerationPhase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(phase));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &GenerationPhase, label: &str, success: bool) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &GenerationPhase) {
        let finished = self.phase_bar.lock().ok().and_then(|mut slot| slot.take());
        if let Some(pb) = finished {
            let phase_name = Self::phase_short_name(phase);
            pb.finish_with_message(format!("{} complete!", phase_name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &GenerationPhase, total_tasks: usize) {
        let phase_name = ProgressReporter::phase_display_name(phase);
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase_name.bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &GenerationPhase, label: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), label);
        } else {
            eprintln!("  {} {} (fallback)", "x".red(), label);
        }
    }

    fn on_phase_complete(&self, _phase: &GenerationPhase) {
        eprintln!();
    }
}
