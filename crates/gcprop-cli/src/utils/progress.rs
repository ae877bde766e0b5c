use gcprop::engine::progress::{BatchProgress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::time::Duration;
use tracing::debug;

const SPINNER_TICK_MS: u64 = 80;

/// Drives a terminal progress bar from batch estimation events.
///
/// `ProgressBar` is internally reference counted and thread safe, so the callback
/// can be invoked concurrently from the rayon workers.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(None, target)
            .with_style(Self::spinner_style())
            .with_message("Reading structures...");
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: BatchProgress| match progress {
            BatchProgress::Started { total } => {
                pb.disable_steady_tick();
                pb.set_length(total);
                pb.set_position(0);
                pb.set_style(Self::bar_style());
                pb.set_message("Estimating");
            }
            BatchProgress::ItemFinished { index, succeeded } => {
                if !succeeded {
                    debug!(index, "Structure failed during batch estimation.");
                }
                pb.inc(1);
            }
            BatchProgress::Finished { succeeded, failed } => {
                pb.finish_with_message(format!("✓ {} estimated, {} failed", succeeded, failed));
            }
        })
    }

    pub fn start_spinner(&self) {
        self.pb
            .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    }

    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("━╸ ")
    }
}
