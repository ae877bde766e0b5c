use crate::engine::error::EstimationError;
use crate::engine::estimator::{EstimationResult, Estimator};
use crate::engine::progress::{BatchProgress, ProgressReporter};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub index: usize,
    pub structure: String,
    pub outcome: Result<EstimationResult, EstimationError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_items(items: &[BatchItem]) -> Self {
        let succeeded = items.iter().filter(|item| item.outcome.is_ok()).count();
        Self {
            succeeded,
            failed: items.len() - succeeded,
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Estimates every structure independently.
///
/// One failing structure never affects the others; each item carries its own
/// outcome. Items come back in input order regardless of how the work was
/// scheduled.
#[instrument(skip_all, name = "batch_workflow", fields(total = structures.len()))]
pub fn run<S>(estimator: &Estimator, structures: &[S], reporter: &ProgressReporter) -> Vec<BatchItem>
where
    S: AsRef<str> + Sync,
{
    info!("Starting batch estimation.");
    reporter.report(BatchProgress::Started {
        total: structures.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = structures.iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = structures.par_iter().enumerate();

    let items: Vec<BatchItem> = iterator
        .map(|(index, structure)| {
            let structure: &str = structure.as_ref();
            let outcome = estimator.estimate(structure);
            reporter.report(BatchProgress::ItemFinished {
                index,
                succeeded: outcome.is_ok(),
            });
            BatchItem {
                index,
                structure: structure.to_string(),
                outcome,
            }
        })
        .collect();

    let summary = BatchSummary::from_items(&items);
    if summary.failed > 0 {
        warn!(
            failed = summary.failed,
            "Some structures could not be estimated."
        );
    }
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Batch estimation finished."
    );
    reporter.report(BatchProgress::Finished {
        succeeded: summary.succeeded,
        failed: summary.failed,
    });

    items
}
