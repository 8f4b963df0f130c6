//! Bounded worker pool for evaluating pairs concurrently.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use crate::checks::Check;
use crate::discovery::ProjectDir;
use crate::error::Result;
use crate::report::ReportEntry;

type Outcome = Result<Vec<ReportEntry>>;

/// Evaluate `pairs` on at most `jobs` threads and return the entries in pair order.
///
/// Workers claim pairs by index. Once any pair fails no new pair is claimed;
/// pairs already running are allowed to finish and their results dropped.
/// When several pairs failed, the one earliest in pair order is returned.
pub(super) fn run_parallel<F>(
    pairs: &[(&ProjectDir, &dyn Check)],
    jobs: usize,
    evaluate: F,
) -> Result<Vec<ReportEntry>>
where
    F: Fn(&ProjectDir, &dyn Check) -> Outcome + Sync,
{
    let workers = jobs.min(pairs.len()).max(1);
    let next = AtomicUsize::new(0);
    let cancelled = AtomicBool::new(false);
    let (tx, rx) = mpsc::channel::<(usize, Outcome)>();

    tracing::debug!("Evaluating {} pairs on {} workers", pairs.len(), workers);

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let (next, cancelled, evaluate) = (&next, &cancelled, &evaluate);
            scope.spawn(move || loop {
                if cancelled.load(Ordering::SeqCst) {
                    break;
                }
                let index = next.fetch_add(1, Ordering::SeqCst);
                let Some((dir, check)) = pairs.get(index) else {
                    break;
                };
                let outcome = evaluate(*dir, *check);
                if outcome.is_err() {
                    cancelled.store(true, Ordering::SeqCst);
                }
                if tx.send((index, outcome)).is_err() {
                    break;
                }
            });
        }
    });
    drop(tx);

    let mut outcomes: Vec<(usize, Outcome)> = rx.into_iter().collect();
    outcomes.sort_by_key(|(index, _)| *index);

    let mut entries = Vec::new();
    for (_, outcome) in outcomes {
        entries.extend(outcome?);
    }
    Ok(entries)
}
