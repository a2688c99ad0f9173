use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::config::ScanConfig;
use crate::probe::ProbeOutcome;
use crate::strategy::{build_attempts, ProbeTarget};
use crate::validate::is_valid_label;

/// Bounded-concurrency scan coordinator.
///
/// Fans out one probe task per valid candidate, gated by a semaphore permit
/// acquired before spawning, then collects outcomes by awaiting the tasks in
/// submission order. Completion order is arbitrary; output order is not.
pub struct Scanner {
    config: ScanConfig,
    cancel: CancellationToken,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Token for clean shutdown: once cancelled, no further candidates are
    /// submitted and in-flight probes run on to their own timeout.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Probe every valid candidate and return the live URLs in submission
    /// order. `probe_fn` executes one attempt; `on_progress` fires once per
    /// candidate with its final outcome, at completion time.
    ///
    /// Per-candidate failures are absorbed here: a candidate whose attempts
    /// all fail simply contributes nothing to the result.
    pub async fn run<F, Fut, P>(
        &self,
        candidates: Vec<String>,
        probe_fn: F,
        on_progress: P,
    ) -> Vec<String>
    where
        F: Fn(ProbeTarget) -> Fut + Clone + Send + 'static,
        Fut: std::future::Future<Output = ProbeOutcome> + Send + 'static,
        P: Fn(usize, usize, &ProbeOutcome) + Send + Sync + 'static,
    {
        let valid: Vec<String> = candidates
            .into_iter()
            .filter(|c| is_valid_label(c))
            .collect();
        let total = valid.len();
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let on_progress = Arc::new(on_progress);

        tracing::debug!(total, concurrency = self.config.concurrency, "scheduling probe tasks");

        let mut handles = Vec::with_capacity(total);
        for (i, candidate) in valid.into_iter().enumerate() {
            let permit = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    tracing::info!(submitted = handles.len(), total, "scan cancelled, skipping remaining candidates");
                    break;
                }
                permit = semaphore.clone().acquire_owned() => {
                    permit.expect("scan semaphore closed")
                }
            };

            let attempts = build_attempts(&candidate, &self.config);
            let probe_fn = probe_fn.clone();
            let on_progress = on_progress.clone();

            handles.push(tokio::spawn(async move {
                let _permit = permit;
                let mut outcome: Option<ProbeOutcome> = None;
                for target in attempts {
                    let attempt = probe_fn(target).await;
                    let live = attempt.succeeded;
                    outcome = Some(attempt);
                    if live {
                        break; // first success wins, remaining attempts are not issued
                    }
                }
                if let Some(ref o) = outcome {
                    on_progress(i + 1, total, o);
                }
                outcome
            }));
        }

        let mut live_urls = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(Some(outcome)) if outcome.succeeded => live_urls.push(outcome.target.url),
                Ok(_) => {}
                Err(e) => tracing::debug!(error = %e, "probe task failed to join"),
            }
            if !self.config.pacing.is_zero() {
                tokio::time::sleep(self.config.pacing).await;
            }
        }

        tracing::info!(live = live_urls.len(), total, "scan complete");
        live_urls
    }
}
