//! Staged progress feedback around one in-flight request.
//!
//! Stage changes are scheduled on timers, never derived from network
//! progress. The request outcome only decides between `Done` and `Failed`,
//! and only once `min_display` has passed since submission.

use std::future::Future;
use std::sync::Arc;

use tracing::trace;

use nc_core::ports::DelayPort;
use nc_core::scan::{ProgressEvent, ProgressStage, ProgressStateMachine, ProgressTimings};

pub struct ProgressChoreographer {
    delay: Arc<dyn DelayPort>,
    timings: ProgressTimings,
}

impl ProgressChoreographer {
    pub fn new(delay: Arc<dyn DelayPort>, timings: ProgressTimings) -> Self {
        Self { delay, timings }
    }

    /// Drive `work` to completion while emitting stages through `emit`.
    ///
    /// Emits `Uploading` immediately, then every later stage exactly once
    /// and in order, ending with `Done` or `Failed` as decided by
    /// `succeeded`. Dropping the returned future stops all emission.
    pub async fn run<T, W>(
        &self,
        work: W,
        mut emit: impl FnMut(ProgressStage),
        succeeded: impl Fn(&T) -> bool,
    ) -> T
    where
        W: Future<Output = T>,
    {
        let mut stage = ProgressStage::Idle;
        let mut advance = |stage: &mut ProgressStage, event: ProgressEvent| {
            let next = ProgressStateMachine::transition(*stage, event);
            if next != *stage {
                trace!(from = ?stage, to = ?next, "progress stage");
                *stage = next;
                emit(next);
            }
        };

        advance(&mut stage, ProgressEvent::Submitted);

        let floor = self.delay.sleep(self.timings.min_display);
        let settled = async {
            let (output, ()) = futures::join!(work, floor);
            output
        };
        futures::pin_mut!(settled);

        let schedule = [self.timings.analyzing_after, self.timings.verifying_after];
        let mut next_tick = 0;

        let output = loop {
            let Some(wait) = schedule.get(next_tick).copied() else {
                break settled.as_mut().await;
            };

            tokio::select! {
                biased;
                output = settled.as_mut() => break output,
                _ = self.delay.sleep(wait) => {
                    advance(&mut stage, ProgressEvent::StageElapsed);
                    next_tick += 1;
                }
            }
        };

        // Catch up on stages the timers had not reached yet.
        while stage != ProgressStage::Verifying {
            advance(&mut stage, ProgressEvent::StageElapsed);
        }
        advance(
            &mut stage,
            ProgressEvent::Settled {
                success: succeeded(&output),
            },
        );

        output
    }
}
