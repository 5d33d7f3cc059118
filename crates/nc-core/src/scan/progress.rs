//! Progress state machine.
//!
//! Defines a pure state transition function for the staged scan feedback.
//! The stages are cosmetic: they are driven by timers, not by network
//! progress. Only [`ProgressEvent::Settled`] reflects the real request.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ANALYZING_AFTER: Duration = Duration::from_millis(1000);
pub const DEFAULT_VERIFYING_AFTER: Duration = Duration::from_millis(1000);
pub const DEFAULT_MIN_DISPLAY: Duration = Duration::from_millis(1800);

/// Progress stage.
///
/// 进度阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    #[default]
    Idle,
    Uploading,
    Analyzing,
    Verifying,
    Done,
    /// Terminal failure: the request errored, timed out or was rejected.
    ///
    /// 终止失败状态。
    Failed,
}

impl ProgressStage {
    /// A scan is in flight; new submissions are refused.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ProgressStage::Uploading | ProgressStage::Analyzing | ProgressStage::Verifying
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressStage::Done | ProgressStage::Failed)
    }

    /// Index into the three-step timeline, for active stages.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            ProgressStage::Uploading => Some(0),
            ProgressStage::Analyzing => Some(1),
            ProgressStage::Verifying => Some(2),
            _ => None,
        }
    }

    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            ProgressStage::Uploading => Some("Uploading image..."),
            ProgressStage::Analyzing => Some("Analyzing forensic features..."),
            ProgressStage::Verifying => Some("Verifying authenticity..."),
            _ => None,
        }
    }
}

/// Events that drive the progress stages.
///
/// 驱动进度阶段的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressEvent {
    /// A scan was submitted.
    Submitted,
    /// The staged timer for the current stage fired.
    StageElapsed,
    /// The request settled and the minimum display time has passed.
    Settled { success: bool },
    /// The view was reset.
    Reset,
}

/// Pure progress state machine: no side effects, never moves backwards
/// except through `Reset`.
///
/// 纯状态机：不包含副作用。
pub struct ProgressStateMachine;

impl ProgressStateMachine {
    pub fn transition(state: ProgressStage, event: ProgressEvent) -> ProgressStage {
        match (state, event) {
            (_, ProgressEvent::Reset) => ProgressStage::Idle,
            (
                ProgressStage::Idle | ProgressStage::Done | ProgressStage::Failed,
                ProgressEvent::Submitted,
            ) => ProgressStage::Uploading,
            (ProgressStage::Uploading, ProgressEvent::StageElapsed) => ProgressStage::Analyzing,
            (ProgressStage::Analyzing, ProgressEvent::StageElapsed) => ProgressStage::Verifying,
            (ProgressStage::Verifying, ProgressEvent::Settled { success: true }) => {
                ProgressStage::Done
            }
            (ProgressStage::Verifying, ProgressEvent::Settled { success: false }) => {
                ProgressStage::Failed
            }
            (state, _) => state,
        }
    }
}

/// Timer settings for the staged feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTimings {
    /// Uploading → Analyzing, measured from submission.
    pub analyzing_after: Duration,
    /// Analyzing → Verifying, measured from entering Analyzing.
    pub verifying_after: Duration,
    /// Earliest Done/Failed, measured from submission.
    pub min_display: Duration,
}

impl Default for ProgressTimings {
    fn default() -> Self {
        Self {
            analyzing_after: DEFAULT_ANALYZING_AFTER,
            verifying_after: DEFAULT_VERIFYING_AFTER,
            min_display: DEFAULT_MIN_DISPLAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[ProgressEvent]) -> ProgressStage {
        events
            .iter()
            .fold(ProgressStage::Idle, |s, e| ProgressStateMachine::transition(s, *e))
    }

    #[test]
    fn happy_path_reaches_done() {
        let stage = run(&[
            ProgressEvent::Submitted,
            ProgressEvent::StageElapsed,
            ProgressEvent::StageElapsed,
            ProgressEvent::Settled { success: true },
        ]);
        assert_eq!(stage, ProgressStage::Done);
    }

    #[test]
    fn settled_before_verifying_is_ignored() {
        let stage = run(&[ProgressEvent::Submitted, ProgressEvent::Settled { success: true }]);
        assert_eq!(stage, ProgressStage::Uploading);
    }

    #[test]
    fn failure_is_terminal() {
        let stage = run(&[
            ProgressEvent::Submitted,
            ProgressEvent::StageElapsed,
            ProgressEvent::StageElapsed,
            ProgressEvent::Settled { success: false },
        ]);
        assert_eq!(stage, ProgressStage::Failed);
        assert!(stage.is_terminal());
        assert_eq!(
            ProgressStateMachine::transition(stage, ProgressEvent::StageElapsed),
            ProgressStage::Failed
        );
    }

    #[test]
    fn submitted_is_ignored_while_active() {
        let stage = run(&[
            ProgressEvent::Submitted,
            ProgressEvent::StageElapsed,
            ProgressEvent::Submitted,
        ]);
        assert_eq!(stage, ProgressStage::Analyzing);
    }

    #[test]
    fn reset_returns_to_idle_from_anywhere() {
        for stage in [
            ProgressStage::Idle,
            ProgressStage::Uploading,
            ProgressStage::Analyzing,
            ProgressStage::Verifying,
            ProgressStage::Done,
            ProgressStage::Failed,
        ] {
            assert_eq!(
                ProgressStateMachine::transition(stage, ProgressEvent::Reset),
                ProgressStage::Idle
            );
        }
    }

    #[test]
    fn stage_texts_follow_the_timeline() {
        assert_eq!(ProgressStage::Uploading.step_index(), Some(0));
        assert_eq!(ProgressStage::Verifying.step_index(), Some(2));
        assert_eq!(ProgressStage::Done.step_index(), None);
        assert_eq!(
            ProgressStage::Analyzing.status_text(),
            Some("Analyzing forensic features...")
        );
    }
}
