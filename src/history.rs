//! Ordered record of classifier states across one training run.

use serde::{Deserialize, Serialize};

use crate::classifier::Snapshot;

/// How a recorded training run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainOutcome {
    /// A full pass produced no misclassifications. `passes` counts every
    /// completed pass, including the final clean one.
    Converged { passes: usize },
    /// The update budget ran out before a clean pass
    Capped,
}

impl TrainOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, TrainOutcome::Converged { .. })
    }
}

/// Append-only sequence of post-update snapshots, in update order.
///
/// Holds exactly one entry per update the trainer applied. A capped run has
/// as many entries as its update budget; a converged run always has fewer.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingHistory {
    snapshots: Vec<Snapshot>,
    outcome: TrainOutcome,
    max_updates: usize,
}

impl TrainingHistory {
    pub(crate) fn new(snapshots: Vec<Snapshot>, outcome: TrainOutcome, max_updates: usize) -> Self {
        Self {
            snapshots,
            outcome,
            max_updates,
        }
    }

    /// Number of updates the run applied
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot recorded after update `index` (zero-based)
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The state the run ended in
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn outcome(&self) -> TrainOutcome {
        self.outcome
    }

    /// Update budget the run was recorded under
    pub fn max_updates(&self) -> usize {
        self.max_updates
    }
}
