//! Perceptron training loop with a recorded update trace.
//!
//! [`train`] runs the classic update rule over a fixed point set and records
//! a snapshot after every update, bounded by an update budget.
//! [`fit_reference`] runs the same rule without recording, bounded by a pass
//! budget, to produce an independent comparison hyperplane.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::{Hyperplane, LabeledPoint};
use crate::history::{TrainOutcome, TrainingHistory};

/// Result type alias for trainer operations
pub type TrainResult<T> = Result<T, TrainError>;

/// Error type for trainer input validation
#[derive(Debug, Clone, PartialEq)]
pub enum TrainError {
    /// Invalid configuration parameter
    InvalidConfiguration {
        parameter: String,
        value: String,
        reason: String,
    },

    /// The point set has nothing to scan
    EmptyPointSet { operation: String },

    /// A point disagrees with the rest of the set on feature dimensionality
    DimensionMismatch {
        expected: usize,
        got: usize,
        index: usize,
    },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration for parameter '{}' with value '{}': {}",
                    parameter, value, reason
                )
            }
            TrainError::EmptyPointSet { operation } => {
                write!(
                    f,
                    "Empty point set: '{}' requires at least one labeled point",
                    operation
                )
            }
            TrainError::DimensionMismatch {
                expected,
                got,
                index,
            } => {
                write!(
                    f,
                    "Dimension mismatch at point {}: expected {} features, got {}",
                    index, expected, got
                )
            }
        }
    }
}

impl std::error::Error for TrainError {}

// Convenience constructors for common error patterns
impl TrainError {
    /// Create an invalid configuration error
    pub fn invalid_config(
        parameter: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TrainError::InvalidConfiguration {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty point set error
    pub fn empty_point_set(operation: impl Into<String>) -> Self {
        TrainError::EmptyPointSet {
            operation: operation.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, got: usize, index: usize) -> Self {
        TrainError::DimensionMismatch {
            expected,
            got,
            index,
        }
    }
}

/// Training run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Update budget for the recorded run
    pub max_updates: usize,
    /// Pass budget for the reference separator
    pub reference_max_passes: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            max_updates: 100,
            reference_max_passes: 50,
        }
    }
}

/// Check that the set is non-empty and dimensionally consistent.
/// Returns the shared dimensionality.
fn validate_points(points: &[LabeledPoint], operation: &str) -> TrainResult<usize> {
    let first = points
        .first()
        .ok_or_else(|| TrainError::empty_point_set(operation))?;
    let expected = first.dim();

    for (index, point) in points.iter().enumerate() {
        if point.dim() != expected {
            return Err(TrainError::dimension_mismatch(expected, point.dim(), index));
        }
    }

    Ok(expected)
}

/// Train a perceptron over `points` and record every update.
///
/// Starts from the zero hyperplane and repeats full in-order passes. Each
/// misclassified point triggers an update followed by a snapshot; the run
/// returns mid-pass the moment the update count reaches `max_updates`, and
/// otherwise ends after the first pass with no misclassifications.
///
/// Running out of budget is not an error: the returned history reports
/// [`TrainOutcome::Capped`] and holds exactly `max_updates` snapshots.
/// The point set itself is never mutated.
///
/// # Arguments
///
/// * `points` - Ordered point set; scan order fixes the update trajectory
/// * `max_updates` - Update budget, must be at least 1
///
/// # Examples
///
/// ```
/// use perceptron_trace::{train, Label, LabeledPoint};
///
/// let points = vec![
///     LabeledPoint::from_xy(2.0, 2.0, Label::Positive),
///     LabeledPoint::from_xy(-2.0, -2.0, Label::Negative),
/// ];
///
/// let history = train(&points, 10).unwrap();
/// assert!(history.outcome().is_converged());
/// assert!(history.len() <= 2);
/// ```
pub fn train(points: &[LabeledPoint], max_updates: usize) -> TrainResult<TrainingHistory> {
    if max_updates == 0 {
        return Err(TrainError::invalid_config(
            "max_updates",
            "0",
            "must be at least 1",
        ));
    }
    let dim = validate_points(points, "train")?;

    tracing::info!(
        "Starting perceptron training: {} points, {} dimensions, update budget {}",
        points.len(),
        dim,
        max_updates
    );

    let mut state = Hyperplane::zeroed(dim);
    let mut snapshots = Vec::new();
    let mut updates = 0;
    let mut passes = 0;

    loop {
        passes += 1;
        let mut errors_this_pass = 0;

        for point in points {
            if state.is_misclassified(point) {
                state.apply_update(point);
                snapshots.push(state.snapshot());
                updates += 1;
                errors_this_pass += 1;

                if updates >= max_updates {
                    tracing::warn!(
                        "Update budget exhausted after {} updates in pass {}",
                        updates,
                        passes
                    );
                    return Ok(TrainingHistory::new(
                        snapshots,
                        TrainOutcome::Capped,
                        max_updates,
                    ));
                }
            }
        }

        if errors_this_pass == 0 {
            tracing::info!("Converged after {} updates in {} passes", updates, passes);
            return Ok(TrainingHistory::new(
                snapshots,
                TrainOutcome::Converged { passes },
                max_updates,
            ));
        }
    }
}

/// Fit a separating hyperplane with the same rule but no recording.
///
/// An independent second run over the same point set, bounded by a number of
/// full passes instead of an update budget. Useful as a fixed comparison
/// state when replaying a recorded run; its hyperplane may legitimately
/// differ from the recorded run's final state.
///
/// If the set is not separable within `max_passes` passes, the state after
/// the last pass is returned as-is.
pub fn fit_reference(points: &[LabeledPoint], max_passes: usize) -> TrainResult<Hyperplane> {
    if max_passes == 0 {
        return Err(TrainError::invalid_config(
            "max_passes",
            "0",
            "must be at least 1",
        ));
    }
    let dim = validate_points(points, "fit_reference")?;

    let mut state = Hyperplane::zeroed(dim);

    for _ in 0..max_passes {
        let mut errors_this_pass = 0;

        for point in points {
            if state.is_misclassified(point) {
                state.apply_update(point);
                errors_this_pass += 1;
            }
        }

        if errors_this_pass == 0 {
            break;
        }
    }

    Ok(state)
}
