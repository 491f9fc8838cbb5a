//! Binary linear classifier state
//!
//! Implements the hyperplane (weight vector plus bias) that the perceptron
//! update rule mutates, along with the detached snapshot copies a training
//! history stores.

use ndarray::{arr1, Array1};
use serde::{Deserialize, Serialize};

/// Binary class label, carried through the update rule as +1 / -1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Signed value this label contributes to the update rule
    pub fn signum(&self) -> f64 {
        match self {
            Label::Positive => 1.0,
            Label::Negative => -1.0,
        }
    }

    /// Label from a signed value (zero has no label)
    pub fn from_signum(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Label::Positive)
        } else if value < 0.0 {
            Some(Label::Negative)
        } else {
            None
        }
    }

    /// Both labels, in dataset stacking order
    pub fn all() -> [Label; 2] {
        [Label::Positive, Label::Negative]
    }
}

/// A single training point: feature vector plus its class label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub features: Array1<f64>,
    pub label: Label,
}

impl LabeledPoint {
    pub fn new(features: Array1<f64>, label: Label) -> Self {
        Self { features, label }
    }

    /// Convenience constructor for the two-dimensional case
    pub fn from_xy(x: f64, y: f64, label: Label) -> Self {
        Self {
            features: arr1(&[x, y]),
            label,
        }
    }

    /// Number of feature dimensions
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// Live classifier state: weight vector plus scalar bias.
///
/// One training run owns its state exclusively; callers that need to keep a
/// step around take a [`snapshot`](Hyperplane::snapshot) instead of holding
/// references into the mutating fields.
///
/// # Examples
///
/// ```
/// use perceptron_trace::{Hyperplane, Label, LabeledPoint};
///
/// let mut state = Hyperplane::zeroed(2);
/// let point = LabeledPoint::from_xy(1.0, 0.0, Label::Positive);
///
/// assert!(state.is_misclassified(&point));
/// state.apply_update(&point);
/// assert!(!state.is_misclassified(&point));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperplane {
    weights: Array1<f64>,
    bias: f64,
}

impl Hyperplane {
    /// Zero weight vector and zero bias for the given dimensionality
    pub fn zeroed(dim: usize) -> Self {
        Self {
            weights: Array1::zeros(dim),
            bias: 0.0,
        }
    }

    /// Rebuild a live state from a stored snapshot
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            weights: Array1::from_vec(snapshot.weights.clone()),
            bias: snapshot.bias,
        }
    }

    /// Number of feature dimensions this hyperplane spans
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Signed margin `w · x + b` of a feature vector
    pub fn margin(&self, features: &Array1<f64>) -> f64 {
        self.weights.dot(features) + self.bias
    }

    /// Whether the update rule fires for this point.
    ///
    /// A point sitting exactly on the boundary (zero margin) counts as
    /// misclassified; the zero-initialized state relies on this to make its
    /// first update at all.
    pub fn is_misclassified(&self, point: &LabeledPoint) -> bool {
        point.label.signum() * self.margin(&point.features) <= 0.0
    }

    /// Perceptron update `w ← w + y·x`, `b ← b + y`, in place
    pub fn apply_update(&mut self, point: &LabeledPoint) {
        let y = point.label.signum();
        self.weights.scaled_add(y, &point.features);
        self.bias += y;
    }

    /// Count of points the current state misclassifies
    pub fn misclassified_count(&self, points: &[LabeledPoint]) -> usize {
        points
            .iter()
            .filter(|point| self.is_misclassified(point))
            .count()
    }

    /// Detached value copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            weights: self.weights.to_vec(),
            bias: self.bias,
        }
    }
}

/// Classifier state captured after one update (for history and transfer).
///
/// Holds plain owned values, so later updates to the live state never show
/// through stored entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub weights: Vec<f64>,
    pub bias: f64,
}
