//! # Perceptron Trace
//!
//! A deterministic perceptron trainer that records the classifier state
//! after every update, so a whole training run can be replayed step by
//! step. Built around the classic rule: scan a fixed point set in order,
//! and for every misclassified point pull the hyperplane toward it.
//!
//! ## Quick Start
//!
//! ```rust
//! use perceptron_trace::{train, Label, LabeledPoint};
//!
//! let points = vec![
//!     LabeledPoint::from_xy(2.0, 2.0, Label::Positive),
//!     LabeledPoint::from_xy(-2.0, -2.0, Label::Negative),
//! ];
//!
//! let history = train(&points, 10).unwrap();
//! assert!(history.outcome().is_converged());
//! println!("Converged after {} updates", history.len());
//! ```
//!
//! ## Core Modules
//!
//! - [`classifier`] - Hyperplane state, labels and snapshots
//! - [`trainer`] - Recorded training and the reference separator
//! - [`history`] - Ordered record of post-update states
//! - [`data`] - Seeded synthetic cluster generation
//! - [`config`] - Run configuration via TOML
//! - [`logging`] - JSON line-delimited run artifacts
//! - [`render`] - Per-snapshot PNG frames

pub mod classifier;
pub mod config;
pub mod data;
pub mod history;
pub mod logging;
pub mod render;
pub mod trainer;

pub use classifier::{Hyperplane, Label, LabeledPoint, Snapshot};
pub use config::{ConfigError, RunConfig};
pub use data::{generate_clusters, ClusterConfig};
pub use history::{TrainOutcome, TrainingHistory};
pub use render::{boundary_endpoints, render_frame, render_history, RenderConfig};
pub use trainer::{fit_reference, train, TrainError, TrainResult, TrainerConfig};
