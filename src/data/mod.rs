//! Dataset synthesis for training runs.

pub mod clusters;

pub use clusters::{generate_clusters, ClusterConfig};
