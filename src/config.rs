//! Run configuration management via TOML files.
//!
//! Parses `[dataset]`, `[trainer]` and `[render]` sections with per-field
//! defaults; missing sections fall back to the classic run setup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::ClusterConfig;
use crate::render::RenderConfig;
use crate::trainer::TrainerConfig;

/// Full configuration for one recorded training run.
///
/// # Examples
///
/// ```
/// use perceptron_trace::RunConfig;
///
/// let config = RunConfig::load_from_file("config/trainer.toml")
///     .unwrap_or_else(|_| RunConfig::default());
///
/// println!("Update budget: {}", config.trainer.max_updates);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    /// Cluster generation settings
    pub dataset: ClusterConfig,
    /// Trainer budgets
    pub trainer: TrainerConfig,
    /// Frame rendering settings
    pub render: RenderConfig,
}

impl RunConfig {
    /// Load run configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse run configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawRunConfig =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;

        let dataset = validate_dataset(&raw.dataset)?;
        let trainer = validate_trainer(&raw.trainer)?;
        let render = validate_render(&raw.render)?;

        Ok(Self {
            dataset,
            trainer,
            render,
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dataset: ClusterConfig::default(),
            trainer: TrainerConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

fn validate_dataset(raw: &RawDatasetSection) -> Result<ClusterConfig, ConfigError> {
    if raw.points_per_class == 0 {
        return Err(ConfigError::Parse(
            "dataset.points_per_class must be ≥ 1".into(),
        ));
    }
    if !raw.spread.is_finite() || raw.spread < 0.0 {
        return Err(ConfigError::Parse(
            "dataset.spread must be finite and ≥ 0".into(),
        ));
    }
    if raw.center_positive.iter().any(|v| !v.is_finite())
        || raw.center_negative.iter().any(|v| !v.is_finite())
    {
        return Err(ConfigError::Parse(
            "dataset cluster centers must be finite".into(),
        ));
    }

    Ok(ClusterConfig {
        points_per_class: raw.points_per_class,
        center_positive: raw.center_positive,
        center_negative: raw.center_negative,
        spread: raw.spread,
        seed: raw.seed,
    })
}

fn validate_trainer(raw: &RawTrainerSection) -> Result<TrainerConfig, ConfigError> {
    if raw.max_updates == 0 {
        return Err(ConfigError::Parse("trainer.max_updates must be ≥ 1".into()));
    }
    if raw.reference_max_passes == 0 {
        return Err(ConfigError::Parse(
            "trainer.reference_max_passes must be ≥ 1".into(),
        ));
    }

    Ok(TrainerConfig {
        max_updates: raw.max_updates,
        reference_max_passes: raw.reference_max_passes,
    })
}

fn validate_render(raw: &RawRenderSection) -> Result<RenderConfig, ConfigError> {
    if !raw.view_min.is_finite() || !raw.view_max.is_finite() {
        return Err(ConfigError::Parse(
            "render viewport bounds must be finite".into(),
        ));
    }
    if raw.view_min >= raw.view_max {
        return Err(ConfigError::Parse(
            "render.view_min must be < render.view_max".into(),
        ));
    }
    if raw.image_size == 0 {
        return Err(ConfigError::Parse("render.image_size must be ≥ 1".into()));
    }

    Ok(RenderConfig {
        view_min: raw.view_min,
        view_max: raw.view_max,
        image_size: raw.image_size,
    })
}

#[derive(Debug, Deserialize)]
struct RawRunConfig {
    #[serde(default)]
    dataset: RawDatasetSection,
    #[serde(default)]
    trainer: RawTrainerSection,
    #[serde(default)]
    render: RawRenderSection,
}

#[derive(Debug, Deserialize)]
struct RawDatasetSection {
    #[serde(default = "default_points_per_class")]
    points_per_class: usize,
    #[serde(default = "default_center_positive")]
    center_positive: [f64; 2],
    #[serde(default = "default_center_negative")]
    center_negative: [f64; 2],
    #[serde(default = "default_spread")]
    spread: f64,
    #[serde(default = "default_seed")]
    seed: u64,
}

impl Default for RawDatasetSection {
    fn default() -> Self {
        Self {
            points_per_class: default_points_per_class(),
            center_positive: default_center_positive(),
            center_negative: default_center_negative(),
            spread: default_spread(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTrainerSection {
    #[serde(default = "default_max_updates")]
    max_updates: usize,
    #[serde(default = "default_reference_max_passes")]
    reference_max_passes: usize,
}

impl Default for RawTrainerSection {
    fn default() -> Self {
        Self {
            max_updates: default_max_updates(),
            reference_max_passes: default_reference_max_passes(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRenderSection {
    #[serde(default = "default_view_min")]
    view_min: f64,
    #[serde(default = "default_view_max")]
    view_max: f64,
    #[serde(default = "default_image_size")]
    image_size: u32,
}

impl Default for RawRenderSection {
    fn default() -> Self {
        Self {
            view_min: default_view_min(),
            view_max: default_view_max(),
            image_size: default_image_size(),
        }
    }
}

fn default_points_per_class() -> usize {
    20
}

fn default_center_positive() -> [f64; 2] {
    [1.0, 1.0]
}

fn default_center_negative() -> [f64; 2] {
    [-1.0, -1.0]
}

fn default_spread() -> f64 {
    1.0
}

fn default_seed() -> u64 {
    42
}

fn default_max_updates() -> usize {
    100
}

fn default_reference_max_passes() -> usize {
    50
}

fn default_view_min() -> f64 {
    -4.0
}

fn default_view_max() -> f64 {
    6.0
}

fn default_image_size() -> u32 {
    600
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_config_defaults_when_sections_missing() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config.dataset.points_per_class, 20);
        assert_eq!(config.dataset.seed, 42);
        assert_eq!(config.trainer.max_updates, 100);
        assert_eq!(config.trainer.reference_max_passes, 50);
        assert_eq!(config.render.view_min, -4.0);
        assert_eq!(config.render.view_max, 6.0);
    }

    #[test]
    fn run_config_defaults_missing_fields_within_a_section() {
        let toml = "[trainer]\nmax_updates = 25";
        let config = RunConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.trainer.max_updates, 25);
        assert_eq!(config.trainer.reference_max_passes, 50);
        assert_eq!(config.dataset.points_per_class, 20);
    }

    #[test]
    fn run_config_parses_every_section() {
        let toml = r#"
[dataset]
points_per_class = 10
center_positive = [3.0, 3.0]
center_negative = [-3.0, -3.0]
spread = 0.5
seed = 7

[trainer]
max_updates = 200
reference_max_passes = 25

[render]
view_min = -5.0
view_max = 5.0
image_size = 400
"#;
        let config = RunConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.dataset.points_per_class, 10);
        assert_eq!(config.dataset.center_positive, [3.0, 3.0]);
        assert_eq!(config.dataset.center_negative, [-3.0, -3.0]);
        assert_eq!(config.dataset.spread, 0.5);
        assert_eq!(config.dataset.seed, 7);
        assert_eq!(config.trainer.max_updates, 200);
        assert_eq!(config.trainer.reference_max_passes, 25);
        assert_eq!(config.render.view_min, -5.0);
        assert_eq!(config.render.image_size, 400);
    }

    #[test]
    fn run_config_rejects_zero_update_budget() {
        let toml = "[trainer]\nmax_updates = 0";
        let result = RunConfig::from_toml_str(toml);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn run_config_rejects_empty_dataset() {
        let toml = "[dataset]\npoints_per_class = 0";
        assert!(RunConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn run_config_rejects_negative_spread() {
        let toml = "[dataset]\nspread = -1.0";
        assert!(RunConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn run_config_rejects_inverted_viewport() {
        let toml = "[render]\nview_min = 6.0\nview_max = -4.0";
        assert!(RunConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn load_from_missing_file_is_an_io_error() {
        let result = RunConfig::load_from_file("config/does_not_exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
