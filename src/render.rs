//! Frame rendering for recorded training runs.
//!
//! Draws one PNG per snapshot: both point clusters, the snapshot's decision
//! boundary, and the current and reference weight vectors inside a fixed
//! viewport so consecutive frames line up as an animation.

use std::io;
use std::path::Path;

use plotters::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classifier::{Hyperplane, Label, LabeledPoint, Snapshot};
use crate::history::TrainingHistory;

/// Frame rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Lower bound of the square viewport, applied to both axes
    pub view_min: f64,
    /// Upper bound of the square viewport, applied to both axes
    pub view_max: f64,
    /// Output image size in pixels (square)
    pub image_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            view_min: -4.0,
            view_max: 6.0,
            image_size: 600,
        }
    }
}

/// Endpoints of the decision boundary segment across the viewport.
///
/// The boundary of `(w, b)` is the line `y = -(w[0]·x + b) / w[1]`. Returns
/// `None` when `w[1] == 0` (vertical or degenerate boundary), where that
/// expression is undefined.
pub fn boundary_endpoints(snapshot: &Snapshot, config: &RenderConfig) -> Option<[(f64, f64); 2]> {
    let w0 = snapshot.weights.first().copied().unwrap_or(0.0);
    let w1 = snapshot.weights.get(1).copied().unwrap_or(0.0);
    if w1 == 0.0 {
        return None;
    }

    let y_at = |x: f64| -(w0 * x + snapshot.bias) / w1;
    Some([
        (config.view_min, y_at(config.view_min)),
        (config.view_max, y_at(config.view_max)),
    ])
}

/// Draw a single frame for one snapshot.
///
/// `step` is the 1-based position of the snapshot inside the run of `total`
/// updates; it only affects the caption. The reference hyperplane, when
/// given, is drawn as a second weight vector for comparison. Nothing the
/// renderer reads is mutated.
pub fn render_frame<P: AsRef<Path>>(
    path: P,
    points: &[LabeledPoint],
    snapshot: &Snapshot,
    reference: Option<&Hyperplane>,
    step: usize,
    total: usize,
    config: &RenderConfig,
) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let backend = BitMapBackend::new(path, (config.image_size, config.image_size));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Step {}/{}", step, total), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(24)
        .build_cartesian_2d(
            config.view_min..config.view_max,
            config.view_min..config.view_max,
        )
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    chart
        .configure_mesh()
        .draw()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    chart
        .draw_series(
            points
                .iter()
                .filter(|point| point.label == Label::Positive)
                .map(|point| Circle::new((point.features[0], point.features[1]), 4, BLUE.filled())),
        )
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
        .label("+1")
        .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));

    chart
        .draw_series(
            points
                .iter()
                .filter(|point| point.label == Label::Negative)
                .map(|point| Circle::new((point.features[0], point.features[1]), 4, RED.filled())),
        )
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
        .label("-1")
        .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));

    if let Some(endpoints) = boundary_endpoints(snapshot, config) {
        chart
            .draw_series(DashedLineSeries::new(
                endpoints.iter().copied(),
                8,
                6,
                ShapeStyle::from(&BLACK),
            ))
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
            .label("Decision boundary")
            .legend(|(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], &BLACK));
    }

    let tip = (
        snapshot.weights.first().copied().unwrap_or(0.0),
        snapshot.weights.get(1).copied().unwrap_or(0.0),
    );
    chart
        .draw_series(LineSeries::new(
            [(0.0, 0.0), tip],
            GREEN.stroke_width(2),
        ))
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
        .label("Current w")
        .legend(|(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], GREEN.stroke_width(2)));
    chart
        .draw_series(std::iter::once(Circle::new(tip, 4, GREEN.filled())))
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    if let Some(reference) = reference {
        let tip = (reference.weights()[0], reference.weights()[1]);
        chart
            .draw_series(LineSeries::new(
                [(0.0, 0.0), tip],
                RED.stroke_width(2),
            ))
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?
            .label("Reference w")
            .legend(|(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], RED.stroke_width(2)));
        chart
            .draw_series(std::iter::once(Circle::new(tip, 4, RED.filled())))
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    root.present()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

/// Render every snapshot in `history` into `out_dir` as `step_000.png`,
/// `step_001.png`, … in update order. Returns the number of frames written.
pub fn render_history<P: AsRef<Path>>(
    out_dir: P,
    points: &[LabeledPoint],
    history: &TrainingHistory,
    reference: Option<&Hyperplane>,
    config: &RenderConfig,
) -> io::Result<usize> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)?;

    let total = history.len();
    for (index, snapshot) in history.snapshots().iter().enumerate() {
        let path = out_dir.join(format!("step_{:03}.png", index));
        render_frame(&path, points, snapshot, reference, index + 1, total, config)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_config_uses_the_classic_viewport() {
        let config = RenderConfig::default();
        assert_eq!(config.view_min, -4.0);
        assert_eq!(config.view_max, 6.0);
    }

    #[test]
    fn boundary_is_horizontal_when_w0_is_zero() {
        let snapshot = Snapshot {
            weights: vec![0.0, 1.0],
            bias: -1.0,
        };
        let endpoints = boundary_endpoints(&snapshot, &RenderConfig::default()).unwrap();
        // y = 1 across the whole viewport
        assert_eq!(endpoints[0], (-4.0, 1.0));
        assert_eq!(endpoints[1], (6.0, 1.0));
    }

    #[test]
    fn boundary_slopes_with_the_weights() {
        let snapshot = Snapshot {
            weights: vec![1.0, 1.0],
            bias: 0.0,
        };
        let endpoints = boundary_endpoints(&snapshot, &RenderConfig::default()).unwrap();
        // y = -x
        assert_eq!(endpoints[0], (-4.0, 4.0));
        assert_eq!(endpoints[1], (6.0, -6.0));
    }

    #[test]
    fn vertical_boundary_has_no_endpoints() {
        let snapshot = Snapshot {
            weights: vec![1.0, 0.0],
            bias: 0.5,
        };
        assert!(boundary_endpoints(&snapshot, &RenderConfig::default()).is_none());
    }

    #[test]
    fn zero_snapshot_has_no_boundary() {
        let snapshot = Snapshot {
            weights: vec![0.0, 0.0],
            bias: 0.0,
        };
        assert!(boundary_endpoints(&snapshot, &RenderConfig::default()).is_none());
    }
}
