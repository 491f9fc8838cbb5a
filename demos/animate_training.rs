//! End-to-end demo: generate clusters, train with a recorded trace, and
//! render one frame per update alongside a reference separator.
//!
//! Run with: cargo run --example animate_training

use perceptron_trace::{
    fit_reference, generate_clusters, logging, render_history, train, RunConfig, TrainOutcome,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("🧠 Perceptron Trace - Recorded Training Run");
    println!("===========================================\n");

    let config = RunConfig::load_from_file("config/trainer.toml")
        .unwrap_or_else(|_| RunConfig::default());

    println!("Configuration:");
    println!("  Points per class: {}", config.dataset.points_per_class);
    println!(
        "  Cluster centers: {:?} / {:?}",
        config.dataset.center_positive, config.dataset.center_negative
    );
    println!("  Spread: {}", config.dataset.spread);
    println!("  Seed: {}", config.dataset.seed);
    println!("  Update budget: {}", config.trainer.max_updates);
    println!();

    println!("📊 Generating dataset...");
    let points = generate_clusters(&config.dataset);
    println!("  {} labeled points", points.len());
    println!();

    println!("🎯 Fitting reference separator...");
    let reference = fit_reference(&points, config.trainer.reference_max_passes)?;
    println!(
        "  Reference misclassifies {} of {} points",
        reference.misclassified_count(&points),
        points.len()
    );
    println!();

    println!("🎓 Training with recorded trace...");
    let history = train(&points, config.trainer.max_updates)?;
    match history.outcome() {
        TrainOutcome::Converged { passes } => {
            println!(
                "  ✅ Converged after {} updates in {} passes",
                history.len(),
                passes
            );
        }
        TrainOutcome::Capped => {
            println!("  ⚠️ Update budget exhausted at {} updates", history.len());
        }
    }
    println!();

    println!("🖼️  Rendering frames...");
    let frames = render_history(
        "out/frames",
        &points,
        &history,
        Some(&reference),
        &config.render,
    )?;
    println!("  {} frames written to out/frames/", frames);
    println!();

    for (index, snapshot) in history.snapshots().iter().enumerate() {
        logging::log_update(index, snapshot)?;
    }
    logging::log_run_summary(&history)?;
    println!("📝 Run log appended to logs/updates.jsonl and logs/run.jsonl");
    println!();

    println!("✨ Done! Flip through out/frames/ to replay the run.");

    Ok(())
}
