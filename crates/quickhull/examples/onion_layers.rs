//! Print hull and onion layers for a seeded scatter.
//!
//! Usage:
//!   cargo run -p quickhull --example onion_layers -- [seed]

use quickhull::api::{
    compute_convex_hull_traced, draw_scatter, onion_layers, ScatterCfg, ScatterReplay,
};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let pts = draw_scatter(ScatterCfg::default(), ScatterReplay { seed, index: 0 });
    println!("seed={} points={}", seed, pts.len());

    let trace = compute_convex_hull_traced(&pts).expect("scatter points are finite");
    println!(
        "hull: {} vertices, area={:.2}, perimeter={:.2}",
        trace.hull.len(),
        trace.hull.area(),
        trace.hull.perimeter()
    );
    for (k, step) in trace.steps().iter().enumerate() {
        println!("  step {:>2}: {} vertices, area={:.2}", k + 1, step.len(), step.area());
    }

    let layers = onion_layers(&pts).expect("scatter points are finite");
    for (k, layer) in layers.iter().enumerate() {
        println!("layer {}: {} vertices", k, layer.len());
    }
}
