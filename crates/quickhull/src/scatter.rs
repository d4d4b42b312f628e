//! Random planar point clouds (uniform box + replay tokens).
//!
//! Purpose
//! - Seeded inputs for the CLI `random` command, property checks and benches.
//!
//! Model
//! - Draw `n` points uniformly in `[-w, w] × [-h, h]`, optionally rounded to a
//!   fixed number of decimals (the default mimics hand-placed points on a
//!   grid of 0.1).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Half extents of the sampling box, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub half_width: f64,
    pub half_height: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            half_width: 25.0,
            half_height: 25.0,
        }
    }
}

/// Scatter sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterCfg {
    pub count: PointCount,
    /// Non-positive or non-finite extents collapse to 0 (all points on an axis).
    pub bounds: Bounds2,
    /// Round coordinates to this many decimals. Clamped to 12; `None` keeps raw draws.
    pub decimals: Option<u32>,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 15, max: 70 },
            bounds: Bounds2::default(),
            decimals: Some(1),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Draw a random point cloud. Duplicates are possible after rounding.
pub fn draw_scatter(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let w = extent(cfg.bounds.half_width);
    let h = extent(cfg.bounds.half_height);
    let scale = cfg.decimals.map(|d| 10f64.powi(d.min(12) as i32));
    let snap = |v: f64| match scale {
        Some(s) => (v * s).round() / s,
        None => v,
    };
    (0..n)
        .map(|_| {
            let x = (rng.gen::<f64>() * 2.0 - 1.0) * w;
            let y = (rng.gen::<f64>() * 2.0 - 1.0) * h;
            Point::new(snap(x), snap(y))
        })
        .collect()
}
