use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quickhull::api::{draw_scatter, Point, PointCount, ScatterBounds, ScatterCfg, ScatterReplay};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod session;

use provenance::Payload;
use session::Session;

#[derive(Parser)]
#[command(name = "quickhull-cli")]
#[command(about = "Convex hulls of planar point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the CCW convex hull of a point file
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// JSON output; printed to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also emit the hull of every discovery prefix
        #[arg(long)]
        steps: bool,
        /// Extra point `X,Y` added after loading; repeatable
        #[arg(long = "add", value_name = "X,Y")]
        add: Vec<String>,
    },
    /// Peel nested hulls until no point is left
    Layers {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a seeded random point file (.json, .csv or .parquet)
    Random {
        #[arg(long)]
        out: PathBuf,
        /// Exact point count; overrides --min/--max
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, default_value_t = 15)]
        min: usize,
        #[arg(long, default_value_t = 70)]
        max: usize,
        #[arg(long, default_value_t = 25.0)]
        half_width: f64,
        #[arg(long, default_value_t = 25.0)]
        half_height: f64,
        #[arg(long, default_value_t = 1)]
        decimals: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    // stdout carries JSON results
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            steps,
            add,
        } => hull(&input, out.as_deref(), steps, &add),
        Action::Layers { input, out } => layers(&input, out.as_deref()),
        Action::Random {
            out,
            count,
            min,
            max,
            half_width,
            half_height,
            decimals,
            seed,
            index,
        } => {
            let cfg = ScatterCfg {
                count: match count {
                    Some(n) => PointCount::Fixed(n),
                    None => PointCount::Uniform { min, max },
                },
                bounds: ScatterBounds {
                    half_width,
                    half_height,
                },
                decimals: Some(decimals),
            };
            random(&out, cfg, ScatterReplay { seed, index })
        }
        Action::Report => report(),
    }
}

fn load(input: &Path) -> Result<Session> {
    let rows = points_io::read_rows(input)?;
    let session = Session::from_rows(&rows)
        .with_context(|| format!("invalid point in {}", input.display()))?;
    tracing::info!(
        input = %input.display(),
        rows = rows.len(),
        distinct = session.points().len(),
        "loaded"
    );
    Ok(session)
}

/// Write `body` to `out` with a provenance sidecar, or print it.
fn emit<T: Serialize>(body: &T, out: Option<&Path>, payload: Payload) -> Result<()> {
    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(body)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(body)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

/// Parse `X,Y` (whitespace around either number is ignored).
fn parse_xy(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected X,Y, got {:?}", s))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {:?}", s))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {:?}", s))?;
    Ok(Point::new(x, y))
}

fn hull(input: &Path, out: Option<&Path>, steps: bool, add: &[String]) -> Result<()> {
    let mut session = load(input)?;
    let extra = add
        .iter()
        .map(|s| parse_xy(s).with_context(|| format!("--add {:?}", s)))
        .collect::<Result<Vec<_>>>()?;
    let added = session.add_points(&extra).map_err(|e| {
        let arg = add.get(e.index()).map(String::as_str).unwrap_or_default();
        anyhow::Error::new(e).context(format!("--add {:?}", arg))
    })?;
    if !extra.is_empty() {
        tracing::info!(given = extra.len(), added, "added points");
    }
    let report = session
        .hull_report(steps)
        .with_context(|| format!("hull of {}", input.display()))?;
    tracing::info!(
        vertices = report.hull.len(),
        discovered = report.discovery.len(),
        area = report.area,
        "hull"
    );
    let payload =
        Payload::new("hull", json!({ "steps": steps, "add": add })).with_input(input);
    emit(&report, out, payload)
}

fn layers(input: &Path, out: Option<&Path>) -> Result<()> {
    let session = load(input)?;
    let report = session
        .layers_report()
        .with_context(|| format!("layers of {}", input.display()))?;
    tracing::info!(layers = report.layers.len(), "layers");
    let payload = Payload::new("layers", json!({})).with_input(input);
    emit(&report, out, payload)
}

fn random(out: &Path, cfg: ScatterCfg, tok: ScatterReplay) -> Result<()> {
    let points = draw_scatter(cfg, tok);
    tracing::info!(points = points.len(), seed = tok.seed, index = tok.index, "random");
    points_io::write_points(out, &points)?;
    let payload = Payload::new(
        "random",
        json!({
            "count": format!("{:?}", cfg.count),
            "half_width": cfg.bounds.half_width,
            "half_height": cfg.bounds.half_height,
            "decimals": cfg.decimals,
            "seed": tok.seed,
            "index": tok.index
        }),
    );
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_subcommands() {
        let argv = ["quickhull-cli", "hull", "--input", "p.csv", "--steps"];
        let cmd = Cmd::try_parse_from(argv).unwrap();
        assert!(matches!(
            cmd.action,
            Action::Hull {
                steps: true,
                out: None,
                ..
            }
        ));
        let argv = ["quickhull-cli", "random", "--out", "r.json", "--count", "9"];
        let cmd = Cmd::try_parse_from(argv).unwrap();
        assert!(matches!(cmd.action, Action::Random { count: Some(9), .. }));
        assert!(Cmd::try_parse_from(["quickhull-cli", "hull"]).is_err());
    }

    #[test]
    fn random_then_hull_writes_outputs_and_sidecars() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.csv");
        let cfg = ScatterCfg {
            count: PointCount::Fixed(40),
            ..ScatterCfg::default()
        };
        random(&pts, cfg, ScatterReplay { seed: 5, index: 1 }).unwrap();
        assert!(dir.path().join("pts.provenance.json").exists());

        let out = dir.path().join("out/hull.json");
        hull(&pts, Some(out.as_path()), true, &[]).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        let n = parsed["hull"].as_array().unwrap().len();
        assert!(n >= 3);
        assert!(parsed["points"].as_u64().unwrap() <= 40);
        assert!(parsed["steps"].is_array());
        let prov: Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("out/hull.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["command"], "hull");
    }

    #[test]
    fn malformed_rows_fail_with_context() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("bad.json");
        std::fs::write(&pts, "[[0, 0], [1, 1, 1]]").unwrap();
        let err = hull(&pts, None, false, &[]).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("invalid point"), "{}", chain);
        assert!(chain.contains("point 1 has 3 coordinates"), "{}", chain);
    }

    #[test]
    fn added_points_extend_the_hull() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.json");
        std::fs::write(&pts, "[[0,0],[2,0],[0,2]]").unwrap();
        let out = dir.path().join("hull.json");
        let add = vec!["2, 2".to_string()];
        hull(&pts, Some(out.as_path()), false, &add).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["hull"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["area"], 4.0);
        assert!(hull(&pts, None, false, &["1;2".to_string()]).is_err());
    }

    #[test]
    fn added_duplicates_and_bad_values_are_reported() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.json");
        std::fs::write(&pts, "[[0,0],[2,0],[0,2]]").unwrap();
        let out = dir.path().join("hull.json");
        let add = vec!["2,0".to_string(), "0, 2".to_string()];
        hull(&pts, Some(out.as_path()), false, &add).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["points"], 3);

        let add = vec!["1,1".to_string(), "nan,0".to_string()];
        let err = hull(&pts, None, false, &add).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("--add \"nan,0\""), "{}", chain);
        assert!(chain.contains("point 1"), "{}", chain);
    }

    #[test]
    fn parse_xy_accepts_spaces() {
        assert_eq!(parse_xy(" 1.5 , -2").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_xy("1").is_err());
        assert!(parse_xy("a,1").is_err());
    }

    #[test]
    fn layers_to_file() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("pts.json");
        std::fs::write(&pts, "[[0,0],[4,0],[4,4],[0,4],[2,2],[1,2]]").unwrap();
        let out = dir.path().join("layers.json");
        layers(&pts, Some(out.as_path())).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["layers"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["points"], 6);
    }
}
