//! Point files: `.json` (array of `[x, y]` rows), `.csv` / `.parquet` (columns `x`, `y`).
//!
//! Readers return raw rows; arity and finiteness are checked by the core, so a
//! malformed file surfaces as `InvalidInputError` with the offending row index.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use quickhull::api::Point;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Csv,
    Parquet,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("csv") => Ok(Format::Csv),
        Some("parquet") => Ok(Format::Parquet),
        _ => bail!(
            "unsupported point file {} (expected .json, .csv or .parquet)",
            path.display()
        ),
    }
}

/// Read coordinate rows from `path`.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<f64>>> {
    match format_of(path)? {
        Format::Json => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice::<Vec<Vec<f64>>>(&bytes).with_context(|| {
                format!("parsing {} as an array of numeric rows", path.display())
            })
        }
        Format::Csv => {
            let df = LazyCsvReader::new(path)
                .finish()
                .and_then(|lf| lf.collect())
                .with_context(|| format!("reading {}", path.display()))?;
            frame_rows(&df).with_context(|| format!("columns x, y in {}", path.display()))
        }
        Format::Parquet => {
            let df = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .and_then(|lf| lf.collect())
                .with_context(|| format!("reading {}", path.display()))?;
            frame_rows(&df).with_context(|| format!("columns x, y in {}", path.display()))
        }
    }
}

/// Rows from the `x` and `y` columns. Nulls and unparsable cells become NaN.
fn frame_rows(df: &DataFrame) -> Result<Vec<Vec<f64>>> {
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let rows = xs
        .f64()?
        .into_iter()
        .zip(ys.f64()?.into_iter())
        .map(|(x, y)| vec![x.unwrap_or(f64::NAN), y.unwrap_or(f64::NAN)])
        .collect();
    Ok(rows)
}

#[inline]
pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// Write points in the format implied by the extension of `path`.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    let format = format_of(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    match format {
        Format::Json => {
            fs::write(path, serde_json::to_vec_pretty(&to_pairs(points))?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv | Format::Parquet => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let file =
                fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
            if format == Format::Csv {
                CsvWriter::new(file).include_header(true).finish(&mut df)?;
            } else {
                ParquetWriter::new(file).finish(&mut df)?;
            }
        }
    }
    Ok(())
}
