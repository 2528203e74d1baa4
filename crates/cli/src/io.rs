//! Segment tables in and point documents out.
//!
//! Formats
//! - CSV / Parquet: columns `x1, y1, x2, y2`, one segment per row (polars).
//! - JSON: `[[[x1, y1], [x2, y2]], ...]`, the raw pair-of-pairs shape.
//! - Output: `{"count", "eps", "round_digits", "points": [[x, y], ...]}`.

use anyhow::{bail, Context, Result};
use isect2d::{IntersectionSet, Segment2, SolveCfg};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const COLUMNS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Read segments, picking the format from the file extension.
pub fn read_segments(path: &Path) -> Result<Vec<Segment2>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => read_json(path),
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            read_frame(lf, path)
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            read_frame(lf, path)
        }
        _ => bail!(
            "unsupported segment file {} (expected .csv, .parquet or .json)",
            path.display()
        ),
    }
}

fn read_frame(lf: LazyFrame, path: &Path) -> Result<Vec<Segment2>> {
    let df = lf
        .select(COLUMNS.map(|c| col(c).cast(DataType::Float64)))
        .collect()
        .with_context(|| format!("reading columns {COLUMNS:?} from {}", path.display()))?;
    let x1 = df.column("x1")?.f64()?;
    let y1 = df.column("y1")?.f64()?;
    let x2 = df.column("x2")?.f64()?;
    let y2 = df.column("y2")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        match (x1.get(row), y1.get(row), x2.get(row), y2.get(row)) {
            (Some(a), Some(b), Some(c), Some(d)) => out.push(Segment2::from_coords((a, b), (c, d))),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    tracing::info!(rows = out.len(), path = %path.display(), "segments_read");
    Ok(out)
}

fn read_json(path: &Path) -> Result<Vec<Segment2>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[[f64; 2]; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[[x1, y1], [x2, y2]], ...]", path.display()))?;
    tracing::info!(rows = raw.len(), path = %path.display(), "segments_read");
    Ok(raw.into_iter().map(Segment2::from).collect())
}

/// Write segments as a CSV table with columns `x1, y1, x2, y2`.
pub fn write_segments_csv(path: &Path, segments: &[Segment2]) -> Result<()> {
    ensure_parent(path)?;
    let column = |name: &str, f: fn(&Segment2) -> f64| {
        Series::new(name.into(), segments.iter().map(f).collect::<Vec<f64>>())
    };
    let mut df = DataFrame::new(vec![
        column("x1", |s| s.p.x),
        column("y1", |s| s.p.y),
        column("x2", |s| s.q.x),
        column("y2", |s| s.q.y),
    ])?;
    let mut file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// JSON document written by `cli solve`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PointsDoc {
    pub count: usize,
    pub eps: f64,
    pub round_digits: Option<u32>,
    pub points: Vec<[f64; 2]>,
}

impl PointsDoc {
    pub fn new(points: &IntersectionSet, cfg: SolveCfg) -> Self {
        Self {
            count: points.len(),
            eps: cfg.geom.eps,
            round_digits: cfg.round_digits,
            points: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

pub fn write_points(path: &Path, doc: &PointsDoc) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
