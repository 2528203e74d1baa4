use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use isect2d::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Segment intersection runner")]
struct Cmd {
    /// Only log warnings and errors
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect a segment file (.csv, .parquet or .json) and write the points as JSON
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Absolute tolerance for every geometric comparison
        #[arg(long, default_value_t = GeomCfg::default().eps)]
        eps: f64,
        /// Round output coordinates to this many decimals
        #[arg(long)]
        round_digits: Option<u32>,
    },
    /// Write a reproducible random segment set as CSV
    Generate {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        #[arg(long, default_value_t = 40.0)]
        max_len: f64,
        #[arg(long, default_value_t = 0.0)]
        degenerate_frac: f64,
        #[arg(long, default_value_t = 0.0)]
        axis_aligned_frac: f64,
        #[arg(long)]
        snap_to_grid: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.quiet { Level::WARN } else { Level::INFO };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            out,
            eps,
            round_digits,
        } => solve_file(&input, &out, eps, round_digits),
        Action::Generate {
            count,
            seed,
            index,
            extent,
            max_len,
            degenerate_frac,
            axis_aligned_frac,
            snap_to_grid,
            out,
        } => {
            let cfg = SegmentCfg {
                count,
                extent,
                max_len,
                degenerate_frac,
                axis_aligned_frac,
                snap_to_grid,
            };
            generate(cfg, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

fn solve_file(input: &Path, out: &Path, eps: f64, round_digits: Option<u32>) -> Result<()> {
    if !(eps.is_finite() && eps >= 0.0) {
        bail!("--eps must be a finite non-negative number, got {eps}");
    }
    let cfg = SolveCfg {
        geom: GeomCfg::with_eps(eps),
        round_digits,
    };
    tracing::info!(input = %input.display(), out = %out.display(), eps, ?round_digits, "solve");

    let segments = io::read_segments(input)?;
    let points = solve(&segments, cfg).with_context(|| format!("solving {}", input.display()))?;
    tracing::info!(segments = segments.len(), points = points.len(), "solved");

    io::write_points(out, &io::PointsDoc::new(&points, cfg))?;
    let payload = Payload::new(
        "solve",
        json!({
            "eps": eps,
            "round_digits": round_digits,
            "segments": segments.len(),
            "points": points.len(),
        }),
    )
    .with_input(input);
    write_sidecar(out, payload)?;
    Ok(())
}

fn generate(cfg: SegmentCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    cfg.validate()?;
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, out = %out.display(), "generate");
    let segments = draw_segments(cfg, tok);
    io::write_segments_csv(out, &segments)?;
    let payload = Payload::new(
        "generate",
        json!({
            "count": cfg.count,
            "seed": tok.seed,
            "index": tok.index,
            "extent": cfg.extent,
            "max_len": cfg.max_len,
            "degenerate_frac": cfg.degenerate_frac,
            "axis_aligned_frac": cfg.axis_aligned_frac,
            "snap_to_grid": cfg.snap_to_grid,
        }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "isect2d_version": isect2d::VERSION,
        "default_eps": GeomCfg::default().eps,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn solve_file_writes_points_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("x.json");
        fs::write(&input, "[[[0, 0], [4, 4]], [[0, 4], [4, 0]], [[0, 0], [4, 0]], [[2, 0], [6, 0]]]").unwrap();
        let out = dir.path().join("out/points.json");
        solve_file(&input, &out, 1e-12, Some(6)).unwrap();

        let doc: io::PointsDoc = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc.points, vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [4.0, 0.0]]);
        assert_eq!(doc.count, 4);
        assert_eq!(doc.round_digits, Some(6));
        assert!(dir.path().join("out/points.provenance.json").exists());
    }

    #[test]
    fn solve_file_rejects_bad_eps() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("points.json");
        assert!(solve_file(Path::new("unused.json"), &out, -1.0, None).is_err());
        assert!(solve_file(Path::new("unused.json"), &out, f64::NAN, None).is_err());
    }

    #[test]
    fn generate_rejects_non_finite_params() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("segs.csv");
        let tok = ReplayToken { seed: 1, index: 0 };
        let nan_frac = SegmentCfg {
            degenerate_frac: f64::NAN,
            ..SegmentCfg::default()
        };
        let err = generate(nan_frac, tok, &out).unwrap_err();
        assert!(err.to_string().contains("degenerate_frac"));
        let inf_extent = SegmentCfg {
            extent: f64::INFINITY,
            ..SegmentCfg::default()
        };
        let err = generate(inf_extent, tok, &out).unwrap_err();
        assert!(err.to_string().contains("extent"));
        assert!(!out.exists());
    }

    #[test]
    fn solve_file_with_huge_round_digits_keeps_crossing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("x.json");
        fs::write(&input, "[[[0, 0], [40, 40]], [[0, 37], [40, 37]]]").unwrap();
        let out = dir.path().join("points.json");
        solve_file(&input, &out, 1e-12, Some(u32::MAX)).unwrap();
        let doc: io::PointsDoc = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc.count, 1);
        let [x, y] = doc.points[0];
        assert!((x - 37.0).abs() < 1e-9 && (y - 37.0).abs() < 1e-9);
    }

    #[test]
    fn generate_then_solve_matches_library() {
        let dir = tempdir().unwrap();
        let segs_path = dir.path().join("segs.csv");
        let cfg = SegmentCfg {
            count: 25,
            snap_to_grid: true,
            ..SegmentCfg::default()
        };
        let tok = ReplayToken { seed: 11, index: 2 };
        generate(cfg, tok, &segs_path).unwrap();
        assert!(dir.path().join("segs.provenance.json").exists());

        let out = dir.path().join("points.json");
        solve_file(&segs_path, &out, 1e-12, None).unwrap();
        let doc: io::PointsDoc = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let expected = solve_with_defaults(&draw_segments(cfg, tok)).unwrap();
        assert_eq!(doc.count, expected.len());
    }
}
