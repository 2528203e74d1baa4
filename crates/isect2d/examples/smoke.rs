//! Solve a small hand-written scene and print the points.
//!
//! Usage:
//!   cargo run -p isect2d --example smoke
//!   cargo run -p isect2d --example smoke -- 6     (round to 6 digits)

use isect2d::pairwise::resolve;
use isect2d::{solve, GeomCfg, Segment2, SolveCfg};

fn main() {
    let round_digits = std::env::args().nth(1).and_then(|s| s.parse::<u32>().ok());
    let segments: Vec<Segment2> = vec![
        ((0, 0), (4, 4)).into(),
        ((0, 4), (4, 0)).into(),
        ((2, -1), (2, 3)).into(),
        ((3, 0), (6, 0)).into(),
        ((5, 0), (8, 0)).into(),
    ];
    for (i, a) in segments.iter().enumerate() {
        for (j, b) in segments.iter().enumerate().skip(i + 1) {
            let hits = resolve(a, b, GeomCfg::default());
            if !hits.is_empty() {
                println!("pair ({i}, {j}): {:?} {:?}", hits.contact, hits.points);
            }
        }
    }
    let cfg = SolveCfg {
        round_digits,
        ..SolveCfg::default()
    };
    match solve(&segments, cfg) {
        Ok(points) => {
            println!("{} intersection point(s):", points.len());
            for p in points.iter() {
                println!("  ({}, {})", p.x, p.y);
            }
        }
        Err(err) => eprintln!("error: {err}"),
    }
}
