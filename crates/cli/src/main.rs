mod load;
mod provenance;

use anyhow::Result;
use clap::{Parser, Subcommand};
use polepoint::intersect::polygon_intersects_buffered_point;
use polepoint::poi::point_to_polygon_distance;
use polepoint::{find_pole, Point, PoleCfg};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Pole of inaccessibility runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the pole of inaccessibility and write it as JSON with a provenance sidecar
    Pole {
        /// Polygon as .json (array of rings of {x, y}) or .csv (columns ring, x, y)
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 1.0)]
        precision: f64,
        /// Stop after this many cell evaluations; 0 disables the cap
        #[arg(long, default_value_t = 1_000_000)]
        max_probes: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Hit-test a buffered point against a polygon
    Hit {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        x: f64,
        #[arg(long)]
        y: f64,
        #[arg(long, default_value_t = 0.0)]
        radius: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct PoleOut {
    x: f64,
    y: f64,
    distance: f64,
    probes: usize,
    truncated: bool,
}

#[derive(Debug, Serialize)]
struct HitOut {
    hits_outer: bool,
    inside: bool,
    distance: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Pole {
            input,
            precision,
            max_probes,
            out,
        } => {
            pole(&input, precision, max_probes, &out)?;
            Ok(())
        }
        Action::Hit { input, x, y, radius } => {
            let res = hit(&input, Point::new(x, y), radius)?;
            println!("{}", serde_json::to_string_pretty(&res)?);
            Ok(())
        }
        Action::Report => report(),
    }
}

fn pole(input: &Path, precision: f64, max_probes: usize, out: &Path) -> Result<PoleOut> {
    tracing::info!(input = %input.display(), precision, max_probes, "pole");
    let rings = load::load_polygon(input)?;
    let cfg = PoleCfg {
        precision,
        max_probes: (max_probes > 0).then_some(max_probes),
    };
    let pole = find_pole(&rings, &cfg)?;
    tracing::info!(
        x = pole.point.x,
        y = pole.point.y,
        distance = pole.distance,
        probes = pole.probes,
        truncated = pole.truncated,
        "pole_found"
    );

    let res = PoleOut {
        x: pole.point.x,
        y: pole.point.y,
        distance: pole.distance,
        probes: pole.probes,
        truncated: pole.truncated,
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&res)?)?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({
            "input": input.to_string_lossy(),
            "rings": rings.len(),
            "precision": precision,
            "max_probes": max_probes
        })),
    )?;
    Ok(res)
}

fn hit(input: &Path, point: Point, radius: f64) -> Result<HitOut> {
    let rings = load::load_polygon(input)?;
    let Some(outer) = rings.first() else {
        anyhow::bail!("{} has no rings", input.display());
    };
    let distance = point_to_polygon_distance(point, &rings);
    Ok(HitOut {
        hits_outer: polygon_intersects_buffered_point(outer, point, radius),
        inside: distance > 0.0,
        distance,
    })
}

fn report() -> Result<()> {
    let obj = provenance::block(Payload::new(json!({})));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TRIANGLE: &str = r#"[[{"x":0,"y":0},{"x":10,"y":10},{"x":10,"y":0},{"x":0,"y":0}]]"#;
    const SQUARE_WITH_HOLE: &str = "ring,x,y\n\
        0,0,0\n0,10,0\n0,10,10\n0,0,10\n0,0,0\n\
        1,4,4\n1,6,4\n1,6,6\n1,4,6\n1,4,4\n";

    #[test]
    fn pole_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tri.json");
        fs::write(&input, TRIANGLE).unwrap();
        let out = dir.path().join("runs").join("tri.pole.json");

        let res = pole(&input, 0.1, 0, &out).unwrap();
        assert_eq!((res.x, res.y), (7.0703125, 2.9296875));
        assert!(!res.truncated);

        let written: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written["x"], 7.0703125);
        assert_eq!(written["probes"], res.probes);
        assert!(dir.path().join("runs").join("tri.pole.provenance.json").exists());
    }

    #[test]
    fn pole_reads_csv_with_holes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("holed.csv");
        fs::write(&input, SQUARE_WITH_HOLE).unwrap();
        let res = pole(&input, 0.1, 0, &dir.path().join("holed.json")).unwrap();
        // the pole must avoid the hole
        assert!(res.distance > 0.0);
        assert!(!(4.0..=6.0).contains(&res.x) || !(4.0..=6.0).contains(&res.y));
    }

    #[test]
    fn pole_rejects_empty_polygon() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.json");
        fs::write(&input, "[[]]").unwrap();
        let err = pole(&input, 1.0, 0, &dir.path().join("o.json")).unwrap_err();
        assert!(err.to_string().contains("invalid polygon"));
    }

    #[test]
    fn hit_reports_outer_and_holes_separately() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("holed.csv");
        fs::write(&input, SQUARE_WITH_HOLE).unwrap();

        let in_hole = hit(&input, Point::new(5.0, 5.0), 0.0).unwrap();
        assert!(in_hole.hits_outer);
        assert!(!in_hole.inside);

        let near_edge = hit(&input, Point::new(10.5, 5.0), 1.0).unwrap();
        assert!(near_edge.hits_outer);
        assert!(!near_edge.inside);

        let far = hit(&input, Point::new(20.0, 5.0), 1.0).unwrap();
        assert!(!far.hits_outer);
    }

    #[test]
    fn cli_parses_pole_defaults() {
        let cmd = Cmd::try_parse_from(["cli", "pole", "--input", "a.json", "--out", "b.json"]).unwrap();
        match cmd.action {
            Action::Pole {
                precision,
                max_probes,
                ..
            } => {
                assert_eq!(precision, 1.0);
                assert_eq!(max_probes, 1_000_000);
            }
            _ => panic!("expected pole"),
        }
    }
}
