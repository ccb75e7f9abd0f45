//! Polygon input readers: JSON (array of rings of `{x, y}`) and CSV (`ring, x, y`).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polepoint::{Point, Ring};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct PointDto {
    x: f64,
    y: f64,
}

/// Load rings from `path`, dispatching on the file extension.
pub fn load_polygon(path: &Path) -> Result<Vec<Ring>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!("unsupported input {} (expected .json or .csv)", path.display()),
    }
}

fn load_json(path: &Path) -> Result<Vec<Ring>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rings: Vec<Vec<PointDto>> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(rings
        .into_iter()
        .map(|ring| ring.into_iter().map(|p| Point::new(p.x, p.y)).collect())
        .collect())
}

fn load_csv(path: &Path) -> Result<Vec<Ring>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("ring").cast(DataType::Int64),
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");

    let ids = df.column("ring")?.i64()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;

    // rings keep the order in which their id first appears
    let mut slot: HashMap<i64, usize> = HashMap::new();
    let mut rings: Vec<Ring> = Vec::new();
    for (row, ((id, x), y)) in ids.into_iter().zip(xs).zip(ys).enumerate() {
        let (Some(id), Some(x), Some(y)) = (id, x, y) else {
            bail!("row {row}: missing ring, x or y");
        };
        let idx = *slot.entry(id).or_insert_with(|| {
            rings.push(Ring::new());
            rings.len() - 1
        });
        rings[idx].push(Point::new(x, y));
    }
    Ok(rings)
}
