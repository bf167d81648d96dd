use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use glasscut::entities::Piece;
use glasscut::fsize;
use glasscut::io::ext_repr::{ExtDemand, ExtMaterialDemand, ExtPiece};
use log::{debug, warn};
use serde::Deserialize;

/// One row of a production export
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductionRow {
    #[serde(rename = "ITEM")]
    pub item: String,
    /// Thickness in mm, derived from `item` when left empty
    #[serde(rename = "Esp", default)]
    pub thickness: Option<u32>,
    #[serde(rename = "Largo")]
    pub length: String,
    #[serde(rename = "Ancho")]
    pub width: String,
    #[serde(rename = "Pzs.")]
    pub quantity: u64,
}

impl ProductionRow {
    /// Measure key in the form `LargoxAncho`
    pub fn measure(&self) -> String {
        format!("{}x{}", self.length.trim(), self.width.trim())
    }
}

/// Thickness encoded in an item code: trailing `T`s (tempered) are stripped and all remaining digits are read as one number.
///
/// `CC06T` -> 6, `CC10T` -> 10, `CMTB6T` -> 6
pub fn extract_thickness(item: &str) -> Option<u32> {
    let digits = item
        .trim_end_matches('T')
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>();
    digits.parse().ok()
}

/// Maps an item code onto the material code of its stock sheet (`CSLCL06T` -> `CL6`).
/// Codes without a thickness are kept as they are.
pub fn normalize_item_code(item: &str) -> String {
    match extract_thickness(item) {
        Some(thickness) => format!("CL{thickness}"),
        None => item.to_owned(),
    }
}

/// Parses a `WxH` measure string
pub fn parse_measure(measure: &str) -> Option<(fsize, fsize)> {
    let (width, height) = measure.split_once('x')?;
    if height.contains('x') {
        return None;
    }
    Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
}

pub fn read_rows(reader: impl Read) -> Result<Vec<ProductionRow>> {
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("could not parse production row {}", i + 1)))
        .collect()
}

/// Groups rows by material code, then by thickness and measure, summing their quantities.
///
/// Materials are ordered by code, their pieces by thickness and then by measure string.
/// Rows with an unreadable measure, a non-positive dimension or a zero quantity are skipped.
pub fn aggregate_rows(rows: &[ProductionRow]) -> ExtDemand {
    let mut groups: BTreeMap<String, BTreeMap<(u32, String), u64>> = BTreeMap::new();

    for row in rows {
        let thickness = row
            .thickness
            .or_else(|| extract_thickness(&row.item))
            .unwrap_or(0);
        let code = normalize_item_code(&row.item);
        *groups
            .entry(code)
            .or_default()
            .entry((thickness, row.measure()))
            .or_default() += row.quantity;
    }

    let materials = groups
        .into_iter()
        .map(|(code, measures)| {
            let pieces = measures
                .into_iter()
                .filter_map(|((_, measure), quantity)| {
                    let Some((width, height)) = parse_measure(&measure) else {
                        warn!("[INGEST] skipping invalid measure format for {code}: {measure}");
                        return None;
                    };
                    match Piece::try_new(width, height, quantity as usize) {
                        Ok(_) => Some(ExtPiece {
                            width,
                            height,
                            quantity,
                        }),
                        Err(e) => {
                            warn!("[INGEST] skipping {measure} of {code}: {e}");
                            None
                        }
                    }
                })
                .collect::<Vec<_>>();
            debug!("[INGEST] {code}: {} unique sizes", pieces.len());
            ExtMaterialDemand { code, pieces }
        })
        .collect();

    ExtDemand { materials }
}

pub fn read_csv_demand(path: &Path) -> Result<ExtDemand> {
    let file = File::open(path).context("could not open production rows")?;
    let rows = read_rows(file)?;
    Ok(aggregate_rows(&rows))
}
