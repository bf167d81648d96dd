use std::time::Instant;

use crate::config::GBFConfig;
use crate::opt::search::{expand_demand, piece_placement_order, validate_demand};
use glasscut::CutError;
use glasscut::entities::{Catalog, MaterialSummary, Piece, Sheet};
use glasscut::io::ext_repr::ExtDemand;
use glasscut::io::import::{import_catalog, import_demand};
use log::{debug, error, info};
use rayon::prelude::*;
use thousands::Separable;

/// Cutting plan (or the reason there is none) for a single material code
#[derive(Clone, Debug)]
pub struct MaterialOutcome {
    pub code: String,
    pub result: Result<Vec<Sheet>, CutError>,
}

/// Guillotine Best Fit (GBF) optimizer.
///
/// Pieces are placed largest first, each one in the free region of the current sheet
/// where it leaves the least waste. A new sheet is only opened when a full pass over
/// the remaining pieces places nothing on the current one.
pub struct GBFOptimizer {
    pub catalog: Catalog,
    pub config: GBFConfig,
}

impl GBFOptimizer {
    pub fn new(config: GBFConfig) -> Result<Self, CutError> {
        let catalog = import_catalog(&config.catalog)?;
        Ok(Self { catalog, config })
    }

    /// Computes the cutting plan for `demand` on stock sheets of material `code`.
    /// Returns the sheets in the order in which they were opened.
    pub fn optimize(&self, code: &str, demand: &[Piece]) -> Result<Vec<Sheet>, CutError> {
        let start = Instant::now();
        let allow_rotation = self.config.allow_rotation;

        let spec = self.catalog.lookup(code)?;
        validate_demand(spec, demand, allow_rotation)?;

        let mut pool = piece_placement_order(expand_demand(demand));
        let n_pieces = pool.len();
        let mut sheets: Vec<Sheet> = vec![];

        while let Some(&first) = pool.first() {
            let mut sheet = Sheet::new(spec.clone());
            let mut n_passes = 0;
            loop {
                let n_remaining = pool.len();
                pool.retain(|pi| {
                    sheet
                        .try_place(pi.demand_id, pi.width, pi.height, allow_rotation)
                        .is_none()
                });
                n_passes += 1;
                if pool.len() == n_remaining {
                    break;
                }
            }

            if sheet.is_empty() {
                return Err(CutError::UnfittablePiece {
                    index: first.demand_id,
                    width: first.width,
                    height: first.height,
                });
            }

            debug!(
                "[GBF] closing sheet {} of {code} after {n_passes} passes: {} pieces, {} remaining",
                sheets.len(),
                sheet.placed_pieces.len(),
                pool.len()
            );
            sheets.push(sheet);
        }

        let summary = MaterialSummary::from_sheets(&sheets);
        info!(
            "[GBF] {code}: placed {}/{} pieces on {} sheets ({:.2}% efficiency) in {:.3}ms",
            summary.piece_count,
            n_pieces,
            summary.sheet_count,
            summary.efficiency,
            start.elapsed().as_secs_f64() * 1000.0
        );
        debug!(
            "[GBF] {code}: used {} of {} mm2",
            summary.used_area.round().separate_with_commas(),
            summary.total_area.round().separate_with_commas()
        );

        Ok(sheets)
    }

    /// Optimizes every material of `demand` independently and in parallel.
    /// Outcomes are returned in the order of the materials in `demand`.
    pub fn optimize_all(&self, demand: &ExtDemand) -> Vec<MaterialOutcome> {
        demand
            .materials
            .par_iter()
            .map(|material| {
                let result = import_demand(&material.pieces)
                    .and_then(|pieces| self.optimize(&material.code, &pieces));
                if let Err(e) = &result {
                    error!("[GBF] no cutting plan for {}: {e}", material.code);
                }
                MaterialOutcome {
                    code: material.code.clone(),
                    result,
                }
            })
            .collect()
    }
}
