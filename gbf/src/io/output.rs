use std::time::Instant;

use crate::config::GBFConfig;
use crate::opt::MaterialOutcome;
use glasscut::io::export::export_material;
use glasscut::io::ext_repr::{ExtDemand, ExtFailure, ExtSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct GBFOutput {
    pub demand: ExtDemand,
    pub solution: ExtSolution,
    pub config: GBFConfig,
}

/// Collects the outcomes of all materials into a single solution document.
pub fn export_solution(outcomes: &[MaterialOutcome], epoch: Instant) -> ExtSolution {
    let mut solution = ExtSolution {
        run_time_sec: epoch.elapsed().as_secs(),
        ..ExtSolution::default()
    };
    for outcome in outcomes {
        match &outcome.result {
            Ok(sheets) => solution
                .materials
                .push(export_material(&outcome.code, sheets)),
            Err(e) => solution.failures.push(ExtFailure {
                code: outcome.code.clone(),
                error: e.to_string(),
            }),
        }
    }
    solution
}
