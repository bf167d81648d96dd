use crate::fsize;
use serde::{Deserialize, Serialize};

/// External representation of a [`StockSheetSpec`](crate::entities::StockSheetSpec).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtStockSheet {
    /// Material code, e.g. `CL6`
    pub code: String,
    pub thickness_mm: u32,
    pub width_mm: fsize,
    pub height_mm: fsize,
}

/// External representation of a [`Catalog`](crate::entities::Catalog).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtCatalog {
    pub stock_sheets: Vec<ExtStockSheet>,
}

/// External representation of a [`Piece`](crate::entities::Piece): one line of demand.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPiece {
    pub width: fsize,
    pub height: fsize,
    pub quantity: u64,
}

/// All pieces requested for one material code
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtMaterialDemand {
    pub code: String,
    pub pieces: Vec<ExtPiece>,
}

/// Demand for all material codes, processed independently of each other
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtDemand {
    pub materials: Vec<ExtMaterialDemand>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPosition {
    pub x: fsize,
    pub y: fsize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtDimensions {
    pub width: fsize,
    pub height: fsize,
}

/// External representation of a [`PlacedPiece`](crate::entities::PlacedPiece).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPiece {
    /// Index of the demand line within its material
    pub demand_id: usize,
    /// Width as requested
    pub width: fsize,
    /// Height as requested
    pub height: fsize,
    /// Top-left corner of the piece on the sheet
    pub position: ExtPosition,
    pub rotated: bool,
    /// Footprint of the piece as it lies on the sheet
    pub dimensions_after_rotation: ExtDimensions,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSheetDimensions {
    pub width: fsize,
    pub height: fsize,
    pub thickness: u32,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub dimensions: ExtSheetDimensions,
    /// Percentage of the sheet covered by pieces
    pub efficiency: fsize,
    pub total_area: fsize,
    pub used_area: fsize,
    pub pieces: Vec<ExtPlacedPiece>,
}

/// External representation of a [`MaterialSummary`](crate::entities::MaterialSummary).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSummary {
    pub total_sheets: usize,
    pub total_pieces: usize,
    pub overall_efficiency: fsize,
    pub total_area: fsize,
    pub used_area: fsize,
}

/// Cutting plan for one material code
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtMaterialSolution {
    pub code: String,
    pub summary: ExtSummary,
    pub sheets: Vec<ExtSheet>,
}

/// A material code for which no cutting plan could be made
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFailure {
    pub code: String,
    pub error: String,
}

/// Cutting plans for all material codes of an [`ExtDemand`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExtSolution {
    pub materials: Vec<ExtMaterialSolution>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failures: Vec<ExtFailure>,
    pub run_time_sec: u64,
}
