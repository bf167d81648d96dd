use crate::entities::{MaterialSummary, PlacedPiece, Sheet};
use crate::io::ext_repr::{
    ExtDimensions, ExtMaterialSolution, ExtPlacedPiece, ExtPosition, ExtSheet,
    ExtSheetDimensions, ExtSummary,
};

pub fn export_placed_piece(pp: &PlacedPiece) -> ExtPlacedPiece {
    let (width, height) = pp.footprint();
    ExtPlacedPiece {
        demand_id: pp.demand_id,
        width: pp.width,
        height: pp.height,
        position: ExtPosition { x: pp.x, y: pp.y },
        rotated: pp.rotated(),
        dimensions_after_rotation: ExtDimensions { width, height },
    }
}

pub fn export_sheet(sheet: &Sheet) -> ExtSheet {
    let stats = sheet.stats();
    ExtSheet {
        dimensions: ExtSheetDimensions {
            width: sheet.width(),
            height: sheet.height(),
            thickness: sheet.thickness_mm(),
        },
        efficiency: stats.efficiency,
        total_area: stats.total_area,
        used_area: stats.used_area,
        pieces: sheet.placed_pieces.iter().map(export_placed_piece).collect(),
    }
}

pub fn export_summary(summary: &MaterialSummary) -> ExtSummary {
    ExtSummary {
        total_sheets: summary.sheet_count,
        total_pieces: summary.piece_count,
        overall_efficiency: summary.efficiency,
        total_area: summary.total_area,
        used_area: summary.used_area,
    }
}

/// Exports the cutting plan of material `code`
pub fn export_material(code: &str, sheets: &[Sheet]) -> ExtMaterialSolution {
    ExtMaterialSolution {
        code: code.to_owned(),
        summary: export_summary(&MaterialSummary::from_sheets(sheets)),
        sheets: sheets.iter().map(export_sheet).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StockSheetSpec;

    #[test]
    fn rotated_piece_reports_both_dimensions() {
        let spec = StockSheetSpec::try_new("CL6", 6, 3300.0, 2600.0).unwrap();
        let mut sheet = Sheet::new(spec);
        sheet.try_place(3, 1000.0, 3000.0, true).unwrap();

        let ext = export_material("CL6", &[sheet]);
        assert_eq!(ext.summary.total_sheets, 1);
        assert_eq!(ext.summary.total_pieces, 1);

        let ext_sheet = &ext.sheets[0];
        assert_eq!(ext_sheet.dimensions.thickness, 6);
        let piece = &ext_sheet.pieces[0];
        assert_eq!(piece.demand_id, 3);
        assert!(piece.rotated);
        assert_eq!((piece.width, piece.height), (1000.0, 3000.0));
        assert_eq!(
            piece.dimensions_after_rotation,
            ExtDimensions {
                width: 3000.0,
                height: 1000.0
            }
        );
        assert_eq!(ext_sheet.used_area, 3_000_000.0);
    }
}
