use crate::entities::Sheet;
use crate::fsize;

/// Efficiency as a percentage of `used_area` over `total_area`, rounded to two decimals.
/// Zero if there is no area at all.
pub fn efficiency_pct(used_area: fsize, total_area: fsize) -> fsize {
    if total_area <= 0.0 {
        return 0.0;
    }
    (used_area / total_area * 100.0 * 100.0).round() / 100.0
}

/// Area statistics of a single [`Sheet`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStats {
    pub used_area: fsize,
    pub total_area: fsize,
    /// Percentage of the sheet covered by pieces
    pub efficiency: fsize,
}

impl SheetStats {
    pub fn from_sheet(sheet: &Sheet) -> Self {
        let used_area = sheet.used_area();
        let total_area = sheet.total_area();
        Self {
            used_area,
            total_area,
            efficiency: efficiency_pct(used_area, total_area),
        }
    }
}

/// Aggregated statistics of all sheets cut for one material code
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MaterialSummary {
    pub sheet_count: usize,
    pub piece_count: usize,
    pub total_area: fsize,
    pub used_area: fsize,
    pub efficiency: fsize,
}

impl MaterialSummary {
    pub fn from_sheets(sheets: &[Sheet]) -> Self {
        let total_area = sheets.iter().map(|s| s.total_area()).sum();
        let used_area = sheets.iter().map(|s| s.used_area()).sum();
        Self {
            sheet_count: sheets.len(),
            piece_count: sheets.iter().map(|s| s.placed_pieces.len()).sum(),
            total_area,
            used_area,
            efficiency: efficiency_pct(used_area, total_area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StockSheetSpec;

    #[test]
    fn efficiency_is_rounded_and_guarded() {
        assert_eq!(efficiency_pct(1.0, 3.0), 33.33);
        assert_eq!(efficiency_pct(2.0, 3.0), 66.67);
        assert_eq!(efficiency_pct(5.0, 0.0), 0.0);
        assert_eq!(efficiency_pct(8_580_000.0, 8_580_000.0), 100.0);
    }

    #[test]
    fn summary_over_sheets() {
        let spec = StockSheetSpec::try_new("CL3", 3, 100.0, 100.0).unwrap();
        let mut full = Sheet::new(spec.clone());
        full.try_place(0, 100.0, 100.0, true).unwrap();
        let mut half = Sheet::new(spec);
        half.try_place(1, 50.0, 100.0, true).unwrap();

        let sheets = [full, half];
        assert_eq!(sheets[0].stats().efficiency, 100.0);
        assert_eq!(sheets[1].stats().efficiency, 50.0);

        let summary = MaterialSummary::from_sheets(&sheets);
        assert_eq!(summary.sheet_count, 2);
        assert_eq!(summary.piece_count, 2);
        assert_eq!(summary.total_area, 20_000.0);
        assert_eq!(summary.used_area, 15_000.0);
        assert_eq!(summary.efficiency, 75.0);
        assert_eq!(MaterialSummary::from_sheets(&[]), MaterialSummary::default());
    }
}
