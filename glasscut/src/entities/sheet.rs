use crate::entities::{BestFit, FreeSpace, PlacedPiece, SheetStats, StockSheetSpec};
use crate::fsize;
use crate::util::assertions;

/// A single stock sheet which is being filled with pieces.
/// Every sheet keeps its own [`FreeSpace`] to find room for the next piece.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// The stock sheet this sheet was cut from
    pub spec: StockSheetSpec,
    /// Pieces in the order in which they were placed
    pub placed_pieces: Vec<PlacedPiece>,
    free_space: FreeSpace,
}

impl Sheet {
    pub fn new(spec: StockSheetSpec) -> Self {
        let free_space = FreeSpace::new(spec.width, spec.height);
        Self {
            spec,
            placed_pieces: vec![],
            free_space,
        }
    }

    pub fn width(&self) -> fsize {
        self.spec.width
    }

    pub fn height(&self) -> fsize {
        self.spec.height
    }

    pub fn thickness_mm(&self) -> u32 {
        self.spec.thickness_mm
    }

    /// Best fitting free region for a `width` x `height` piece, see [`FreeSpace::find_best_fit`]
    pub fn find_best_fit(
        &self,
        width: fsize,
        height: fsize,
        rotation_allowed: bool,
    ) -> Option<BestFit> {
        self.free_space
            .find_best_fit(width, height, rotation_allowed)
    }

    /// Places a piece of demand line `demand_id` according to `fit`.
    pub fn place_piece(
        &mut self,
        demand_id: usize,
        width: fsize,
        height: fsize,
        fit: BestFit,
    ) -> &PlacedPiece {
        debug_assert!(assertions::region_is_unoccupied(
            &self.placed_pieces,
            &fit.region
        ));

        let footprint = self.free_space.place(&fit, width, height);
        let index = self.placed_pieces.len();
        self.placed_pieces.push(PlacedPiece {
            demand_id,
            width,
            height,
            orientation: fit.orientation,
            x: footprint.x_min,
            y: footprint.y_min,
        });

        debug_assert!(assertions::sheet_is_feasible(self));

        &self.placed_pieces[index]
    }

    /// Searches for the best fit of the piece and places it if one exists.
    pub fn try_place(
        &mut self,
        demand_id: usize,
        width: fsize,
        height: fsize,
        rotation_allowed: bool,
    ) -> Option<&PlacedPiece> {
        let fit = self.find_best_fit(width, height, rotation_allowed)?;
        Some(self.place_piece(demand_id, width, height, fit))
    }

    pub fn free_space(&self) -> &FreeSpace {
        &self.free_space
    }

    /// True if no pieces are placed
    pub fn is_empty(&self) -> bool {
        self.placed_pieces.is_empty()
    }

    /// Sum of the areas of all placed pieces
    pub fn used_area(&self) -> fsize {
        self.placed_pieces.iter().map(|pp| pp.area()).sum()
    }

    pub fn total_area(&self) -> fsize {
        self.spec.area()
    }

    pub fn stats(&self) -> SheetStats {
        SheetStats::from_sheet(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_enums::Orientation;

    fn sheet() -> Sheet {
        Sheet::new(StockSheetSpec::try_new("CL6", 6, 3300.0, 2600.0).unwrap())
    }

    #[test]
    fn pieces_are_placed_top_left_first() {
        let mut sheet = sheet();
        let pp = *sheet.try_place(0, 1200.0, 800.0, true).unwrap();
        assert_eq!((pp.x, pp.y), (0.0, 0.0));
        assert_eq!(pp.orientation, Orientation::Original);

        let pp = *sheet.try_place(1, 1200.0, 800.0, true).unwrap();
        // the row below the first piece (1200 x 1800) wastes less than the column to its right
        assert_eq!((pp.x, pp.y), (0.0, 800.0));
        assert_eq!(sheet.placed_pieces.len(), 2);
        assert_eq!(sheet.used_area(), 2.0 * 1200.0 * 800.0);
    }

    #[test]
    fn piece_larger_than_remaining_space_is_rejected() {
        let mut sheet = sheet();
        assert!(sheet.try_place(0, 3300.0, 2000.0, true).is_some());
        assert!(sheet.try_place(1, 3300.0, 700.0, true).is_none());
        assert!(sheet.try_place(2, 700.0, 3300.0, false).is_none());
        assert_eq!(sheet.placed_pieces.len(), 1);
    }

    #[test]
    fn rotated_piece_keeps_requested_dimensions() {
        let mut sheet = sheet();
        let pp = *sheet.try_place(0, 2600.0, 3300.0, true).unwrap();
        assert!(pp.rotated());
        assert_eq!((pp.width, pp.height), (2600.0, 3300.0));
        assert_eq!(pp.footprint(), (3300.0, 2600.0));
        assert!(sheet.free_space().regions().is_empty());
    }
}
