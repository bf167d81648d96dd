use crate::entities::{FreeRegion, PlacedPiece, Sheet};
use crate::fsize;
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::Rect;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// All pieces lie inside the sheet and no two pieces overlap
pub fn sheet_is_feasible(sheet: &Sheet) -> bool {
    let bbox = sheet.spec.bbox();

    for pp in &sheet.placed_pieces {
        if pp.x < 0.0 || pp.y < 0.0 {
            error!("placed piece has a negative position: {pp:?}");
            return false;
        }
        if bbox.almost_relation_to(pp.bbox()) != GeoRelation::Surrounding {
            error!("placed piece exceeds the sheet: {pp:?}, sheet: {bbox:?}");
            return false;
        }
    }

    for (a, b) in sheet.placed_pieces.iter().tuple_combinations() {
        if a.bbox().almost_overlaps(&b.bbox()) {
            error!("placed pieces overlap: {a:?} and {b:?}");
            return false;
        }
    }

    true
}

/// No placed piece intersects the interior of `region`
pub fn region_is_unoccupied(placed_pieces: &[PlacedPiece], region: &FreeRegion) -> bool {
    let rect = region.rect();
    match placed_pieces
        .iter()
        .find(|pp| pp.bbox().almost_overlaps(&rect))
    {
        Some(pp) => {
            error!("free region {region:?} is occupied by {pp:?}");
            false
        }
        None => true,
    }
}

/// The free regions together with the placed pieces cover the entire sheet.
/// Checked by sampling the centers of a grid of cells.
pub fn free_space_covers_unused_area(sheet: &Sheet, resolution: usize) -> bool {
    let cell_w = sheet.width() / resolution as fsize;
    let cell_h = sheet.height() / resolution as fsize;

    (0..resolution)
        .cartesian_product(0..resolution)
        .map(|(i, j)| ((i as fsize + 0.5) * cell_w, (j as fsize + 0.5) * cell_h))
        .all(|(x, y)| {
            let inside = |r: Rect| {
                x >= r.x_min && x <= r.x_max && y >= r.y_min && y <= r.y_max
            };
            let covered = sheet.placed_pieces.iter().any(|pp| inside(pp.bbox()))
                || sheet
                    .free_space()
                    .regions()
                    .iter()
                    .any(|r| inside(r.rect()));
            if !covered {
                error!("point ({x}, {y}) is neither occupied nor free");
            }
            covered
        })
}
