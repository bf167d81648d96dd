use glasscut::entities::{Piece, StockSheetSpec};
use glasscut::{CutError, fsize};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// A single unit of demand waiting to be placed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceInstance {
    /// Index of the demand line the instance was expanded from
    pub demand_id: usize,
    pub width: fsize,
    pub height: fsize,
}

impl PieceInstance {
    pub fn area(&self) -> fsize {
        self.width * self.height
    }
}

/// Expands every demand line into `quantity` separate instances, in demand order.
pub fn expand_demand(demand: &[Piece]) -> Vec<PieceInstance> {
    demand
        .iter()
        .enumerate()
        .flat_map(|(demand_id, piece)| {
            (0..piece.quantity).map(move |_| PieceInstance {
                demand_id,
                width: piece.width,
                height: piece.height,
            })
        })
        .collect_vec()
}

/// Checks that every demand line fits an empty stock sheet in at least one allowed orientation.
/// All instances of a line share its dimensions, so checking the line covers all of them.
pub fn validate_demand(
    spec: &StockSheetSpec,
    demand: &[Piece],
    allow_rotation: bool,
) -> Result<(), CutError> {
    match demand
        .iter()
        .find_position(|p| !spec.admits(p.width, p.height, allow_rotation))
    {
        Some((index, piece)) => Err(CutError::UnfittablePiece {
            index,
            width: piece.width,
            height: piece.height,
        }),
        None => Ok(()),
    }
}

/// Largest pieces first. Instances of equal area keep their demand order.
pub fn piece_placement_order(instances: Vec<PieceInstance>) -> Vec<PieceInstance> {
    instances
        .into_iter()
        .sorted_by_cached_key(|pi| Reverse(OrderedFloat(pi.area())))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demand() -> Vec<Piece> {
        vec![
            Piece::try_new(500.0, 500.0, 2).unwrap(),
            Piece::try_new(800.0, 1200.0, 1).unwrap(),
            Piece::try_new(250.0, 1000.0, 1).unwrap(),
        ]
    }

    #[test]
    fn expansion_keeps_demand_order() {
        let instances = expand_demand(&demand());
        assert_eq!(
            instances.iter().map(|pi| pi.demand_id).collect_vec(),
            vec![0, 0, 1, 2]
        );
        assert!(expand_demand(&[]).is_empty());
    }

    #[test]
    fn order_is_descending_area_and_stable() {
        let order = piece_placement_order(expand_demand(&demand()));
        // 500x500 and 250x1000 have the same area, demand order decides
        assert_eq!(
            order.iter().map(|pi| pi.demand_id).collect_vec(),
            vec![1, 0, 0, 2]
        );
    }

    #[test]
    fn validation_reports_first_unfittable_line() {
        let spec = StockSheetSpec::try_new("CL6", 6, 3300.0, 2600.0).unwrap();
        let mut demand = demand();
        assert_eq!(validate_demand(&spec, &demand, true), Ok(()));

        demand.push(Piece::try_new(2000.0, 3000.0, 1).unwrap());
        demand.push(Piece::try_new(4000.0, 100.0, 1).unwrap());
        // fits when turned
        assert_eq!(validate_demand(&spec, &demand[..4], true), Ok(()));
        assert_eq!(
            validate_demand(&spec, &demand, false),
            Err(CutError::UnfittablePiece {
                index: 3,
                width: 2000.0,
                height: 3000.0
            })
        );
        assert_eq!(
            validate_demand(&spec, &demand, true),
            Err(CutError::UnfittablePiece {
                index: 4,
                width: 4000.0,
                height: 100.0
            })
        );
    }
}
