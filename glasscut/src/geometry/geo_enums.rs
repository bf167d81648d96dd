#[derive(Debug, PartialEq)]
/// Possible relations between two geometric entities A and B.
/// A is `GeoRelation` to B
pub enum GeoRelation {
    /// A ∩ B ≠ ∅ and neither A ⊆ B nor B ⊆ A
    Intersecting,
    /// A ⊆ B
    Enclosed,
    /// B ⊆ A
    Surrounding,
    /// A ∩ B = ∅
    Disjoint,
}

/// Orientation in which a piece is placed on a sheet.
/// Glass pieces are only ever turned by a quarter, which swaps width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Original,
    Rotated,
}

impl Orientation {
    /// Footprint of a `width` x `height` piece in this orientation
    pub fn footprint<T>(self, width: T, height: T) -> (T, T) {
        match self {
            Orientation::Original => (width, height),
            Orientation::Rotated => (height, width),
        }
    }

    pub fn is_rotated(self) -> bool {
        self == Orientation::Rotated
    }
}
