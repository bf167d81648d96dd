use crate::fsize;
use crate::geometry::geo_enums::Orientation;
use crate::geometry::primitives::Rect;

/// A piece that has been committed to a [`Sheet`](crate::entities::Sheet)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPiece {
    /// Index of the demand line the piece originates from
    pub demand_id: usize,
    /// Width as requested, before rotation
    pub width: fsize,
    /// Height as requested, before rotation
    pub height: fsize,
    pub orientation: Orientation,
    /// Position of the top-left corner of the footprint
    pub x: fsize,
    pub y: fsize,
}

impl PlacedPiece {
    pub fn rotated(&self) -> bool {
        self.orientation.is_rotated()
    }

    /// Width and height of the piece as it lies on the sheet
    pub fn footprint(&self) -> (fsize, fsize) {
        self.orientation.footprint(self.width, self.height)
    }

    pub fn bbox(&self) -> Rect {
        let (w, h) = self.footprint();
        Rect::from_origin_size(self.x, self.y, w, h)
    }

    /// Rotation does not change the area
    pub fn area(&self) -> fsize {
        self.width * self.height
    }
}
