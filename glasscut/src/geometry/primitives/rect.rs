use crate::fsize;
use crate::geometry::geo_enums::GeoRelation;
use crate::util::FPA;

///Axis-aligned rectangle.
///Sheet coordinates: `x` grows to the right, `y` grows downwards from the top-left corner of the sheet.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: fsize,
    pub y_min: fsize,
    pub x_max: fsize,
    pub y_max: fsize,
}

impl Rect {
    pub fn new(x_min: fsize, y_min: fsize, x_max: fsize, y_max: fsize) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Rectangle with its top-left corner at (`x`, `y`)
    pub fn from_origin_size(x: fsize, y: fsize, width: fsize, height: fsize) -> Self {
        Rect::new(x, y, x + width, y + height)
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Rectangles which only share an edge are considered [`GeoRelation::Disjoint`].
    pub fn relation_to(&self, other: Rect) -> GeoRelation {
        if !self.overlaps(&other) {
            return GeoRelation::Disjoint;
        }
        if self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
        {
            return GeoRelation::Surrounding;
        }
        if self.x_min >= other.x_min
            && self.y_min >= other.y_min
            && self.x_max <= other.x_max
            && self.y_max <= other.y_max
        {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Returns the [`GeoRelation`] between `self` and another [`Rect`], with a tolerance for floating point precision.
    /// In edge cases, this method will lean towards `Surrounding` and `Enclosed` instead of `Intersecting`.
    pub fn almost_relation_to(&self, other: Rect) -> GeoRelation {
        if !self.almost_overlaps(&other) {
            return GeoRelation::Disjoint;
        }
        if FPA::from(self.x_min) <= FPA::from(other.x_min)
            && FPA::from(self.y_min) <= FPA::from(other.y_min)
            && FPA::from(self.x_max) >= FPA::from(other.x_max)
            && FPA::from(self.y_max) >= FPA::from(other.y_max)
        {
            return GeoRelation::Surrounding;
        }
        if FPA::from(self.x_min) >= FPA::from(other.x_min)
            && FPA::from(self.y_min) >= FPA::from(other.y_min)
            && FPA::from(self.x_max) <= FPA::from(other.x_max)
            && FPA::from(self.y_max) <= FPA::from(other.y_max)
        {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// True if the interiors of both rectangles intersect, touching edges do not count.
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        fsize::max(self.x_min, other.x_min) < fsize::min(self.x_max, other.x_max)
            && fsize::max(self.y_min, other.y_min) < fsize::min(self.y_max, other.y_max)
    }

    /// Same as [`Rect::overlaps`], but slivers within floating point tolerance do not count.
    #[inline(always)]
    pub fn almost_overlaps(&self, other: &Rect) -> bool {
        FPA(fsize::max(self.x_min, other.x_min)) < FPA(fsize::min(self.x_max, other.x_max))
            && FPA(fsize::max(self.y_min, other.y_min)) < FPA(fsize::min(self.y_max, other.y_max))
    }

    pub fn width(&self) -> fsize {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> fsize {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> fsize {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }
}
