use crate::fsize;
use crate::geometry::geo_enums::Orientation;
use crate::geometry::primitives::Rect;

/// Axis-aligned part of a sheet which has not been assigned to a piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeRegion {
    pub x: fsize,
    pub y: fsize,
    pub width: fsize,
    pub height: fsize,
}

impl FreeRegion {
    pub fn new(x: fsize, y: fsize, width: fsize, height: fsize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> fsize {
        self.width * self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }

    /// True if a footprint of `width` x `height` fits inside the region
    pub fn admits(&self, width: fsize, height: fsize) -> bool {
        width <= self.width && height <= self.height
    }
}

/// Outcome of [`FreeSpace::find_best_fit`]: where and how a piece should be placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestFit {
    /// Index of the chosen region in [`FreeSpace::regions`]
    pub region_index: usize,
    pub region: FreeRegion,
    pub orientation: Orientation,
    /// Area of the region left unused by the piece
    pub waste: fsize,
}

/// Tracks the unused regions of a single sheet.
///
/// Regions are carved with a guillotine split and are never merged or pruned,
/// so free space becomes fragmented as pieces are added.
/// Callers must not rely on the regions being disjoint or maximal.
#[derive(Clone, Debug)]
pub struct FreeSpace {
    regions: Vec<FreeRegion>,
}

impl FreeSpace {
    /// A single free region covering a `width` x `height` sheet
    pub fn new(width: fsize, height: fsize) -> Self {
        Self {
            regions: vec![FreeRegion::new(0.0, 0.0, width, height)],
        }
    }

    pub fn regions(&self) -> &[FreeRegion] {
        &self.regions
    }

    /// Searches all free regions for the placement of a `width` x `height` piece which leaves the least waste.
    /// A quarter turn is only considered if `rotation_allowed` and the piece is not square.
    ///
    /// Ties are resolved in favor of the first region in list order, and within a region
    /// in favor of the original orientation.
    pub fn find_best_fit(
        &self,
        width: fsize,
        height: fsize,
        rotation_allowed: bool,
    ) -> Option<BestFit> {
        let piece_area = width * height;
        let consider_rotation = rotation_allowed && width != height;

        let mut best: Option<BestFit> = None;

        for (region_index, region) in self.regions.iter().enumerate() {
            let waste = region.area() - piece_area;

            let orientations = [
                (Orientation::Original, region.admits(width, height)),
                (
                    Orientation::Rotated,
                    consider_rotation && region.admits(height, width),
                ),
            ];

            for (orientation, fits) in orientations {
                let improves = match &best {
                    Some(b) => waste < b.waste,
                    None => true,
                };
                if fits && improves {
                    best = Some(BestFit {
                        region_index,
                        region: *region,
                        orientation,
                        waste,
                    });
                }
            }
        }

        best
    }

    /// Commits a `width` x `height` piece to the region selected by `fit` and returns its footprint.
    ///
    /// The region is replaced by at most two new ones: a column to the right of the footprint
    /// spanning the full height of the region, and a row below the footprint spanning its width.
    pub fn place(&mut self, fit: &BestFit, width: fsize, height: fsize) -> Rect {
        let region = self.regions.remove(fit.region_index);
        debug_assert_eq!(region, fit.region, "best fit is outdated");

        let (fp_width, fp_height) = fit.orientation.footprint(width, height);
        debug_assert!(region.admits(fp_width, fp_height));

        if fp_width < region.width {
            self.regions.push(FreeRegion::new(
                region.x + fp_width,
                region.y,
                region.width - fp_width,
                region.height,
            ));
        }
        if fp_height < region.height {
            self.regions.push(FreeRegion::new(
                region.x,
                region.y + fp_height,
                fp_width,
                region.height - fp_height,
            ));
        }

        Rect::from_origin_size(region.x, region.y, fp_width, fp_height)
    }
}
