use crate::CutError;
use crate::fsize;
use crate::geometry::primitives::Rect;

/// Dimensions of the raw sheets stocked for one material code.
#[derive(Clone, Debug, PartialEq)]
pub struct StockSheetSpec {
    /// Material code, e.g. `CL6`
    pub code: String,
    pub thickness_mm: u32,
    pub width: fsize,
    pub height: fsize,
}

impl StockSheetSpec {
    pub fn try_new(
        code: impl Into<String>,
        thickness_mm: u32,
        width: fsize,
        height: fsize,
    ) -> Result<Self, CutError> {
        let code = code.into();
        let invalid = |reason: String| CutError::InvalidSpec {
            code: code.clone(),
            reason,
        };
        if thickness_mm == 0 {
            return Err(invalid("thickness must be positive".into()));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(invalid(format!("width must be positive, got {width}")));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(invalid(format!("height must be positive, got {height}")));
        }
        Ok(Self {
            code,
            thickness_mm,
            width,
            height,
        })
    }

    pub fn area(&self) -> fsize {
        self.width * self.height
    }

    pub fn bbox(&self) -> Rect {
        Rect::from_origin_size(0.0, 0.0, self.width, self.height)
    }

    /// True if a `width` x `height` piece fits an empty sheet, turned a quarter if `allow_rotation` is set.
    pub fn admits(&self, width: fsize, height: fsize, allow_rotation: bool) -> bool {
        let upright = width <= self.width && height <= self.height;
        let rotated = allow_rotation && height <= self.width && width <= self.height;
        upright || rotated
    }
}
