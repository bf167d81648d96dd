use crate::CutError;
use crate::fsize;

/// One line of demand: `quantity` identical pieces of `width` x `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub width: fsize,
    pub height: fsize,
    pub quantity: usize,
}

impl Piece {
    pub fn try_new(width: fsize, height: fsize, quantity: usize) -> Result<Self, CutError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(CutError::MalformedDemand(format!(
                "piece dimensions must be positive, got {width}x{height}"
            )));
        }
        if quantity == 0 {
            return Err(CutError::MalformedDemand(format!(
                "quantity of piece {width}x{height} must be positive"
            )));
        }
        Ok(Self {
            width,
            height,
            quantity,
        })
    }

    pub fn area(&self) -> fsize {
        self.width * self.height
    }
}
