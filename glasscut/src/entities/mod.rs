mod catalog;
mod free_space;
mod piece;
mod placed_piece;
mod sheet;
mod stats;
mod stock_sheet;

#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use free_space::BestFit;

#[doc(inline)]
pub use free_space::FreeRegion;

#[doc(inline)]
pub use free_space::FreeSpace;

#[doc(inline)]
pub use piece::Piece;

#[doc(inline)]
pub use placed_piece::PlacedPiece;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use stats::MaterialSummary;

#[doc(inline)]
pub use stats::SheetStats;

#[doc(inline)]
pub use stats::efficiency_pct;

#[doc(inline)]
pub use stock_sheet::StockSheetSpec;
