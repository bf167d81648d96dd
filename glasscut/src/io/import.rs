use crate::CutError;
use crate::entities::{Catalog, Piece};
use crate::io::ext_repr::{ExtCatalog, ExtPiece};

/// Builds a [`Catalog`] from its external representation.
/// Later entries overwrite earlier ones with the same code.
pub fn import_catalog(ext_catalog: &ExtCatalog) -> Result<Catalog, CutError> {
    let mut catalog = Catalog::new();
    for ext_sheet in &ext_catalog.stock_sheets {
        catalog.register(
            &ext_sheet.code,
            ext_sheet.thickness_mm,
            ext_sheet.width_mm,
            ext_sheet.height_mm,
        )?;
    }
    Ok(catalog)
}

/// Converts the demand lines of one material, rejecting malformed ones.
pub fn import_demand(ext_pieces: &[ExtPiece]) -> Result<Vec<Piece>, CutError> {
    ext_pieces
        .iter()
        .map(|ep| Piece::try_new(ep.width, ep.height, ep.quantity as usize))
        .collect()
}
