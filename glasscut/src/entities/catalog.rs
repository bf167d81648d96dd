use std::collections::BTreeMap;

use log::debug;

use crate::CutError;
use crate::entities::StockSheetSpec;
use crate::fsize;

/// Registry of the stock sheets available per material code.
/// Built once before packing, afterwards only read.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    sheets: BTreeMap<String, StockSheetSpec>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the stock sheet for `code`. A previous entry for the same code is overwritten.
    pub fn register(
        &mut self,
        code: &str,
        thickness_mm: u32,
        width: fsize,
        height: fsize,
    ) -> Result<&StockSheetSpec, CutError> {
        let spec = StockSheetSpec::try_new(code, thickness_mm, width, height)?;
        if let Some(prev) = self.sheets.insert(code.to_owned(), spec) {
            debug!("[CAT] overwriting stock sheet for {code}, previous: {prev:?}");
        }
        Ok(&self.sheets[code])
    }

    pub fn lookup(&self, code: &str) -> Result<&StockSheetSpec, CutError> {
        self.sheets
            .get(code)
            .ok_or_else(|| CutError::UnknownMaterial(code.to_owned()))
    }

    /// Registered material codes, in sorted order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
