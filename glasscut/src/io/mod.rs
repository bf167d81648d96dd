/// External representations of catalogs, demand and solutions
pub mod ext_repr;

/// Exporting sheets and their statistics to their external representation
pub mod export;

/// Importing external catalogs and demand into the library
pub mod import;

/// Rendering sheets as SVG documents
pub mod svg;
