//! Packing of rectangular glass pieces onto stock sheets.
//!
//! The library contains the shared components: the material [`Catalog`](entities::Catalog),
//! the per-sheet [`FreeSpace`](entities::FreeSpace) tracker with its best-fit search,
//! [`Sheet`](entities::Sheet)s and the statistics derived from them.
//! Driving the placement over multiple sheets is left to an optimizer (see the `gbf` crate).

/// Entities to model the glass cutting problem
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// Importing demand and catalogs into, and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::CutError;

/// Floating point type used for all lengths and areas (millimetres)
#[allow(non_camel_case_types)]
pub type fsize = f64;
