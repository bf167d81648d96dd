mod gbf_optimizer;
pub mod search;

#[doc(inline)]
pub use gbf_optimizer::{GBFOptimizer, MaterialOutcome};
