use glasscut::io::ext_repr::{ExtCatalog, ExtStockSheet};
use glasscut::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the GBF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GBFConfig {
    /// Stock sheets available per material code
    #[serde(default = "standard_catalog")]
    pub catalog: ExtCatalog,
    /// Whether pieces may be turned a quarter to fit a sheet
    #[serde(default = "enabled")]
    pub allow_rotation: bool,
    /// Write an SVG drawing for every sheet next to the solution
    #[serde(default = "enabled")]
    pub svg_export: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for GBFConfig {
    fn default() -> Self {
        Self {
            catalog: standard_catalog(),
            allow_rotation: true,
            svg_export: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

fn enabled() -> bool {
    true
}

/// Stock sheets stocked by the shop
pub fn standard_catalog() -> ExtCatalog {
    let sheet = |code: &str, thickness_mm, width_mm, height_mm| ExtStockSheet {
        code: code.to_owned(),
        thickness_mm,
        width_mm,
        height_mm,
    };
    ExtCatalog {
        stock_sheets: vec![
            sheet("CL3", 3, 2440.0, 1830.0),
            sheet("CL4", 4, 2440.0, 1830.0),
            sheet("CL6", 6, 3300.0, 2600.0),
            sheet("CL10", 10, 3600.0, 2600.0),
            sheet("HN6", 6, 3300.0, 2600.0),
            sheet("FIL6", 6, 3600.0, 2600.0),
        ],
    }
}
