pub mod geo_enums;
pub mod primitives;
