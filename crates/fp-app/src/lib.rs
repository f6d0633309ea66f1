//! Shared application service layer for footprint.
//!
//! This crate gives the CLI and the GUI one interface: the input-collection
//! boundary, factor table loading, single-trigger evaluation and the result
//! report both frontends render.

pub mod calc_service;
pub mod error;
pub mod factor_service;
pub mod input_service;
pub mod report;

// Re-export key types for convenience
pub use calc_service::{CalcRequest, evaluate};
pub use error::{AppError, AppResult};
pub use factor_service::{
    CountrySummary, list_countries, load_factor_table, write_factor_table, write_reference_table,
};
pub use input_service::{
    InputError, InputField, InputRanges, RawInputs, clamp_inputs, collect_inputs, select_country,
};
pub use report::{
    CategoryFigure, ChartKind, ChartPoint, ChartSpec, Report, VALUE_AXIS_LABEL, format_kg,
    format_tonnes,
};
