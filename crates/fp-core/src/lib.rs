//! fp-core: stable foundation for footprint.
//!
//! Contains:
//! - units (uom mass type, tonne/kilogram conversion, annualization constants)
//! - numeric (Real + finite/non-negative checks + decimal rounding)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
