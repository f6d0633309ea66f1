//! fp-calc: annual carbon footprint from four lifestyle inputs.
//!
//! The whole calculation is one pure function:
//!
//! 1. annualize each input (365 days, 12 months, 365 days, 52 weeks)
//! 2. multiply by the country's emission factor (kg CO2e)
//! 3. convert to tonnes and round each category to two decimals
//! 4. sum the rounded categories and round the total again
//!
//! The factor table is passed in explicitly; nothing is looked up globally.
//!
//! # Example
//!
//! ```
//! use fp_calc::{Inputs, compute};
//! use fp_factors::FactorTable;
//!
//! let table = FactorTable::reference();
//! let inputs = Inputs {
//!     distance_km_per_day: 10.0,
//!     electricity_kwh_per_month: 100.0,
//!     waste_kg_per_week: 5.0,
//!     meals_per_day: 2,
//! };
//! let result = compute("India", &inputs, &table).unwrap();
//! assert_eq!(result.total, 2.43);
//! ```

pub mod calculator;
pub mod category;
pub mod error;
pub mod inputs;
pub mod result;

pub use calculator::{CategoryKg, compute, compute_with};
pub use category::Category;
pub use error::{CalcError, CalcResult};
pub use inputs::{AnnualizedInputs, Inputs};
pub use result::{EmissionsResult, RoundingPolicy};
