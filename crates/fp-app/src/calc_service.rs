//! One explicit "calculate" trigger: check the form, compute, build the report.

use fp_calc::{RoundingPolicy, compute_with};
use fp_factors::FactorTable;

use crate::error::AppResult;
use crate::input_service::{InputRanges, RawInputs, collect_inputs, select_country};
use crate::report::Report;

/// Everything one form submission carries.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcRequest<'a> {
    pub country: &'a str,
    pub raw: RawInputs,
    pub policy: RoundingPolicy,
}

/// Validate the request at the input boundary, then run the calculator.
///
/// Nothing is kept between calls; each request is evaluated from scratch
/// against the table it is given.
pub fn evaluate(
    table: &FactorTable,
    ranges: &InputRanges,
    request: &CalcRequest<'_>,
) -> AppResult<Report> {
    let country = select_country(table, request.country)?;
    let inputs = collect_inputs(&request.raw, ranges)?;
    let result = compute_with(country, &inputs, table, request.policy)?;

    tracing::info!(country, total = result.total, "calculation complete");

    Ok(Report::build(country, inputs, request.policy, result, table))
}
