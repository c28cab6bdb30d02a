use models::{CalculationRequest, CalculationResult};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid input values")]
    InvalidValues,
}

/// Compare a one-time CapEx against cumulative monthly OpEx over a horizon
/// of `years` years.
///
/// CapEx is held constant across the series as a flat reference line, not
/// amortized. Each OpEx element is the cumulative spend through that year,
/// computed directly as `opex_monthly * 12 * year` rather than as a running
/// sum. The break-even year is the first year whose cumulative OpEx meets
/// or exceeds CapEx; equality counts.
///
/// Inputs are validated up front: negative costs or a non-positive horizon
/// fail with `EngineError::InvalidValues` before any series is built.
pub fn compute(
    capex: f64,
    opex_monthly: f64,
    years: i32,
) -> Result<CalculationResult, EngineError> {
    if capex < 0.0 || opex_monthly < 0.0 || years <= 0 {
        return Err(EngineError::InvalidValues);
    }

    let years_list: Vec<i32> = (1..=years).collect();
    let capex_values = vec![capex; years_list.len()];
    let opex_values: Vec<f64> = years_list
        .iter()
        .map(|year| opex_monthly * 12.0 * f64::from(*year))
        .collect();

    let break_even_year = years_list
        .iter()
        .zip(opex_values.iter())
        .find(|(_, opex)| **opex >= capex)
        .map(|(year, _)| *year);

    let total_capex = capex;
    // Guarded for an empty series even though validation rules it out
    let total_opex = opex_values.last().copied().unwrap_or(0.0);
    let difference = total_opex - total_capex;

    Ok(CalculationResult {
        years: years_list,
        capex_values,
        opex_values,
        break_even_year,
        total_capex,
        total_opex,
        difference,
    })
}

/// Run the analysis straight off a decoded request body.
pub fn compute_request(request: &CalculationRequest) -> Result<CalculationResult, EngineError> {
    compute(request.capex, request.opex_monthly, request.years)
}
