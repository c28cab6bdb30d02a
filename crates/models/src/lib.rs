use serde::{Deserialize, Serialize};

// Request models
fn default_years() -> i32 {
	5
}

/// Body of POST /api/calculate. Missing cost fields count as zero and a
/// missing horizon defaults to five years; a present-but-mistyped field is
/// a decode failure, not a default.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
	#[serde(default)]
	pub capex: f64,
	#[serde(default)]
	pub opex_monthly: f64,
	#[serde(default = "default_years")]
	pub years: i32,
}

// Response models
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CalculationResult {
	pub years: Vec<i32>,
	pub capex_values: Vec<f64>,
	pub opex_values: Vec<f64>,
	pub break_even_year: Option<i32>,
	pub total_capex: f64,
	pub total_opex: f64,
	pub difference: f64,
}
