use serde::{Deserialize, Serialize};

/// Hint attached to a recommendation that had no price signal.
pub const NO_PRICED_COMPS_NOTE: &str =
    "If comps have no prices, refine query or use item model name.";

/// Suggested listing price and the margin it implies. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub market_avg_price: Option<f64>,
    pub market_median_price: Option<f64>,
    /// Falls back to `0.0`, never null, so the fee and profit figures stay numeric.
    pub suggested_list_price: f64,
    pub estimated_fees: f64,
    pub estimated_profit: f64,
    /// Number of comps that carried a usable price.
    pub comps_used: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
