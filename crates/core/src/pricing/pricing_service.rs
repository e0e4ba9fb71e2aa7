use crate::items::Item;
use crate::pricing::pricing_model::{Recommendation, NO_PRICED_COMPS_NOTE};
use furnflip_comps::CompListing;

/// Price an item against its comps.
///
/// Only comps with a finite, strictly positive price count. With none left
/// the suggested price is `0.0` and the profit is minus the cost basis.
pub fn recommend(item: &Item, comps: &[CompListing]) -> Recommendation {
    let prices: Vec<f64> = comps
        .iter()
        .filter_map(|c| c.price)
        .filter(|p| p.is_finite() && *p > 0.0)
        .collect();

    let market_avg_price = mean(&prices);
    let market_median_price = median(&prices);

    let suggested_list_price = market_median_price.unwrap_or(0.0);
    let estimated_fees = item.fees_pct / 100.0 * suggested_list_price;
    let estimated_profit = suggested_list_price - (item.cost_basis() + estimated_fees);

    Recommendation {
        market_avg_price,
        market_median_price,
        suggested_list_price,
        estimated_fees,
        estimated_profit,
        comps_used: prices.len(),
        note: prices
            .is_empty()
            .then(|| NO_PRICED_COMPS_NOTE.to_string()),
    }
}

/// Arithmetic mean; `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median, averaging the two middle values of an even-sized sample.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
