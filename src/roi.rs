//! Pure cost estimator for the comparison screen's savings block.

use crate::data::CompetitorRecord;
use crate::profile::{UserProfile, NO_SOLUTION};

/// Guardz list price per endpoint per month.
pub const GUARDZ_PRICE_PER_ENDPOINT: f64 = 2.50;

const DEFAULT_ENDPOINTS: u32 = 500;

/// Representative endpoint counts per client-base tier: midpoints for the
/// bounded ranges, fixed floor/ceiling values for the open-ended ones.
const ENDPOINT_MIDPOINTS: [(&str, u32); 4] = [
    ("Under 500 endpoints", 500),
    ("500-2,000 endpoints", 1250),
    ("2,000-5,000 endpoints", 3500),
    ("5,000+ endpoints", 7500),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiEstimate {
    pub endpoints: u32,
    pub competitor_price: f64,
    pub current_monthly_cost: f64,
    pub guardz_monthly_cost: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
}

pub fn endpoints_for(client_base_size: &str) -> u32 {
    ENDPOINT_MIDPOINTS
        .iter()
        .find(|(label, _)| *label == client_base_size)
        .map(|(_, count)| *count)
        .unwrap_or(DEFAULT_ENDPOINTS)
}

/// None when no competitor record matched or the prospect has no incumbent;
/// a savings claim needs something concrete to compare against.
///
/// Unparsable price text becomes NaN and flows through the arithmetic into
/// the rendered values instead of being masked as zero.
pub fn calculate_roi(
    competitor: Option<&CompetitorRecord>,
    profile: &UserProfile,
) -> Option<RoiEstimate> {
    let competitor = competitor?;
    if profile.current_solution == NO_SOLUTION {
        return None;
    }

    let endpoints = endpoints_for(&profile.client_base_size);
    let competitor_price = competitor
        .price_per_endpoint
        .trim()
        .parse::<f64>()
        .unwrap_or(f64::NAN);

    let current_monthly_cost = competitor_price * f64::from(endpoints);
    let guardz_monthly_cost = GUARDZ_PRICE_PER_ENDPOINT * f64::from(endpoints);
    let monthly_savings = current_monthly_cost - guardz_monthly_cost;

    Some(RoiEstimate {
        endpoints,
        competitor_price,
        current_monthly_cost,
        guardz_monthly_cost,
        monthly_savings,
        annual_savings: monthly_savings * 12.0,
    })
}
