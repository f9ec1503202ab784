//! Outbound data-transfer pricing, fixed per metro.

use crate::models::{Location, TransferRecord, PROVIDER};

/// Per-GB transfer rates by metro prefix. Metros not listed bill at the
/// `dal` rate.
const TRANSFER_RATES: [(&str, f64); 18] = [
    ("dal", 0.09),
    ("mon", 0.09),
    ("tor", 0.09),
    ("mex", 0.18),
    ("ams", 0.09),
    ("lon", 0.09),
    ("fra", 0.09),
    ("par", 0.12),
    ("mil", 0.12),
    ("osl", 0.14),
    ("seo", 0.12),
    ("sng", 0.12),
    ("hkg", 0.14),
    ("tok", 0.14),
    ("mel", 0.14),
    ("syd", 0.14),
    ("sao", 0.18),
    ("che", 0.18),
];

const DEFAULT_METRO: &str = "dal";

fn rate_for_metro(prefix: &str) -> f64 {
    let lookup = |target: &str| {
        TRANSFER_RATES
            .iter()
            .find(|(metro, _)| *metro == target)
            .map(|(_, rate)| *rate)
    };
    match lookup(prefix) {
        Some(rate) => rate,
        None => lookup(DEFAULT_METRO).unwrap_or(0.0),
    }
}

/// One transfer price record per canonical location.
pub fn transfer_prices(locations: &[Location]) -> Vec<TransferRecord> {
    locations
        .iter()
        .map(|location| TransferRecord {
            provider: PROVIDER.to_string(),
            product_type: "DATA_TRANSFER".to_string(),
            start_range: 0,
            dc: location.dc.clone(),
            price: rate_for_metro(location.metro_prefix()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_metro_rates() {
        assert_eq!(rate_for_metro("dal"), 0.09);
        assert_eq!(rate_for_metro("sao"), 0.18);
        assert_eq!(rate_for_metro("tok"), 0.14);
        assert_eq!(rate_for_metro("seo"), 0.12);
    }

    #[test]
    fn test_unknown_metro_falls_back_to_dal() {
        assert_eq!(rate_for_metro("xyz"), 0.09);
    }
}
