//! Capacity-tiered OS license pricing.

use std::collections::BTreeMap;

use crate::error::CatalogError;
use crate::models::Price;

/// Map an OS item's flat price list into a capacity-tiered price table.
///
/// A single price becomes the unrestricted tier `"0"`; several become one
/// tier each, keyed by their capacity restriction maximum. Every OS item
/// must price at least one tier.
pub fn extract_tiers(
    software_description_id: i64,
    prices: &[Price],
) -> Result<BTreeMap<String, f64>, CatalogError> {
    let mut tiers = BTreeMap::new();
    match prices {
        [] => return Err(CatalogError::EmptyPriceList(software_description_id)),
        [only] => {
            tiers.insert("0".to_string(), only.monthly_fee()?);
        }
        many => {
            for price in many {
                let bound = price
                    .capacity_restriction_maximum
                    .clone()
                    .ok_or(CatalogError::MissingTierBound(price.id))?;
                tiers.insert(bound, price.monthly_fee()?);
            }
        }
    }
    Ok(tiers)
}
