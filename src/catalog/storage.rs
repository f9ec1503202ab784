//! Block-storage pricing per datacenter.

use crate::error::CatalogError;
use crate::models::{Location, StoragePackage, StorageRecord, PROVIDER};

/// One storage price record per canonical location, from the package price
/// row matching the location's price group.
///
/// A location that resolves to no row, or to a zero rate, means the price
/// group mapping has drifted; the whole listing aborts rather than emit a
/// free datacenter.
pub fn storage_prices(
    storage: &StoragePackage,
    locations: &[Location],
) -> Result<Vec<StorageRecord>, CatalogError> {
    let mut records = Vec::new();

    for location in locations {
        let row = storage
            .prices
            .iter()
            .find(|p| p.location_group_id == location.price_group_id);
        let rate = match row {
            Some(price) => price.usage_rate()?,
            None => 0.0,
        };
        if rate <= 0.0 {
            return Err(CatalogError::MissingStoragePrice(location.dc.clone()));
        }

        records.push(StorageRecord {
            provider: PROVIDER.to_string(),
            product_type: "STORAGE_SPACE".to_string(),
            capacity_minimum: storage.capacity_minimum.clone().unwrap_or_default(),
            capacity_maximum: storage.capacity_maximum.clone().unwrap_or_default(),
            dc: location.dc.clone(),
            price: rate,
        });
    }

    Ok(records)
}
