use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::{Datacenter, Location, PROVIDER};

/// Group types that mark a datacenter as price-relevant.
const INCLUDED_GROUP_TYPES: [&str; 2] = ["PRICING", "REGIONAL"];
/// Price groups are matched on this name prefix.
const PRICE_GROUP_PREFIX: &str = "Location Group";

/// Build the canonical location list from the raw datacenter records.
///
/// Only locations in a PRICING or REGIONAL group survive. One location is
/// kept per 3-character metro prefix: records are walked in descending name
/// order, so dal13 shadows dal10 and dal05. The result is sorted ascending
/// by datacenter code, the iteration order every report depends on.
pub fn resolve_locations(mut datacenters: Vec<Datacenter>) -> Result<Vec<Location>, CatalogError> {
    datacenters.sort_by(|a, b| b.name.cmp(&a.name));

    let mut seen_metros = HashSet::new();
    let mut locations = Vec::new();

    for dc in datacenters {
        let priced = dc
            .groups
            .iter()
            .any(|g| INCLUDED_GROUP_TYPES.contains(&g.location_group_type.name.as_str()));
        if !priced {
            continue;
        }

        let metro: String = dc.name.chars().take(3).collect();
        if !seen_metros.insert(metro) {
            continue;
        }

        let region = dc
            .regions
            .first()
            .ok_or_else(|| CatalogError::MissingRegion(dc.name.clone()))?;
        let country = region
            .description
            .split('-')
            .nth(1)
            .ok_or_else(|| CatalogError::MalformedRegion(region.description.clone()))?
            .trim()
            .to_string();

        let price_group_id = dc
            .price_groups
            .iter()
            .find(|g| g.name.starts_with(PRICE_GROUP_PREFIX))
            .map(|g| g.id);
        if price_group_id.is_none() {
            tracing::debug!(dc = %dc.name, "datacenter carries no location-group price group");
        }

        locations.push(Location {
            provider: PROVIDER.to_string(),
            dc: dc.name,
            country,
            price_group_id,
        });
    }

    locations.sort_by(|a, b| a.dc.cmp(&b.dc));
    Ok(locations)
}
