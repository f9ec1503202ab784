//! Datacenter-aware price resolution.
//!
//! The upstream catalog attaches location-group ids to price rows
//! inconsistently: sometimes the regional fee sits on a row with a
//! different price id, sometimes the only row has no location group at
//! all. Resolution is an ordered list of strategies with first-success
//! semantics; the fallback phases are preserved as observed upstream and
//! logged for manual review, not "fixed".

use crate::error::CatalogError;
use crate::models::Price;

/// Phase 1: a row matching both the price id and the location group.
fn exact_match<'a>(prices: &'a [Price], price_id: i64, group: Option<i64>) -> Option<&'a Price> {
    prices
        .iter()
        .find(|p| p.id == price_id && p.location_group_id == group)
}

/// Phase 2: any row carrying the target location group, regardless of its
/// own price id.
fn cross_entry_match<'a>(prices: &'a [Price], group: Option<i64>) -> Option<&'a Price> {
    prices.iter().find(|p| p.location_group_id == group)
}

/// Resolve the monthly price for `price_id` at `location_group`.
///
/// Returns `Ok(None)` when no row carries the price id at all — the caller
/// records a null price for the location instead of aborting. A fee that
/// fails to parse is a schema violation and aborts.
pub fn resolve_price(
    prices: &[Price],
    price_id: i64,
    location_group: Option<i64>,
) -> Result<Option<f64>, CatalogError> {
    // The id must be present somewhere for any phase to apply; its first
    // row doubles as the phase-3 location-independent fallback.
    let Some(anchor) = prices.iter().find(|p| p.id == price_id) else {
        return Ok(None);
    };

    if let Some(hit) = exact_match(prices, price_id, location_group) {
        return hit.monthly_fee().map(Some);
    }

    if let Some(hit) = cross_entry_match(prices, location_group) {
        tracing::warn!(
            price_id,
            ?location_group,
            resolved_id = hit.id,
            "price resolved via cross-entry row; review upstream catalog"
        );
        return hit.monthly_fee().map(Some);
    }

    tracing::warn!(
        price_id,
        ?location_group,
        "price resolved via location-independent row; review upstream catalog"
    );
    anchor.monthly_fee().map(Some)
}
