use std::collections::BTreeMap;

use serde::Serialize;

/// Normalized per-preset pricing across datacenters.
///
/// `price` maps each datacenter code to the monthly price, or `null` where
/// the preset is not orderable (or no price resolved) — a missing price is
/// always an explicit null, never an omitted key.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PresetRecord {
    pub provider: String,
    pub product_type: String,
    pub instance_type: String,
    pub vcpu: String,
    pub memory: String,
    pub disk: String,
    pub price: BTreeMap<String, Option<f64>>,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    pub provider: String,
    pub region: String,
    pub country: String,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub provider: String,
    pub product_type: String,
    pub start_range: u32,
    pub dc: String,
    pub price: f64,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StorageRecord {
    pub provider: String,
    pub product_type: String,
    pub capacity_minimum: String,
    pub capacity_maximum: String,
    pub dc: String,
    pub price: f64,
}

/// A filtered OS image, with its capacity-tiered monthly license fees when
/// pricing was requested.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OsRecord {
    pub provider: String,
    pub product_type: String,
    pub description: String,
    pub category: String,
    pub reference_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<BTreeMap<String, f64>>,
}
