use serde::Deserialize;

/// A raw datacenter record as returned by the location listing, before
/// group filtering and metro deduplication.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Datacenter {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<LocationGroup>,
    #[serde(default)]
    pub price_groups: Vec<PriceGroup>,
    #[serde(default)]
    pub regions: Vec<RegionDescription>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroup {
    pub location_group_type: LocationGroupType,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroupType {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PriceGroup {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegionDescription {
    pub description: String,
}
