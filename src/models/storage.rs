use serde::Deserialize;

use super::price::Price;

/// The block-storage package item (one capacity bracket), whose price rows
/// are keyed by location group and carry a usage rate instead of an hourly
/// fee.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoragePackage {
    #[serde(default)]
    pub capacity_minimum: Option<String>,
    #[serde(default)]
    pub capacity_maximum: Option<String>,
    #[serde(default)]
    pub prices: Vec<Price>,
}
