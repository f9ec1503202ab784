use serde::Deserialize;

use super::price::Price;

/// A purchasable product component from the package item listing.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_category: ItemCategory,
    #[serde(default)]
    pub software_description_id: Option<i64>,
    #[serde(default)]
    pub prices: Vec<Price>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    pub category_code: String,
}

impl Item {
    pub fn category_code(&self) -> &str {
        &self.item_category.category_code
    }

    /// Whether any price row on this item carries the given price id.
    pub fn carries_price(&self, price_id: i64) -> bool {
        self.prices.iter().any(|p| p.id == price_id)
    }
}
