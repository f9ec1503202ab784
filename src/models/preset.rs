use serde::Deserialize;

/// A raw instance-type preset from the product package listing.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub key_name: String,
    #[serde(default)]
    pub package: Option<PresetPackage>,
    #[serde(default)]
    pub compute_group: Option<ComputeGroup>,
    #[serde(default)]
    pub locations: Vec<PresetLocation>,
    #[serde(default)]
    pub configuration: Vec<PresetConfigEntry>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PresetPackage {
    pub key_name: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComputeGroup {
    pub key_name: String,
}

/// A datacenter the preset is restricted to. An empty restriction list
/// means the preset is orderable everywhere.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PresetLocation {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfigEntry {
    pub category: ConfigCategory,
    pub price: ConfigPrice,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfigCategory {
    pub category_code: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPrice {
    pub id: i64,
}

impl Preset {
    pub fn package_key(&self) -> Option<&str> {
        self.package.as_ref().map(|p| p.key_name.as_str())
    }
}
