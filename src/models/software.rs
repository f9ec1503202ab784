use serde::Deserialize;

/// One OS description from the VHD-import software listing.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareDescription {
    pub id: i64,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub reference_code: String,
    #[serde(default)]
    pub manufacturer: String,
}
