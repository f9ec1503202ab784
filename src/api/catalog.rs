use crate::error::CatalogError;
use crate::models::{Datacenter, Item, Preset, StoragePackage};

use super::client::SlClient;

/// Product package carrying the public cloud server items and presets.
pub const CLOUD_SERVER_PACKAGE_ID: i64 = 835;
/// Product package carrying the block storage capacity items.
pub const STORAGE_PACKAGE_ID: i64 = 759;
/// Package key presets are filtered on.
pub const PUBLIC_CLOUD_PACKAGE: &str = "PUBLIC_CLOUD_SERVER";
/// Storage item key, fixed to the 2-IOPS-per-GB endurance bracket.
const STORAGE_KEY_NAME: &str = "STORAGE_SPACE_FOR_2_IOPS_PER_GB";

const ITEMS_MASK: &str = "mask[itemCategory, prices[capacityRestrictionMaximum]]";
const PRESETS_MASK: &str = "mask[locations,computeGroup,package,configuration[category,price]]";
const DATACENTERS_MASK: &str = "priceGroups, regions, groups";
const STORAGE_MASK: &str = "mask[prices]";

/// Load the item collection of the cloud server package.
pub async fn load_items(client: &SlClient) -> Result<Vec<Item>, CatalogError> {
    let endpoint = format!(
        "SoftLayer_Product_Package/{}/getItems.json",
        CLOUD_SERVER_PACKAGE_ID
    );
    let params = vec![("objectMask".to_string(), ITEMS_MASK.to_string())];
    let payload = client.get(&endpoint, &params).await?;
    serde_json::from_value(payload).map_err(|e| CatalogError::Decode {
        what: "package items",
        source: e,
    })
}

/// Load all presets belonging to the public cloud server package.
pub async fn load_presets(client: &SlClient) -> Result<Vec<Preset>, CatalogError> {
    let filter = serde_json::json!({
        "package": { "keyName": { "operation": PUBLIC_CLOUD_PACKAGE } }
    });
    let params = vec![
        ("objectMask".to_string(), PRESETS_MASK.to_string()),
        ("objectFilter".to_string(), filter.to_string()),
    ];
    let payload = client
        .get("SoftLayer_Product_Package_Preset/getAllObjects.json", &params)
        .await?;
    serde_json::from_value(payload).map_err(|e| CatalogError::Decode {
        what: "package presets",
        source: e,
    })
}

/// Load the raw datacenter listing with groups, price groups and regions.
pub async fn load_datacenters(client: &SlClient) -> Result<Vec<Datacenter>, CatalogError> {
    let params = vec![("objectMask".to_string(), DATACENTERS_MASK.to_string())];
    let payload = client
        .get("SoftLayer_Location_Datacenter/getDatacenters.json", &params)
        .await?;
    serde_json::from_value(payload).map_err(|e| CatalogError::Decode {
        what: "datacenters",
        source: e,
    })
}

/// Load the storage package item for the fixed endurance bracket.
pub async fn load_storage_package(client: &SlClient) -> Result<StoragePackage, CatalogError> {
    let filter = serde_json::json!({
        "items": { "keyName": { "operation": STORAGE_KEY_NAME } }
    });
    let endpoint = format!(
        "SoftLayer_Product_Package/{}/getItems.json",
        STORAGE_PACKAGE_ID
    );
    let params = vec![
        ("objectMask".to_string(), STORAGE_MASK.to_string()),
        ("objectFilter".to_string(), filter.to_string()),
    ];
    let payload = client.get(&endpoint, &params).await?;
    let mut packages: Vec<StoragePackage> =
        serde_json::from_value(payload).map_err(|e| CatalogError::Decode {
            what: "storage package",
            source: e,
        })?;
    if packages.is_empty() {
        return Err(CatalogError::MissingStoragePackage);
    }
    Ok(packages.remove(0))
}
