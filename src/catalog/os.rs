//! OS image catalog normalization.

use crate::error::CatalogError;
use crate::models::{Item, OsRecord, SoftwareDescription, PROVIDER};

use super::{filters, tiers};

const OS_CATEGORY_CODE: &str = "os";

// The portal files Windows images under the vendor name.
fn normalize_category(manufacturer: &str) -> String {
    if manufacturer == "Microsoft" {
        "Windows".to_string()
    } else {
        manufacturer.to_string()
    }
}

fn find_os_item<'a>(items: &'a [Item], software_description_id: i64) -> Option<&'a Item> {
    items.iter().find(|item| {
        item.software_description_id == Some(software_description_id)
            && item.category_code() == OS_CATEGORY_CODE
    })
}

/// Normalize the importable OS descriptions into catalog records.
///
/// With `items` present, each surviving description is joined to its OS
/// item for tier pricing (descriptions with no matching item are dropped)
/// and the result is sorted by reference code descending, newest releases
/// first. An empty result either way means the upstream catalog has
/// drifted.
pub fn normalize_os_catalog(
    descriptions: &[SoftwareDescription],
    items: Option<&[Item]>,
) -> Result<Vec<OsRecord>, CatalogError> {
    let mut records = Vec::new();

    for description in descriptions {
        if !filters::is_allowed(&description.long_description, &description.reference_code) {
            continue;
        }

        let tier = match items {
            None => None,
            Some(items) => {
                let Some(item) = find_os_item(items, description.id) else {
                    continue;
                };
                Some(tiers::extract_tiers(description.id, &item.prices)?)
            }
        };

        records.push(OsRecord {
            provider: PROVIDER.to_string(),
            product_type: "OS_IMAGE".to_string(),
            description: description.long_description.clone(),
            category: normalize_category(&description.manufacturer),
            reference_code: description.reference_code.clone(),
            tier,
        });
    }

    if items.is_some() {
        records.sort_by(|a, b| b.reference_code.cmp(&a.reference_code));
    }

    if records.is_empty() {
        return Err(CatalogError::EmptyOsCatalog);
    }
    Ok(records)
}
