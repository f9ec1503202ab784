//! Preset aggregation: compose per-component prices into one monthly price
//! per instance preset per datacenter.

use std::collections::BTreeMap;

use crate::error::CatalogError;
use crate::models::price::round2;
use crate::models::{ComponentCategory, Item, Location, Preset, PresetRecord, PROVIDER};

use super::prices::resolve_price;

/// Instance dimensions encoded in a preset key such as `B1_2X8X100`: the
/// second underscore segment is vCPUxMEMORYxDISK.
struct Dimensions {
    vcpu: String,
    memory: String,
    disk: String,
}

fn parse_dimensions(key: &str) -> Result<Dimensions, CatalogError> {
    let segment = key
        .split('_')
        .nth(1)
        .ok_or_else(|| CatalogError::MalformedPresetKey(key.to_string()))?;
    let mut parts = segment.split('X');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(vcpu), Some(memory), Some(disk)) => Ok(Dimensions {
            vcpu: vcpu.to_string(),
            memory: memory.to_string(),
            disk: disk.to_string(),
        }),
        _ => Err(CatalogError::MalformedPresetKey(key.to_string())),
    }
}

/// Extract the recognized category → price-id pairs from a preset's
/// configuration. Fewer than 3 of the 4 resolved categories signals a
/// catalog shape this aggregation no longer understands.
fn component_config(preset: &Preset) -> Result<BTreeMap<ComponentCategory, i64>, CatalogError> {
    let mut config = BTreeMap::new();
    for entry in &preset.configuration {
        if let Some(category) = ComponentCategory::from_code(&entry.category.category_code) {
            config.insert(category, entry.price.id);
        }
    }
    if config.len() < 3 {
        return Err(CatalogError::IncompleteConfiguration {
            key: preset.key_name.clone(),
            resolved: config.len(),
        });
    }
    Ok(config)
}

/// A preset with no declared locations is orderable everywhere.
fn preset_supports(preset: &Preset, dc: &str) -> bool {
    preset.locations.is_empty() || preset.locations.iter().any(|l| l.name == dc)
}

/// Normalize every preset of `package_key` into a per-datacenter price
/// record.
///
/// Locations where the preset is unavailable, or where a component price
/// cannot be resolved, carry an explicit null. Presets priced nowhere are
/// dropped. Output is sorted by normalized instance type.
pub fn aggregate_presets(
    items: &[Item],
    presets: &[Preset],
    locations: &[Location],
    package_key: &str,
) -> Result<Vec<PresetRecord>, CatalogError> {
    let mut records = Vec::new();

    for preset in presets {
        if preset.package_key() != Some(package_key) {
            continue;
        }

        let dimensions = parse_dimensions(&preset.key_name)?;
        let config = component_config(preset)?;

        let product_type = preset
            .compute_group
            .as_ref()
            .map(|g| g.key_name.clone())
            .ok_or_else(|| CatalogError::MissingComputeGroup(preset.key_name.clone()))?;

        // Each configured price id must live on an item of its category.
        let mut component_items: BTreeMap<ComponentCategory, &Item> = BTreeMap::new();
        for (&category, &price_id) in &config {
            let item = items
                .iter()
                .find(|it| it.category_code() == category.code() && it.carries_price(price_id))
                .ok_or(CatalogError::DanglingPriceReference {
                    category: category.code(),
                    price_id,
                })?;
            component_items.insert(category, item);
        }

        let mut price_map: BTreeMap<String, Option<f64>> = BTreeMap::new();
        let mut has_price = false;

        for location in locations {
            if !preset_supports(preset, &location.dc) {
                price_map.insert(location.dc.clone(), None);
                continue;
            }

            let mut total = 0.0;
            let mut complete = true;
            for (&category, &price_id) in &config {
                let resolved = resolve_price(
                    &component_items[&category].prices,
                    price_id,
                    location.price_group_id,
                )?;
                match resolved {
                    Some(fee) => total += fee,
                    None => {
                        tracing::warn!(
                            preset = %preset.key_name,
                            category = %category,
                            dc = %location.dc,
                            "component price unresolved; leaving location unpriced"
                        );
                        complete = false;
                        break;
                    }
                }
            }

            if complete {
                price_map.insert(location.dc.clone(), Some(round2(total)));
                has_price = true;
            } else {
                price_map.insert(location.dc.clone(), None);
            }
        }

        if !has_price {
            continue;
        }

        records.push(PresetRecord {
            provider: PROVIDER.to_string(),
            product_type,
            instance_type: preset.key_name.replace('_', "."),
            vcpu: dimensions.vcpu,
            memory: dimensions.memory,
            disk: dimensions.disk,
            price: price_map,
        });
    }

    records.sort_by(|a, b| a.instance_type.cmp(&b.instance_type));
    Ok(records)
}
