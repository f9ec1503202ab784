/// Tests for preset aggregation across datacenters
use once_cell::sync::Lazy;
use serde_json::json;
use slcat::catalog::aggregate_presets;
use slcat::models::{Item, Location, Preset};

const PACKAGE: &str = "PUBLIC_CLOUD_SERVER";

// Three component items, each pricing its category at 0.05/hr (36.0/month)
// for location group 7.
static ITEMS: Lazy<Vec<Item>> = Lazy::new(|| {
    serde_json::from_value(json!([
        {
            "itemCategory": { "categoryCode": "guest_core" },
            "prices": [{ "id": 100, "locationGroupId": 7, "hourlyRecurringFee": "0.05" }]
        },
        {
            "itemCategory": { "categoryCode": "ram" },
            "prices": [{ "id": 200, "locationGroupId": 7, "hourlyRecurringFee": "0.05" }]
        },
        {
            "itemCategory": { "categoryCode": "guest_disk0" },
            "prices": [{ "id": 300, "locationGroupId": 7, "hourlyRecurringFee": "0.05" }]
        }
    ]))
    .expect("items fixture")
});

fn dal13() -> Location {
    Location {
        provider: "IBM".to_string(),
        dc: "dal13".to_string(),
        country: "US".to_string(),
        price_group_id: Some(7),
    }
}

fn ams03() -> Location {
    Location {
        provider: "IBM".to_string(),
        dc: "ams03".to_string(),
        country: "NL".to_string(),
        price_group_id: Some(8),
    }
}

fn preset(key: &str, locations: serde_json::Value) -> Preset {
    serde_json::from_value(json!({
        "keyName": key,
        "package": { "keyName": PACKAGE },
        "computeGroup": { "keyName": "BALANCED" },
        "locations": locations,
        "configuration": [
            { "category": { "categoryCode": "guest_core" }, "price": { "id": 100 } },
            { "category": { "categoryCode": "ram" }, "price": { "id": 200 } },
            { "category": { "categoryCode": "guest_disk0" }, "price": { "id": 300 } }
        ]
    }))
    .expect("preset fixture")
}

#[test]
fn test_sums_component_prices_per_datacenter() {
    let presets = vec![preset("B1_2X4X100", json!([]))];
    let records = aggregate_presets(&ITEMS, &presets, &[dal13()], PACKAGE).unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.instance_type, "B1.2X4X100");
    assert_eq!(record.vcpu, "2");
    assert_eq!(record.memory, "4");
    assert_eq!(record.disk, "100");
    assert_eq!(record.product_type, "BALANCED");
    // 3 categories at 36.0 each
    assert_eq!(record.price.get("dal13"), Some(&Some(108.0)));
}

#[test]
fn test_unsupported_location_is_null_not_zero() {
    let presets = vec![preset("B1_2X4X100", json!([{ "name": "dal13" }]))];
    let records = aggregate_presets(&ITEMS, &presets, &[ams03(), dal13()], PACKAGE).unwrap();

    let record = &records[0];
    // The key must be present and explicitly null.
    assert_eq!(record.price.get("ams03"), Some(&None));
    assert_eq!(record.price.get("dal13"), Some(&Some(108.0)));
}

#[test]
fn test_preset_priced_nowhere_is_dropped() {
    // Restricted to a datacenter that is not in the canonical list.
    let presets = vec![preset("B1_2X4X100", json!([{ "name": "wdc04" }]))];
    let records = aggregate_presets(&ITEMS, &presets, &[dal13()], PACKAGE).unwrap();

    assert!(records.is_empty());
}

#[test]
fn test_records_are_sorted_by_instance_type() {
    let presets = vec![
        preset("B1_2X4X100", json!([])),
        preset("AC1_1X2X25", json!([])),
    ];
    let records = aggregate_presets(&ITEMS, &presets, &[dal13()], PACKAGE).unwrap();

    let keys: Vec<&str> = records.iter().map(|r| r.instance_type.as_str()).collect();
    assert_eq!(keys, vec!["AC1.1X2X25", "B1.2X4X100"]);
}

#[test]
fn test_other_package_presets_are_ignored() {
    let mut other: Preset = preset("B1_2X4X100", json!([]));
    other.package = serde_json::from_value(json!({ "keyName": "BARE_METAL_SERVER" })).ok();

    let records = aggregate_presets(&ITEMS, &[other], &[dal13()], PACKAGE).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_malformed_preset_key_is_fatal() {
    let presets = vec![preset("NOSEGMENTS", json!([]))];
    assert!(aggregate_presets(&ITEMS, &presets, &[dal13()], PACKAGE).is_err());
}

#[test]
fn test_fewer_than_three_categories_is_fatal() {
    let thin: Preset = serde_json::from_value(json!({
        "keyName": "B1_2X4X100",
        "package": { "keyName": PACKAGE },
        "computeGroup": { "keyName": "BALANCED" },
        "locations": [],
        "configuration": [
            { "category": { "categoryCode": "guest_core" }, "price": { "id": 100 } },
            { "category": { "categoryCode": "ram" }, "price": { "id": 200 } }
        ]
    }))
    .unwrap();

    assert!(aggregate_presets(&ITEMS, &[thin], &[dal13()], PACKAGE).is_err());
}

#[test]
fn test_unrecognized_categories_do_not_count() {
    // Four configuration entries, but only two recognized categories.
    let padded: Preset = serde_json::from_value(json!({
        "keyName": "B1_2X4X100",
        "package": { "keyName": PACKAGE },
        "computeGroup": { "keyName": "BALANCED" },
        "locations": [],
        "configuration": [
            { "category": { "categoryCode": "guest_core" }, "price": { "id": 100 } },
            { "category": { "categoryCode": "ram" }, "price": { "id": 200 } },
            { "category": { "categoryCode": "os" }, "price": { "id": 400 } },
            { "category": { "categoryCode": "bandwidth" }, "price": { "id": 500 } }
        ]
    }))
    .unwrap();

    assert!(aggregate_presets(&ITEMS, &[padded], &[dal13()], PACKAGE).is_err());
}

#[test]
fn test_dangling_price_reference_is_fatal() {
    let dangling: Preset = serde_json::from_value(json!({
        "keyName": "B1_2X4X100",
        "package": { "keyName": PACKAGE },
        "computeGroup": { "keyName": "BALANCED" },
        "locations": [],
        "configuration": [
            { "category": { "categoryCode": "guest_core" }, "price": { "id": 999 } },
            { "category": { "categoryCode": "ram" }, "price": { "id": 200 } },
            { "category": { "categoryCode": "guest_disk0" }, "price": { "id": 300 } }
        ]
    }))
    .unwrap();

    assert!(aggregate_presets(&ITEMS, &[dangling], &[dal13()], PACKAGE).is_err());
}
