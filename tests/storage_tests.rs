/// Tests for storage and data-transfer price tables
use serde_json::json;
use slcat::catalog::{storage_prices, transfer_prices};
use slcat::models::{Location, StoragePackage};

fn location(dc: &str, group: Option<i64>) -> Location {
    Location {
        provider: "IBM".to_string(),
        dc: dc.to_string(),
        country: "US".to_string(),
        price_group_id: group,
    }
}

fn package(value: serde_json::Value) -> StoragePackage {
    serde_json::from_value(value).expect("storage fixture")
}

#[test]
fn test_storage_price_per_location_group() {
    let storage = package(json!({
        "capacityMinimum": "1",
        "capacityMaximum": "12000",
        "prices": [
            { "id": 1, "locationGroupId": 7, "usageRate": "0.10" },
            { "id": 2, "locationGroupId": 8, "usageRate": "0.12" }
        ]
    }));
    let locations = vec![location("ams03", Some(8)), location("dal13", Some(7))];
    let records = storage_prices(&storage, &locations).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].dc, "ams03");
    assert_eq!(records[0].price, 0.12);
    assert_eq!(records[0].product_type, "STORAGE_SPACE");
    assert_eq!(records[0].capacity_minimum, "1");
    assert_eq!(records[0].capacity_maximum, "12000");
    assert_eq!(records[1].dc, "dal13");
    assert_eq!(records[1].price, 0.10);
}

#[test]
fn test_missing_storage_price_is_fatal() {
    let storage = package(json!({
        "capacityMinimum": "1",
        "capacityMaximum": "12000",
        "prices": [{ "id": 1, "locationGroupId": 7, "usageRate": "0.10" }]
    }));
    let locations = vec![location("tok02", Some(99))];

    assert!(storage_prices(&storage, &locations).is_err());
}

#[test]
fn test_zero_storage_rate_is_fatal() {
    let storage = package(json!({
        "capacityMinimum": "1",
        "capacityMaximum": "12000",
        "prices": [{ "id": 1, "locationGroupId": 7, "usageRate": "0.00" }]
    }));
    let locations = vec![location("dal13", Some(7))];

    assert!(storage_prices(&storage, &locations).is_err());
}

#[test]
fn test_transfer_prices_use_metro_table() {
    let locations = vec![
        location("dal13", Some(7)),
        location("sao01", Some(8)),
        location("syd04", Some(9)),
    ];
    let records = transfer_prices(&locations);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].dc, "dal13");
    assert_eq!(records[0].price, 0.09);
    assert_eq!(records[1].price, 0.18);
    assert_eq!(records[2].price, 0.14);
    assert!(records.iter().all(|r| r.product_type == "DATA_TRANSFER"));
    assert!(records.iter().all(|r| r.start_range == 0));
}

#[test]
fn test_unknown_metro_bills_at_default_rate() {
    let records = transfer_prices(&[location("xyz01", None)]);
    assert_eq!(records[0].price, 0.09);
}
