use chrono::{DateTime, TimeZone, Utc};
use fuel_pricing::pricing::{
    check_conflicts, compare, find_active_price, format_price, gross_from_net, group_by_fuel_type,
    phase_at, resolve_active_prices, validate, ChangeDirection, PriceKey, PriceRecord, PriceStatus,
    ValidityPhase, VatRate,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[test]
fn net_price_to_display_and_change() {
    let gross = gross_from_net(5000, VatRate::STANDARD);
    assert_eq!(gross, 6000);
    assert_eq!(format_price(5000, false), "50.00 ₽");
    assert_eq!(format_price(gross, true), "60.00 ₽ (incl. VAT)");

    let change = compare(6000, 6300);
    assert_eq!(change.change_amount, 300);
    assert_eq!(change.change_percent, dec!(5.0));
    assert_eq!(change.direction, ChangeDirection::Up);
}

#[test]
fn rows_from_storage_decode_and_resolve() {
    let rows = r#"[
        {
            "id": "6f1c2a62-33a9-4c55-8c36-7d2f0b7b9a10",
            "fuel_type_id": "AI-95",
            "trading_point_id": "tp-1",
            "price_net": 5000,
            "vat_rate": "20",
            "price_gross": 6000,
            "valid_from": "2024-01-01T00:00:00Z",
            "valid_to": "2024-01-31T23:59:59Z",
            "status": "expired",
            "is_active": false
        },
        {
            "id": "0b7d8f0e-8d44-4a53-b0d9-1f7b7d1d2e3f",
            "fuel_type": {"code": "AI-95", "name": "Аи-95"},
            "trading_point_id": "tp-1",
            "price_net": 5250,
            "vat_rate": 20,
            "price_gross": 6300,
            "valid_from": "2024-02-01T00:00:00Z",
            "valid_to": null,
            "status": "active"
        },
        {
            "fuel_type_id": "DT",
            "trading_point_id": "tp-1",
            "price_gross": 7000,
            "valid_from": "2024-03-01T00:00:00Z",
            "status": "scheduled"
        }
    ]"#;

    let records: Vec<PriceRecord> = serde_json::from_str(rows).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].status, PriceStatus::Expired);
    assert!(!records[0].is_active);
    assert!(records[1].is_active);
    assert_eq!(records[1].vat_rate, Some(Decimal::from(20)));
    assert!(records[2].id.is_nil());
    assert_eq!(records[2].price_net, None);

    assert!(records.iter().all(|r| validate(r).is_valid));
    assert!(check_conflicts(&records).is_empty());

    let mid_january = find_active_price(&records, ymd(2024, 1, 15)).unwrap();
    assert_eq!(mid_january.price_gross, Some(6000));

    let active = resolve_active_prices(&records, ymd(2024, 3, 15));
    assert_eq!(active[&PriceKey::new("AI-95", "tp-1")].price_gross, Some(6300));
    assert_eq!(active[&PriceKey::new("DT", "tp-1")].price_gross, Some(7000));

    assert_eq!(phase_at(&records[0], ymd(2024, 3, 15)), ValidityPhase::Elapsed);
    assert_eq!(phase_at(&records[1], ymd(2024, 3, 15)), ValidityPhase::Current);
    assert_eq!(phase_at(&records[2], ymd(2024, 2, 15)), ValidityPhase::Upcoming);

    let groups = group_by_fuel_type(&records);
    assert_eq!(groups["AI-95"].len(), 2);
    assert_eq!(groups["DT"].len(), 1);
}

#[test]
fn scheduled_price_conflicting_with_open_ended_one() {
    let records = vec![
        PriceRecord::new("AI-92", "tp-7", ymd(2024, 1, 1)).with_gross(5500),
        PriceRecord::new("AI-92", "tp-7", ymd(2024, 4, 1)).with_gross(5600),
        PriceRecord::new("AI-92", "tp-8", ymd(2024, 4, 1)).with_gross(5650),
    ];

    let conflicts = check_conflicts(&records);
    assert_eq!(conflicts.len(), 1);
    assert_eq!((conflicts[0].index1, conflicts[0].index2), (0, 1));
    assert!(conflicts[0].reason.contains("AI-92"));

    // The newer price still wins once it starts
    let active = find_active_price(&records[..2], ymd(2024, 5, 1)).unwrap();
    assert_eq!(active.price_gross, Some(5600));
}

#[test]
fn results_serialize_for_the_admin_ui() {
    let change = serde_json::to_value(compare(6000, 5700)).unwrap();
    assert_eq!(change["change_amount"], -300);
    assert_eq!(change["change_percent"], "-5.00");
    assert_eq!(change["direction"], "down");

    let invalid = PriceRecord::new("AI-95", "tp-1", ymd(2024, 1, 1));
    let result = serde_json::to_value(validate(&invalid)).unwrap();
    assert_eq!(result["is_valid"], false);
    assert_eq!(result["errors"].as_array().unwrap().len(), 1);
}
