use pharmbase_core::{PaymentMethod, Pharmacy, PriceListEntry, Product};

#[test]
fn pharmacy_serialization_uses_expected_wire_fields() {
    let pharmacy = Pharmacy {
        id: 3,
        name: "Alpha".to_string(),
        contact_info: "+79991234567".to_string(),
        address: "Main St".to_string(),
        director_full_name: "Petrov Ivan".to_string(),
    };

    let json = serde_json::to_value(&pharmacy).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Alpha");
    assert_eq!(json["contact_info"], "+79991234567");
    assert_eq!(json["address"], "Main St");
    assert_eq!(json["director_full_name"], "Petrov Ivan");

    let decoded: Pharmacy = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, pharmacy);
}

#[test]
fn payment_method_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(PaymentMethod::Cash).unwrap(),
        serde_json::json!("cash")
    );
    assert_eq!(
        serde_json::to_value(PaymentMethod::Cashless).unwrap(),
        serde_json::json!("cashless")
    );
}

#[test]
fn product_accepts_string_ids_on_deserialization() {
    let value = serde_json::json!({
        "id": "5",
        "pharmacy_id": "1",
        "name": "Aspirin"
    });

    let product: Product = serde_json::from_value(value).unwrap();
    assert_eq!(product.id, 5);
    assert_eq!(product.pharmacy_id, 1);
}

#[test]
fn price_list_entry_accepts_string_cost_on_deserialization() {
    let value = serde_json::json!({
        "pharmacy_id": 1,
        "product_id": 5,
        "cost": "99.5",
        "payment_method": "cashless"
    });

    let entry: PriceListEntry = serde_json::from_value(value).unwrap();
    assert_eq!(entry.cost, 99.5);
    assert_eq!(entry.payment_method, PaymentMethod::Cashless);
}

#[test]
fn non_numeric_id_is_a_deserialization_error() {
    let value = serde_json::json!({
        "id": "not a number",
        "pharmacy_id": 1,
        "name": "Aspirin"
    });

    let err = serde_json::from_value::<Product>(value).unwrap_err();
    assert!(
        err.to_string().contains("numeric string"),
        "unexpected error: {err}"
    );
}
