use ayur_admin::domain::error::AdminError;
use ayur_admin::domain::id::DocumentId;
use ayur_admin::domain::product::{
    Category, ClassicalFields, PriceRow, Product, ProductDraft, ProprietaryFields,
};
use serde_json::json;

fn price_row(id: Option<i64>, sr_no: &str) -> PriceRow {
    PriceRow {
        id,
        sr_no: sr_no.into(),
        qty: "60 tabs".into(),
        price: "250".into(),
    }
}

#[test]
fn proprietary_payload_clears_classical_and_strips_row_ids() {
    let draft = ProductDraft {
        name: "  Arogya Vati ".into(),
        category: Category::Proprietary,
        description: "Immunity support".into(),
        proprietary_fields: Some(ProprietaryFields {
            usage: Some("Daily".into()),
            ingredients: None,
            dosage: Some("1 tab".into()),
            price_list: vec![price_row(Some(31), "1"), price_row(None, "2")],
        }),
        classical_fields: Some(ClassicalFields::default()),
    };

    let payload = draft.to_payload();
    let data = &payload["data"];
    assert_eq!(data["name"], "Arogya Vati");
    assert_eq!(data["category"], "proprietary");
    assert!(data["classical_fields"].is_null());
    assert_eq!(data["proprietary_fields"]["dosage"], "1 tab");

    let rows = data["proprietary_fields"]["price_list"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.get("id").is_none()));
    assert_eq!(rows[0]["sr_no"], "1");
}

#[test]
fn classical_payload_clears_proprietary() {
    let draft = ProductDraft {
        name: "Chyawanprash".into(),
        category: Category::Classical,
        description: String::new(),
        proprietary_fields: Some(ProprietaryFields::default()),
        classical_fields: Some(ClassicalFields {
            sub_category: Some("Avaleha".into()),
            reference: Some("Charaka Samhita".into()),
            ..Default::default()
        }),
    };

    let data = draft.to_payload()["data"].clone();
    assert!(data["proprietary_fields"].is_null());
    assert_eq!(data["classical_fields"]["sub_category"], "Avaleha");
    assert_eq!(data["classical_fields"]["price_list"], json!([]));
}

#[test]
fn blank_price_rows_are_not_sent() {
    let draft = ProductDraft {
        name: "Dashamoola".into(),
        category: Category::Classical,
        description: String::new(),
        proprietary_fields: None,
        classical_fields: Some(ClassicalFields {
            price_list: vec![
                price_row(Some(4), "1"),
                PriceRow::default(),
                PriceRow {
                    id: Some(5),
                    price: "90".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }),
    };

    let data = draft.to_payload()["data"].clone();
    let rows = data["classical_fields"]["price_list"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["sr_no"], "1");
    assert_eq!(rows[1]["price"], "90");
    assert!(rows.iter().all(|r| r.get("id").is_none()));
}

#[test]
fn missing_field_group_sends_empty_group() {
    let draft = ProductDraft {
        name: "Triphala".into(),
        category: Category::Proprietary,
        description: String::new(),
        proprietary_fields: None,
        classical_fields: None,
    };
    let data = draft.to_payload()["data"].clone();
    assert!(data["proprietary_fields"].is_object());
}

#[test]
fn blank_name_is_rejected() {
    let draft = ProductDraft {
        name: "   ".into(),
        category: Category::Classical,
        description: String::new(),
        proprietary_fields: None,
        classical_fields: None,
    };
    assert!(matches!(draft.validate(), Err(AdminError::Validation(_))));
}

#[test]
fn product_parses_numeric_serials_and_missing_groups() {
    let raw = json!({
        "id": 4,
        "documentId": "abc123",
        "name": "Brahmi Ghrita",
        "category": "classical",
        "description": null,
        "proprietary_fields": null,
        "classical_fields": {
            "sub_category": "Ghrita",
            "price_list": [{"id": 9, "sr_no": 1, "qty": "200 ml", "price": 410}]
        }
    });

    let product: Product = serde_json::from_value(raw).unwrap();
    assert_eq!(product.document_id.as_str(), "abc123");
    assert_eq!(product.category, Some(Category::Classical));
    assert!(product.proprietary_fields.is_none());
    let row = &product.classical_fields.as_ref().unwrap().price_list[0];
    assert_eq!(row.sr_no, "1");
    assert_eq!(row.price, "410");
    assert_eq!(row.id, Some(9));

    let draft = ProductDraft::from(&product);
    assert_eq!(draft.category, Category::Classical);
    assert_eq!(draft.to_payload()["data"]["classical_fields"]["price_list"][0].get("id"), None);
}

#[test]
fn category_roundtrip_and_unknown() {
    for c in [Category::Proprietary, Category::Classical] {
        assert_eq!(Category::try_from(c.as_str()).unwrap(), c);
    }
    assert!(Category::try_from("herbal").is_err());
}

#[test]
fn document_id_rejects_blank_and_slash() {
    assert!(DocumentId::new("").is_err());
    assert!(DocumentId::new("a/b").is_err());
    assert_eq!(DocumentId::new("k3x9").unwrap().to_string(), "k3x9");
}
