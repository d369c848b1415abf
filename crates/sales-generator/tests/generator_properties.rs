//! 生成器批次属性的集成测试
//!
//! 使用 tests/fixtures 下的参考数据验证整批记录满足的约束

use std::collections::HashSet;

use chrono::{Duration, Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sales_generator::generator::{FixedClock, GeneratorConfig, Locale, SalesGenerator, is_v4_uuid};
use sales_generator::models::{Amount, Product, Store};
use sales_generator::reference::{FileReferenceSource, ReferenceData, ReferenceSource};
use sales_shared::error::SalesError;
use serde_json::json;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

async fn load_fixtures() -> ReferenceData {
    FileReferenceSource::new(fixture("stores.json"), fixture("products.json"))
        .load()
        .await
        .unwrap()
}

// ==================== 批次属性 ====================

#[tokio::test]
async fn test_batch_of_ten_thousand() {
    let data = load_fixtures().await;
    let generator = SalesGenerator::with_defaults();

    let before = Local::now().naive_local();
    let transactions = generator
        .generate(&data.stores, &data.products, 10_000)
        .unwrap();
    let after = Local::now().naive_local();

    assert_eq!(transactions.len(), 10_000);

    let ids: HashSet<String> = transactions
        .iter()
        .map(|t| t.transaction_id.to_string())
        .collect();
    assert_eq!(ids.len(), 10_000, "同一批次内出现重复的 transaction_id");
    assert!(ids.iter().all(|id| is_v4_uuid(id)));

    for tx in &transactions {
        assert!(tx.timestamp <= after);
        assert!(tx.timestamp >= before - Duration::days(100));
    }
}

#[tokio::test]
async fn test_every_record_matches_exactly_one_store_and_product() {
    let data = load_fixtures().await;
    let generator = SalesGenerator::with_defaults();

    let transactions = generator
        .generate(&data.stores, &data.products, 2_000)
        .unwrap();

    for tx in &transactions {
        let store_matches = data.stores.iter().filter(|s| tx.matches_store(s)).count();
        assert_eq!(store_matches, 1, "门店字段混合: {:?}", tx);

        let product_matches = data
            .products
            .iter()
            .filter(|p| tx.matches_product(p))
            .count();
        assert_eq!(product_matches, 1, "商品字段混合: {:?}", tx);

        assert!((1..=3).contains(&tx.quantity));
        assert_eq!(Some(tx.total), tx.mrp.checked_mul(tx.quantity));
        assert!(data.products.iter().any(|p| p.mrp == tx.mrp));
    }
}

#[tokio::test]
async fn test_integer_mrp_yields_integer_total() {
    let data = load_fixtures().await;
    let generator = SalesGenerator::with_defaults();

    let transactions = generator
        .generate(&data.stores, &data.products, 500)
        .unwrap();

    for tx in transactions.iter().filter(|t| t.product_id != "P2") {
        assert_eq!(tx.total, Amount::Integer(120 * i64::from(tx.quantity)));
    }
    for tx in transactions.iter().filter(|t| t.product_id == "P2") {
        assert_eq!(tx.total, Amount::Decimal(49.99 * f64::from(tx.quantity)));
    }
}

#[test]
fn test_output_preserves_generation_order() {
    let now = NaiveDate::from_ymd_opt(2024, 8, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let generator = SalesGenerator::new(GeneratorConfig::default(), FixedClock(now)).unwrap();
    let stores = single_store();
    let products = single_product();

    let batch = generator
        .generate_with_rng(&mut StdRng::seed_from_u64(8), &stores, &products, 30)
        .unwrap();
    let prefix = generator
        .generate_with_rng(&mut StdRng::seed_from_u64(8), &stores, &products, 10)
        .unwrap();

    // 同一种子下，较短批次是较长批次的前缀
    assert_eq!(&batch[..10], &prefix[..]);
}

#[test]
fn test_locale_profile_applies_to_all_records() {
    let config = GeneratorConfig {
        locale: Locale::PtBr,
        ..Default::default()
    };
    let generator = SalesGenerator::new(config, FixedClock(Local::now().naive_local())).unwrap();

    let transactions = generator
        .generate(&single_store(), &single_product(), 100)
        .unwrap();
    assert!(transactions.iter().all(|t| t.customer_email.contains('@')));
    assert!(transactions.iter().all(|t| !t.customer_name.is_empty()));
}

// ==================== 场景 ====================

fn single_store() -> Vec<Store> {
    vec![Store {
        store_id: json!("S1"),
        store_name: json!("Alpha"),
        location: json!("City A"),
    }]
}

fn single_product() -> Vec<Product> {
    vec![Product {
        product_id: json!("P1"),
        product_name: json!("Widget"),
        category: json!("Tools"),
        retail_price: json!(100),
        brand: json!("Acme"),
        mrp: Amount::Integer(120),
    }]
}

#[test]
fn test_single_store_single_product_scenario() {
    let generator = SalesGenerator::with_defaults();
    let transactions = generator
        .generate(&single_store(), &single_product(), 1)
        .unwrap();

    assert_eq!(transactions.len(), 1);
    let tx = &transactions[0];
    assert_eq!(tx.store_id, "S1");
    assert_eq!(tx.store_name, "Alpha");
    assert_eq!(tx.store_location, "City A");
    assert_eq!(tx.product_id, "P1");
    assert_eq!(tx.mrp, Amount::Integer(120));
    assert!((1..=3).contains(&tx.quantity));
    assert_eq!(tx.total, Amount::Integer(120 * i64::from(tx.quantity)));
}

#[test]
fn test_non_string_reference_values_are_copied_verbatim() {
    let data = ReferenceData::from_json(
        r#"[{"store_id": 101, "store_name": "Alpha", "location": ["City A", "North"]}]"#,
        r#"[{"product_id": "P1", "product_name": "Widget", "category": "Tools",
             "retail_price": null, "brand": 42, "mrp": 10}]"#,
    )
    .unwrap();

    let transactions = SalesGenerator::with_defaults()
        .generate(&data.stores, &data.products, 20)
        .unwrap();

    for tx in &transactions {
        let record = serde_json::to_value(tx).unwrap();
        assert_eq!(record["store_id"], json!(101));
        assert_eq!(record["store_location"], json!(["City A", "North"]));
        assert_eq!(record["retail_price"], serde_json::Value::Null);
        assert_eq!(record["brand"], json!(42));
        assert_eq!(record["total"], json!(10 * tx.quantity));
    }
}

#[test]
fn test_zero_count_scenario() {
    let generator = SalesGenerator::with_defaults();
    let transactions = generator
        .generate(&single_store(), &single_product(), 0)
        .unwrap();
    assert!(transactions.is_empty());
}

#[test]
fn test_empty_collections_fail_fast() {
    let generator = SalesGenerator::with_defaults();

    let err = generator.generate(&[], &single_product(), 1).unwrap_err();
    assert!(matches!(err, SalesError::EmptyReferenceData { .. }));

    let err = generator.generate(&single_store(), &[], 1).unwrap_err();
    assert!(matches!(err, SalesError::EmptyReferenceData { .. }));
}

// ==================== 加载边界 ====================

#[tokio::test]
async fn test_missing_reference_file() {
    let source = FileReferenceSource::new(fixture("stores.json"), fixture("no_such_products.json"));
    let err = source.load().await.unwrap_err();
    assert_eq!(err.code(), "REFERENCE_DATA_MISSING");
}

#[tokio::test]
async fn test_truncated_reference_file() {
    let source = FileReferenceSource::new(fixture("stores_truncated.json"), fixture("products.json"));
    let err = source.load().await.unwrap_err();
    assert_eq!(err.code(), "REFERENCE_DATA_MALFORMED");
}

#[tokio::test]
async fn test_missing_required_field() {
    let source = FileReferenceSource::new(fixture("stores.json"), fixture("products_missing_mrp.json"));
    let err = source.load().await.unwrap_err();
    assert!(matches!(
        err,
        SalesError::ReferenceDataMalformed { ref dataset, .. } if dataset == "products"
    ));
}

#[tokio::test]
async fn test_empty_reference_file_rejected_by_generator() {
    let data = FileReferenceSource::new(fixture("empty.json"), fixture("products.json"))
        .load()
        .await
        .unwrap();

    let err = SalesGenerator::with_defaults()
        .generate(&data.stores, &data.products, 10)
        .unwrap_err();
    assert_eq!(err.code(), "EMPTY_REFERENCE_DATA");
}
