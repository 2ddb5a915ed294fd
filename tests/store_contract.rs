use budget_store::{
    Budget, BudgetError, EntryKey, EntryValue, HashBudget, TimeIndexBudget, TimeRangeBudget,
};
use chrono::NaiveDate;

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn groceries_scenario() {
    let mut budget = HashBudget::new("groceries");
    let key = EntryKey::from_date(sample_date(2024, 1, 5), 0);
    budget
        .insert(key, EntryValue::new("milk", -3.5, 96.5))
        .expect("insert");

    assert_eq!(
        budget.get(&key).expect("get"),
        EntryValue::new("milk", -3.5, 96.5)
    );
    assert_eq!(budget.len().unwrap(), 1);
    assert_eq!(budget.name(), "groceries");

    let rendered: serde_json::Value =
        serde_json::from_str(&budget.render_json().expect("render")).expect("valid JSON");
    let entries = rendered.as_array().expect("array of entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["key"].as_array().unwrap().len(), 2);
    assert_eq!(entries[0]["values"].as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["values"][0]["description"], "milk");
}

#[test]
fn malformed_raw_key_is_rejected_and_length_unchanged() {
    let mut budget = HashBudget::new("groceries");
    let err = budget
        .insert_raw(
            serde_json::json!(["2024-01-05T00:00:00"]),
            serde_json::json!(["bad", 1.0, 2.0]),
        )
        .unwrap_err();
    assert!(matches!(err, BudgetError::InvalidEntry { .. }));
    assert_eq!(budget.len().unwrap(), 0);
}

#[test]
fn length_counts_distinct_keys_only() {
    let mut budget = HashBudget::new("groceries");
    for seqno in 0..3 {
        budget
            .insert(
                EntryKey::from_date(sample_date(2024, 1, 5), seqno),
                EntryValue::new("entry", -1.0, 99.0),
            )
            .unwrap();
    }
    budget
        .insert(
            EntryKey::from_date(sample_date(2024, 1, 5), 0),
            EntryValue::new("overwritten", -2.0, 98.0),
        )
        .unwrap();
    assert_eq!(budget.len().unwrap(), 3);
}

#[test]
fn storage_variants_share_the_contract() {
    let mut budgets: Vec<Box<dyn Budget>> = vec![
        Box::new(HashBudget::new("working")),
        Box::new(TimeIndexBudget::new("by-time")),
        Box::new(TimeRangeBudget::new("by-range")),
    ];

    for budget in &budgets {
        assert!(!budget.name().is_empty());
    }

    let key = EntryKey::from_date(sample_date(2024, 1, 5), 0);
    let value = EntryValue::new("milk", -3.5, 96.5);

    assert!(budgets[0].insert(key, value.clone()).is_ok());
    assert!(matches!(
        budgets[1].insert(key, value.clone()).unwrap_err(),
        BudgetError::Unimplemented("TimeIndexBudget")
    ));
    assert!(matches!(
        budgets[2].insert(key, value).unwrap_err(),
        BudgetError::Unimplemented("TimeRangeBudget")
    ));
}

#[test]
fn errors_carry_diagnostics() {
    let mut budget = HashBudget::new("groceries");
    let key = EntryKey::from_date(sample_date(2024, 1, 5), 7);

    let miss = budget.get(&key).unwrap_err();
    assert!(miss.to_string().contains("2024-01-05"));
    assert!(miss.to_string().contains('7'));

    let rejection = budget
        .insert_raw(serde_json::json!([1]), serde_json::json!([2]))
        .unwrap_err();
    assert!(rejection.to_string().contains("[1]"));
    assert!(rejection.to_string().contains("[2]"));
}
