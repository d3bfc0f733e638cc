//! Tests for day and range selection

use crate::test_utils::{RecordBuilder, date};
use crate::{RecordStore, StoreError, Window, select_day, select_range};

fn five_day_store() -> RecordStore {
    let mut records = Vec::new();
    for day in 8..=12 {
        for n in 0..(day - 6) {
            records.push(RecordBuilder::new(&format!("v{}-{}", day, n), date(2020, 7, day)).build());
        }
    }
    RecordStore::from_records(records)
}

#[test]
fn test_select_day_exact_match() {
    let store = five_day_store();
    let day = select_day(&store.table(), date(2020, 7, 9));
    assert_eq!(day.len(), 3);
    assert!(day.iter().all(|r| r.trending_date == date(2020, 7, 9)));
}

#[test]
fn test_select_day_no_match_is_empty() {
    let store = five_day_store();
    assert!(select_day(&store.table(), date(2021, 1, 1)).is_empty());
}

#[test]
fn test_days_partition_table() {
    let store = five_day_store();
    let table = store.table();
    let total: usize = store
        .date_domain()
        .dates()
        .iter()
        .map(|d| select_day(&table, *d).len())
        .sum();
    assert_eq!(total, table.len());
}

#[test]
fn test_select_range_inclusive() {
    let store = five_day_store();
    let range = select_range(&store.table(), store.date_domain(), 1, 3).unwrap();
    // 3 + 4 + 5 rows on Jul 9..=11
    assert_eq!(range.len(), 12);
    assert!(
        range
            .iter()
            .all(|r| r.trending_date >= date(2020, 7, 9) && r.trending_date <= date(2020, 7, 11))
    );
}

#[test]
fn test_select_range_single_index_equals_day() {
    let store = five_day_store();
    let domain = store.date_domain();
    let table = store.table();

    let range = select_range(&table, domain, 1, 1).unwrap();
    let day = select_day(&table, domain.get(1).unwrap());
    assert_eq!(range, day);
}

#[test]
fn test_select_range_full_domain() {
    let store = five_day_store();
    let (start, end) = store.date_domain().full_range().unwrap();
    let range = select_range(&store.table(), store.date_domain(), start, end).unwrap();
    assert_eq!(range.len(), store.len());
}

#[test]
fn test_select_range_inverted() {
    let store = five_day_store();
    let err = select_range(&store.table(), store.date_domain(), 3, 1).unwrap_err();
    assert!(matches!(err, StoreError::InvalidRange { start: 3, end: 1, len: 5 }));
}

#[test]
fn test_select_range_out_of_bounds() {
    let store = five_day_store();
    assert!(select_range(&store.table(), store.date_domain(), 0, 5).is_err());
    assert!(select_range(&store.table(), store.date_domain(), 5, 5).is_err());
}

#[test]
fn test_window_select() {
    let store = five_day_store();
    let table = store.table();
    let domain = store.date_domain();

    let day = Window::Day {
        date: date(2020, 7, 8),
    }
    .select(&table, domain)
    .unwrap();
    assert_eq!(day.len(), 2);

    let range = Window::Range { start: 0, end: 1 }
        .select(&table, domain)
        .unwrap();
    assert_eq!(range.len(), 5);
}
