//! Tests for the correlation matrix

use trendboard_store::test_utils::{RecordBuilder, date};
use trendboard_store::{RecordStore, Table};

use crate::correlation::{NumericColumn, correlation_matrix};
use crate::error::AnalyticsError;

fn store() -> RecordStore {
    RecordStore::from_records(vec![
        RecordBuilder::new("a", date(2020, 7, 8)).views(100).likes(10).comments(9).rank(3).build(),
        RecordBuilder::new("b", date(2020, 7, 8)).views(200).likes(20).comments(4).rank(2).build(),
        RecordBuilder::new("c", date(2020, 7, 8)).views(300).likes(30).comments(1).rank(1).build(),
    ])
}

#[test]
fn test_single_row_is_insufficient() {
    let store = RecordStore::from_records(vec![RecordBuilder::new("a", date(2020, 7, 8)).build()]);
    let err = correlation_matrix(&store.table(), &NumericColumn::ALL).unwrap_err();

    assert!(matches!(
        err,
        AnalyticsError::InsufficientData {
            required: 2,
            actual: 1
        }
    ));
}

#[test]
fn test_empty_table_is_insufficient() {
    let err = correlation_matrix(&Table::empty(), &NumericColumn::ALL).unwrap_err();
    assert!(matches!(err, AnalyticsError::InsufficientData { actual: 0, .. }));
}

#[test]
fn test_perfect_correlations() {
    let store = store();
    let matrix = correlation_matrix(&store.table(), &NumericColumn::ALL).unwrap();

    assert_eq!(matrix.get(NumericColumn::ViewCount, NumericColumn::Likes), Some(1.0));
    assert_eq!(matrix.get(NumericColumn::ViewCount, NumericColumn::Rank), Some(-1.0));
    assert_eq!(matrix.get(NumericColumn::ViewCount, NumericColumn::ViewCount), Some(1.0));
}

#[test]
fn test_rounded_to_two_decimals() {
    let store = store();
    let matrix = correlation_matrix(&store.table(), &NumericColumn::ALL).unwrap();

    // comments 9, 4, 1 against views 100, 200, 300
    let r = matrix
        .get(NumericColumn::ViewCount, NumericColumn::CommentCount)
        .unwrap();
    assert_eq!(r, -0.99);
}

#[test]
fn test_symmetric() {
    let store = store();
    let matrix = correlation_matrix(&store.table(), &NumericColumn::ALL).unwrap();

    for &a in &NumericColumn::ALL {
        for &b in &NumericColumn::ALL {
            assert_eq!(matrix.get(a, b), matrix.get(b, a));
        }
    }
}

#[test]
fn test_constant_column_has_no_coefficient() {
    let store = store();
    let matrix = correlation_matrix(&store.table(), &NumericColumn::ALL).unwrap();

    // every fixture has zero dislikes and subscribers
    assert_eq!(matrix.get(NumericColumn::Dislikes, NumericColumn::ViewCount), None);
    assert_eq!(matrix.get(NumericColumn::Subscribers, NumericColumn::Subscribers), None);
}

#[test]
fn test_column_subset() {
    let store = store();
    let columns = [NumericColumn::Likes, NumericColumn::Rank];
    let matrix = correlation_matrix(&store.table(), &columns).unwrap();

    assert_eq!(matrix.columns, columns.to_vec());
    assert_eq!(matrix.values.len(), 2);
    assert_eq!(matrix.get(NumericColumn::ViewCount, NumericColumn::Likes), None);
}
