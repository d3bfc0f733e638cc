//! Tests for publish-time distributions

use trendboard_store::test_utils::{RecordBuilder, date, timestamp};
use trendboard_store::{RecordStore, Table, VideoRecord};

use crate::classify::OTHERS;
use crate::publish::{
    PUBLISH_BINS, bin_index, bin_label, publish_date_histogram, publish_hour_histogram,
    publish_hour_histogram_top_n,
};

fn video(id: &str, category: &str, hour: u32, minute: u32) -> VideoRecord {
    RecordBuilder::new(id, date(2020, 7, 8))
        .category(category)
        .published(timestamp(2020, 7, 7, hour, minute))
        .build()
}

#[test]
fn test_bin_index() {
    assert_eq!(bin_index(timestamp(2020, 7, 7, 0, 0)), 0);
    assert_eq!(bin_index(timestamp(2020, 7, 7, 0, 29)), 0);
    assert_eq!(bin_index(timestamp(2020, 7, 7, 0, 30)), 1);
    assert_eq!(bin_index(timestamp(2020, 7, 7, 13, 45)), 27);
    assert_eq!(bin_index(timestamp(2020, 7, 7, 23, 59)), 47);
}

#[test]
fn test_bin_label() {
    assert_eq!(bin_label(0), "0:00");
    assert_eq!(bin_label(1), "0:30");
    assert_eq!(bin_label(27), "13:30");
    assert_eq!(bin_label(47), "23:30");
}

#[test]
fn test_hour_histogram_counts_every_timestamped_row() {
    let mut records = vec![
        video("a", "Music", 9, 0),
        video("b", "Music", 9, 15),
        video("c", "Gaming", 18, 40),
        video("d", "News", 23, 59),
    ];
    records.push(RecordBuilder::new("e", date(2020, 7, 8)).category("Music").build());
    let store = RecordStore::from_records(records);
    let table = store.table();

    let histogram = publish_hour_histogram(&table, &table);

    assert_eq!(histogram.bins.len(), PUBLISH_BINS);
    assert_eq!(histogram.total(), 4);
    let music = histogram.series("Music").unwrap();
    assert_eq!(music.counts[18], 2);
    assert_eq!(histogram.series("Gaming").unwrap().counts[37], 1);
}

#[test]
fn test_hour_histogram_folds_into_others() {
    let store = RecordStore::from_records(vec![
        video("a", "Music", 1, 0),
        video("b", "Music", 2, 0),
        video("c", "Gaming", 3, 0),
        video("d", "News", 4, 0),
        video("e", "Sports", 5, 0),
    ]);
    let table = store.table();

    let histogram = publish_hour_histogram_top_n(&table, &table, 2);

    let categories: Vec<&str> = histogram.series.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(categories, vec!["Music", "Gaming", OTHERS]);
    assert_eq!(histogram.series(OTHERS).unwrap().total(), 2);
}

#[test]
fn test_hour_histogram_uses_reference_ranking() {
    let reference_store = RecordStore::from_records(vec![
        video("a", "News", 1, 0),
        video("b", "News", 1, 0),
        video("c", "Music", 1, 0),
    ]);
    let day_store = RecordStore::from_records(vec![
        video("x", "Music", 6, 0),
        video("y", "Music", 7, 0),
        video("z", "Gaming", 8, 0),
    ]);

    let histogram =
        publish_hour_histogram_top_n(&day_store.table(), &reference_store.table(), 1);

    let categories: Vec<&str> = histogram.series.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(categories, vec![OTHERS]);
    assert_eq!(histogram.total(), 3);
}

#[test]
fn test_hour_histogram_empty() {
    let histogram = publish_hour_histogram(&Table::empty(), &Table::empty());
    assert_eq!(histogram.bins.len(), PUBLISH_BINS);
    assert!(histogram.series.is_empty());
    assert_eq!(histogram.total(), 0);
}

#[test]
fn test_date_histogram_zero_fills() {
    let store = RecordStore::from_records(vec![
        RecordBuilder::new("a", date(2020, 7, 8)).published(timestamp(2020, 7, 3, 10, 0)).build(),
        RecordBuilder::new("b", date(2020, 7, 8)).published(timestamp(2020, 7, 6, 10, 0)).build(),
        RecordBuilder::new("c", date(2020, 7, 8)).published(timestamp(2020, 7, 6, 22, 0)).build(),
        RecordBuilder::new("d", date(2020, 7, 8)).build(),
    ]);

    let days = publish_date_histogram(&store.table());

    let counts: Vec<usize> = days.iter().map(|d| d.count).collect();
    assert_eq!(counts, vec![1, 0, 0, 2]);
    assert_eq!(days[0].date, date(2020, 7, 3));
    assert_eq!(days[3].date, date(2020, 7, 6));
    assert!(days[3].latest);
    assert!(days[..3].iter().all(|d| !d.latest));
}

#[test]
fn test_date_histogram_without_timestamps() {
    let store = RecordStore::from_records(vec![RecordBuilder::new("a", date(2020, 7, 8)).build()]);
    assert!(publish_date_histogram(&store.table()).is_empty());
}
