//! Tests for channel view-gain series

use chrono::Datelike;
use trendboard_store::test_utils::{RecordBuilder, date};
use trendboard_store::{RecordStore, Table, VideoRecord};

use crate::series::{ViewGainPoint, ViewGainTrim, channel_view_gain_series};

fn with_gains(id: &str, channel: &str, days: std::ops::RangeInclusive<u32>, base: u64) -> VideoRecord {
    days.fold(
        RecordBuilder::new(id, date(2020, 7, 20)).channel(channel),
        |b, d| b.view_gain(date(2020, 7, d), base + d as u64),
    )
    .build()
}

#[test]
fn test_one_series_per_channel_last_row_wins() {
    let store = RecordStore::from_records(vec![
        with_gains("a1", "Alpha", 1..=3, 100),
        with_gains("b1", "Beta", 1..=3, 200),
        with_gains("a2", "Alpha", 1..=3, 1_000),
    ]);

    let series = channel_view_gain_series(&store.table(), ViewGainTrim::none());

    assert_eq!(series.len(), 2);
    assert_eq!(
        series["Alpha"][0],
        ViewGainPoint {
            date: date(2020, 7, 1),
            views: 1_001
        }
    );
    assert_eq!(series["Beta"].len(), 3);
}

#[test]
fn test_latest_trending_date_wins_over_row_order() {
    let newer = RecordBuilder::new("a1", date(2020, 7, 10))
        .channel("Alpha")
        .view_gain(date(2020, 7, 1), 999)
        .build();
    let older = RecordBuilder::new("a2", date(2020, 7, 8))
        .channel("Alpha")
        .view_gain(date(2020, 7, 1), 111)
        .build();
    let store = RecordStore::from_records(vec![newer, older]);

    let series = channel_view_gain_series(&store.table(), ViewGainTrim::none());

    assert_eq!(series["Alpha"].len(), 1);
    assert_eq!(series["Alpha"][0].views, 999);
}

#[test]
fn test_trim_shared_axis() {
    let store = RecordStore::from_records(vec![
        with_gains("a", "Alpha", 1..=12, 0),
        with_gains("b", "Beta", 5..=12, 0),
    ]);

    let series = channel_view_gain_series(&store.table(), ViewGainTrim::default());

    // axis 1..=12, minus nine leading and one trailing date
    let alpha: Vec<u32> = series["Alpha"].iter().map(|p| p.date.day()).collect();
    assert_eq!(alpha, vec![10, 11]);
    assert_eq!(series["Beta"].len(), 2);
}

#[test]
fn test_series_keeps_only_own_dates() {
    let store = RecordStore::from_records(vec![
        with_gains("a", "Alpha", 1..=4, 0),
        with_gains("b", "Beta", 3..=4, 0),
    ]);

    let series = channel_view_gain_series(
        &store.table(),
        ViewGainTrim {
            skip_leading: 1,
            skip_trailing: 0,
        },
    );

    assert_eq!(series["Alpha"].len(), 3);
    assert_eq!(series["Beta"].len(), 2);
}

#[test]
fn test_trim_longer_than_axis() {
    let store = RecordStore::from_records(vec![with_gains("a", "Alpha", 1..=5, 0)]);

    let series = channel_view_gain_series(&store.table(), ViewGainTrim::default());

    assert_eq!(series.len(), 1);
    assert!(series["Alpha"].is_empty());
}

#[test]
fn test_empty_table() {
    assert!(channel_view_gain_series(&Table::empty(), ViewGainTrim::default()).is_empty());
}
