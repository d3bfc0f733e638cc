//! Tests for dashboard composition

use trendboard_store::test_utils::{RecordBuilder, date, timestamp};
use trendboard_store::{RecordStore, StoreError, VideoRecord, Window};

use crate::dashboard::{Dashboard, DashboardSettings, DashboardView};
use crate::error::AnalyticsError;
use crate::ranking::EngagementMetric;
use crate::series::ViewGainTrim;
use crate::words::TextField;

fn row(id: &str, day: u32, views: u64) -> RecordBuilder {
    RecordBuilder::new(id, date(2020, 7, day))
        .title(&format!("Trending video number {}", id))
        .views(views)
        .likes(views / 10)
        .comments(views / 100)
        .published(timestamp(2020, 7, day - 1, 12, 0))
        .view_gain(date(2020, 7, 1), views)
        .view_gain(date(2020, 7, 2), views * 2)
}

/// Three trending days. Video `a` trends all three days with growing
/// counters; `b` trends on day 8 only; `c` first trends on day 9.
fn records() -> Vec<VideoRecord> {
    vec![
        row("a", 8, 100).category("Music").country("ID").channel("Alpha").rank(1).build(),
        row("b", 8, 50).category("Gaming").country("US").channel("Beta").rank(2).build(),
        row("a", 9, 400).category("Music").country("ID").channel("Alpha").rank(1).build(),
        row("c", 9, 80).category("Music").country("KR").channel("Gamma").rank(2).build(),
        row("a", 10, 900).category("Music").country("ID").channel("Alpha").rank(1).build(),
        row("c", 10, 120).category("Music").country("KR").channel("Gamma").rank(2).build(),
    ]
}

fn settings() -> DashboardSettings {
    DashboardSettings {
        view_gain_trim: ViewGainTrim::none(),
        ..DashboardSettings::default()
    }
}

#[test]
fn test_daily_view() {
    let store = RecordStore::from_records(records());
    let dashboard = Dashboard::new(&store, settings());

    let view = dashboard.daily(date(2020, 7, 9)).unwrap();

    assert_eq!(view.rows, 2);
    assert_eq!(view.categories.len(), 1);
    assert_eq!(view.categories[0].count, 2);
    assert_eq!(view.top_ranked.len(), 2);
    assert_eq!(view.publish_hours.total(), 2);
    assert_eq!(view.channels.len(), 2);

    let views = &view.top_charts[0];
    assert_eq!(views.metric, EngagementMetric::Views);
    let values: Vec<u64> = views.entries.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![80, 400]);
    assert_eq!(views.entries[1].label, "Trending video numbe...");
}

#[test]
fn test_daily_unknown_date() {
    let store = RecordStore::from_records(records());
    let dashboard = Dashboard::new(&store, settings());

    let err = dashboard.daily(date(2020, 7, 11)).unwrap_err();
    assert!(matches!(err, AnalyticsError::Store(StoreError::UnknownDate(_))));
}

#[test]
fn test_weekly_view_dedup_policies() {
    let store = RecordStore::from_records(records());
    let dashboard = Dashboard::new(&store, settings());

    let view = dashboard.weekly(1, 2).unwrap();

    assert_eq!(view.start, date(2020, 7, 9));
    assert_eq!(view.end, date(2020, 7, 10));
    assert_eq!(view.rows, 4);

    // `a` was first seen on day 8, so only `c` is new in the window
    assert_eq!(view.unique_videos, 1);
    assert_eq!(view.categories[0].count, 1);
    assert!(view.correlation.is_none());

    // latest counters of `a` and `c`
    let views: Vec<u64> = view.top_charts[0].entries.iter().map(|e| e.value).collect();
    assert_eq!(views, vec![120, 900]);

    let countries: Vec<(&str, usize)> = view
        .countries
        .iter()
        .map(|c| (c.iso_alpha3.as_str(), c.count))
        .collect();
    assert_eq!(countries, vec![("IDN", 1), ("KOR", 1)]);
    assert_eq!(view.rank_tiers.total(), 2);

    // leaderboard counts raw rows
    assert_eq!(view.channels[0].video_count, 2);
    assert_eq!(view.view_gains.len(), 2);
}

#[test]
fn test_weekly_full_range() {
    let store = RecordStore::from_records(records());
    let dashboard = Dashboard::new(&store, settings());

    let view = dashboard.weekly(0, 2).unwrap();

    assert_eq!(view.rows, 6);
    assert_eq!(view.unique_videos, 3);
    assert!(view.correlation.is_some());
    assert_eq!(view.word_clouds.len(), 3);
    assert_eq!(view.word_clouds[2].field, TextField::Tags);
    assert_eq!(view.publish_hours.total(), 3);
    assert_eq!(view.view_gains["Alpha"].len(), 2);
}

#[test]
fn test_weekly_invalid_range() {
    let store = RecordStore::from_records(records());
    let dashboard = Dashboard::new(&store, settings());

    assert!(matches!(
        dashboard.weekly(2, 1).unwrap_err(),
        AnalyticsError::Store(StoreError::InvalidRange { .. })
    ));
    assert!(matches!(
        dashboard.weekly(0, 3).unwrap_err(),
        AnalyticsError::Store(StoreError::InvalidRange { .. })
    ));
}

#[test]
fn test_view_dispatch_and_serialize() {
    let store = RecordStore::from_records(records());
    let dashboard = Dashboard::new(&store, settings());

    let daily = dashboard
        .view(Window::Day {
            date: date(2020, 7, 8),
        })
        .unwrap();
    assert!(matches!(daily, DashboardView::Daily(ref v) if v.rows == 2));

    let json = serde_json::to_value(&daily).unwrap();
    assert_eq!(json["tab"], "daily");
    assert_eq!(json["date"], "2020-07-08");

    let weekly = dashboard.view(Window::Range { start: 0, end: 0 }).unwrap();
    let json = serde_json::to_value(&weekly).unwrap();
    assert_eq!(json["tab"], "weekly");
    assert_eq!(json["unique_videos"], 2);
}

#[test]
fn test_settings_limit_top_k() {
    let store = RecordStore::from_records(records());
    let dashboard = Dashboard::new(
        &store,
        DashboardSettings {
            top_k: 1,
            leaderboard_size: 1,
            ..settings()
        },
    );

    let view = dashboard.weekly(0, 2).unwrap();
    assert!(view.top_charts.iter().all(|c| c.entries.len() == 1));
    assert_eq!(view.channels.len(), 1);
    assert_eq!(dashboard.settings().top_k, 1);
}
