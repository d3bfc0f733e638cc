//! Table and JSON rendering of dashboard views

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use trendboard_analytics::{
    ChannelEntry, CorrelationMatrix, CountryCount, DailyView, LabelCount, PublishDay,
    PublishHourHistogram, RankTierMatrix, TopChart, ViewGainPoint, WeeklyView, WordCloud,
    bin_label,
};

/// Words shown per cloud in table output
const TABLE_WORDS: usize = 15;

/// Print any view as pretty JSON
pub fn print_json<T: Serialize>(view: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(view)?;
    println!("{}", json);
    Ok(())
}

/// Print the daily view as tables
pub fn print_daily(view: &DailyView) {
    println!("Daily view for {} ({} videos)", view.date, view.rows);

    section("Top ranked");
    if view.top_ranked.is_empty() {
        println!("(no data)");
    }
    for video in &view.top_ranked {
        println!(
            "{:>4}  {:<60} {:>8}",
            video.rank,
            clip(&video.title, 60),
            video.views_display
        );
    }

    print_categories(&view.categories);
    print_top_charts(&view.top_charts);
    print_publish_dates(&view.publish_dates);
    print_publish_hours(&view.publish_hours);
    print_channels(&view.channels);
    print_countries(&view.countries);
}

/// Print the weekly view as tables
pub fn print_weekly(view: &WeeklyView) {
    println!(
        "Weekly view {} to {} ({} rows, {} new videos)",
        view.start, view.end, view.rows, view.unique_videos
    );

    print_categories(&view.categories);
    print_correlation(view.correlation.as_ref());
    print_top_charts(&view.top_charts);
    print_word_clouds(&view.word_clouds);
    print_publish_dates(&view.publish_dates);
    print_publish_hours(&view.publish_hours);
    print_channels(&view.channels);
    print_countries(&view.countries);
    print_rank_tiers(&view.rank_tiers);
    print_view_gains(&view.view_gains);
}

fn section(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "-".repeat(title.len().max(40)));
}

/// Cut a string to `width` characters for fixed-width columns
fn clip(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let mut clipped: String = s.chars().take(width.saturating_sub(3)).collect();
        clipped.push_str("...");
        clipped
    } else {
        s.to_string()
    }
}

fn print_categories(categories: &[LabelCount]) {
    section("Categories");
    if categories.is_empty() {
        println!("(no data)");
    }
    for c in categories {
        println!("{:<30} {:>8}", c.label, c.count);
    }
}

fn print_top_charts(charts: &[TopChart]) {
    for chart in charts {
        section(&format!("Top by {}", chart.metric));
        if chart.entries.is_empty() {
            println!("(no data)");
        }
        // charts are ascending; print the largest first
        for entry in chart.entries.iter().rev() {
            println!("{:<26} {:>15}", entry.label, entry.value);
        }
    }
}

fn print_publish_dates(days: &[PublishDay]) {
    section("Publish dates");
    if days.is_empty() {
        println!("(no data)");
    }
    for day in days {
        let marker = if day.latest { "*" } else { "" };
        println!("{:<12} {:>6} {}", day.date.to_string(), day.count, marker);
    }
}

fn print_publish_hours(histogram: &PublishHourHistogram) {
    section("Publish time of day");
    if histogram.series.is_empty() {
        println!("(no data)");
        return;
    }

    print!("{:<6}", "Time");
    for series in &histogram.series {
        print!(" {:>14}", clip(&series.category, 14));
    }
    println!();

    for bin in 0..histogram.bins.len() {
        if histogram.series.iter().all(|s| s.counts[bin] == 0) {
            continue;
        }
        print!("{:<6}", bin_label(bin));
        for series in &histogram.series {
            print!(" {:>14}", series.counts[bin]);
        }
        println!();
    }
}

fn print_channels(channels: &[ChannelEntry]) {
    section("Channels");
    if channels.is_empty() {
        println!("(no data)");
    }
    for c in channels {
        println!(
            "{:<30} {:<20} {:>12} {:>6}",
            clip(&c.channel_title, 30),
            clip(&c.channel_type, 20),
            c.subscribers,
            c.video_count
        );
    }
}

fn print_countries(countries: &[CountryCount]) {
    section("Channel countries");
    if countries.is_empty() {
        println!("(no data)");
    }
    for c in countries {
        println!("{:<6} {:>8}", c.iso_alpha3, c.count);
    }
}

fn print_correlation(matrix: Option<&CorrelationMatrix>) {
    section("Correlation");
    let Some(matrix) = matrix else {
        println!("(not enough videos)");
        return;
    };

    print!("{:<14}", "");
    for column in &matrix.columns {
        print!(" {:>13}", column.as_str());
    }
    println!();

    for (column, row) in matrix.columns.iter().zip(&matrix.values) {
        print!("{:<14}", column.as_str());
        for value in row {
            match value {
                Some(v) => print!(" {:>13.2}", v),
                None => print!(" {:>13}", "-"),
            }
        }
        println!();
    }
}

fn print_word_clouds(clouds: &[WordCloud]) {
    for cloud in clouds {
        section(&format!("Words in {}", cloud.field.as_str()));
        if cloud.words.is_empty() {
            println!("(no data)");
        }
        let words: Vec<String> = cloud
            .words
            .iter()
            .take(TABLE_WORDS)
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        if !words.is_empty() {
            println!("{}", words.join(", "));
        }
    }
}

fn print_rank_tiers(matrix: &RankTierMatrix) {
    section("Rank tiers");
    if matrix.rows.is_empty() {
        println!("(no data)");
        return;
    }

    print!("{:<20}", "Channel type");
    for tier in &matrix.tiers {
        print!(" {:>4}", tier.as_str());
    }
    println!();

    for row in &matrix.rows {
        print!("{:<20}", clip(&row.channel_type, 20));
        for count in &row.counts {
            print!(" {:>4}", count);
        }
        println!();
    }
}

fn print_view_gains(series: &BTreeMap<String, Vec<ViewGainPoint>>) {
    section("Channel views (latest)");
    if series.is_empty() {
        println!("(no data)");
    }
    for (channel, points) in series {
        let (date, views) = match points.last() {
            Some(point) => (point.date.to_string(), point.views.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        println!("{:<30} {:<12} {:>15}", clip(channel, 30), date, views);
    }
}
