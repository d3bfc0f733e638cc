//! Fixture builders for tests
//!
//! Build realistic records without spelling out every field.
//!
//! ```
//! use trendboard_store::test_utils::{RecordBuilder, date};
//!
//! let record = RecordBuilder::new("vid1", date(2020, 7, 8))
//!     .category("Music")
//!     .views(1_000)
//!     .build();
//! assert_eq!(record.category, "Music");
//! ```

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::VideoRecord;

/// Shorthand for a calendar date
///
/// # Panics
///
/// Panics on an invalid date. Only meant for fixtures.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Shorthand for a local timestamp
///
/// # Panics
///
/// Panics on an invalid date or time. Only meant for fixtures.
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid fixture time")
}

/// Builder for [`VideoRecord`] fixtures
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: VideoRecord,
}

impl RecordBuilder {
    /// Start a record for a video on a trending date
    pub fn new(video_id: &str, trending_date: NaiveDate) -> Self {
        Self {
            record: VideoRecord {
                video_id: video_id.to_string(),
                trending_date,
                title: format!("Video {}", video_id),
                category: "Entertainment".to_string(),
                view_count: 0,
                likes: 0,
                dislikes: 0,
                comment_count: 0,
                published_at: None,
                rank: 1,
                thumbnail_link: String::new(),
                channel_title: "Channel".to_string(),
                avatar_url: String::new(),
                channel_type: "Entertainment".to_string(),
                country: String::new(),
                subscribers: 0,
                rank_tier: String::new(),
                view_gains: Default::default(),
                title_tokens: Vec::new(),
                description_tokens: Vec::new(),
                tags: String::new(),
            },
        }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.record.title = title.to_string();
        self
    }

    /// Set the category
    pub fn category(mut self, category: &str) -> Self {
        self.record.category = category.to_string();
        self
    }

    /// Set the view count
    pub fn views(mut self, views: u64) -> Self {
        self.record.view_count = views;
        self
    }

    /// Set the like count
    pub fn likes(mut self, likes: u64) -> Self {
        self.record.likes = likes;
        self
    }

    /// Set the dislike count
    pub fn dislikes(mut self, dislikes: u64) -> Self {
        self.record.dislikes = dislikes;
        self
    }

    /// Set the comment count
    pub fn comments(mut self, comments: u64) -> Self {
        self.record.comment_count = comments;
        self
    }

    /// Set the publish timestamp
    pub fn published(mut self, at: NaiveDateTime) -> Self {
        self.record.published_at = Some(at);
        self
    }

    /// Set the trending rank
    pub fn rank(mut self, rank: u32) -> Self {
        self.record.rank = rank;
        self
    }

    /// Set the thumbnail URL
    pub fn thumbnail(mut self, url: &str) -> Self {
        self.record.thumbnail_link = url.to_string();
        self
    }

    /// Set the channel title
    pub fn channel(mut self, title: &str) -> Self {
        self.record.channel_title = title.to_string();
        self
    }

    /// Set the channel avatar URL
    pub fn avatar(mut self, url: &str) -> Self {
        self.record.avatar_url = url.to_string();
        self
    }

    /// Set the channel type
    pub fn channel_type(mut self, channel_type: &str) -> Self {
        self.record.channel_type = channel_type.to_string();
        self
    }

    /// Set the channel country code
    pub fn country(mut self, code: &str) -> Self {
        self.record.country = code.to_string();
        self
    }

    /// Set the subscriber count
    pub fn subscribers(mut self, subscribers: u64) -> Self {
        self.record.subscribers = subscribers;
        self
    }

    /// Set the social-blade rank tier
    pub fn rank_tier(mut self, tier: &str) -> Self {
        self.record.rank_tier = tier.to_string();
        self
    }

    /// Add a view-gain point
    pub fn view_gain(mut self, on: NaiveDate, views: u64) -> Self {
        self.record.view_gains.insert(on, views);
        self
    }

    /// Set the cleaned title tokens
    pub fn title_tokens(mut self, tokens: &[&str]) -> Self {
        self.record.title_tokens = tokens.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the cleaned description tokens
    pub fn description_tokens(mut self, tokens: &[&str]) -> Self {
        self.record.description_tokens = tokens.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the raw tags string
    pub fn tags(mut self, tags: &str) -> Self {
        self.record.tags = tags.to_string();
        self
    }

    /// Finish the record
    pub fn build(self) -> VideoRecord {
        self.record
    }
}
