//! Trending-video record model
//!
//! One [`VideoRecord`] per (video, trending day) observation. Field names are
//! snake_case; the aliases accept the column names of the collected dataset.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Tags value meaning "no tags"
pub const NO_TAGS: &str = "[none]";

/// A single trending observation of a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video identifier (repeats across trending days)
    pub video_id: String,

    /// Day the video was observed on the trending list
    pub trending_date: NaiveDate,

    /// Video title
    pub title: String,

    /// Category name
    #[serde(alias = "categoryIdName")]
    pub category: String,

    /// Cumulative views at observation time
    pub view_count: u64,

    /// Cumulative likes at observation time
    pub likes: u64,

    /// Cumulative dislikes at observation time
    #[serde(default)]
    pub dislikes: u64,

    /// Cumulative comments at observation time
    pub comment_count: u64,

    /// Publish timestamp (local time of the trending region)
    ///
    /// Accepts `2020-07-08T10:00:00`, `2020-07-08 10:00:00`, or RFC 3339
    /// with an offset, which keeps the wall-clock time at that offset.
    #[serde(
        default,
        alias = "publishedAt",
        deserialize_with = "deserialize_published_at"
    )]
    pub published_at: Option<NaiveDateTime>,

    /// Position on the trending list for that day (1 = top)
    pub rank: u32,

    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail_link: String,

    /// Channel display name
    #[serde(alias = "channelTitle")]
    pub channel_title: String,

    /// Channel avatar URL
    #[serde(default)]
    pub avatar_url: String,

    /// Channel category as reported by social blade
    #[serde(default)]
    pub channel_type: String,

    /// Channel country code (ISO-2, empty when unknown)
    #[serde(default)]
    pub country: String,

    /// Current channel subscriber count
    #[serde(default, alias = "curr_subs_num")]
    pub subscribers: u64,

    /// Social-blade rank tier (`A++` … `D-`, empty or `N/A` when unranked)
    #[serde(default, alias = "rank_y")]
    pub rank_tier: String,

    /// Historical cumulative channel views by date
    #[serde(default, alias = "past_view_gains")]
    pub view_gains: BTreeMap<NaiveDate, u64>,

    /// Cleaned title tokens
    #[serde(default, alias = "title_cleaned")]
    pub title_tokens: Vec<String>,

    /// Cleaned description tokens
    #[serde(default, alias = "desc_cleaned")]
    pub description_tokens: Vec<String>,

    /// Raw tags, `|`-separated
    #[serde(default)]
    pub tags: String,
}

impl VideoRecord {
    /// Split the raw tags string into individual tags
    ///
    /// Returns nothing for an empty string or the `[none]` marker.
    pub fn tag_list(&self) -> Vec<&str> {
        let tags = self.tags.trim();
        if tags.is_empty() || tags == NO_TAGS {
            return Vec::new();
        }
        tags.split('|')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn deserialize_published_at<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_published_at(raw)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid publish timestamp: {}", raw)))
}

fn parse_published_at(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|at| at.naive_local())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "video_id": "abc",
        "trending_date": "2020-07-08",
        "title": "Some video",
        "categoryIdName": "Music",
        "view_count": 10,
        "likes": 2,
        "comment_count": 1,
        "rank": 3,
        "channelTitle": "Channel"
    }"#;

    #[test]
    fn test_deserialize_minimal_with_aliases() {
        let record: VideoRecord = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(record.video_id, "abc");
        assert_eq!(record.category, "Music");
        assert_eq!(record.channel_title, "Channel");
        assert_eq!(record.dislikes, 0);
        assert!(record.published_at.is_none());
        assert!(record.view_gains.is_empty());
    }

    #[test]
    fn test_deserialize_missing_required_field() {
        let json = r#"{"video_id": "abc", "trending_date": "2020-07-08"}"#;
        assert!(serde_json::from_str::<VideoRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_view_gains_map() {
        let json = MINIMAL.replace(
            "\"rank\": 3,",
            "\"rank\": 3, \"past_view_gains\": {\"2020-07-02\": 20, \"2020-07-01\": 10},",
        );
        let record: VideoRecord = serde_json::from_str(&json).unwrap();
        let dates: Vec<_> = record.view_gains.keys().map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2020-07-01", "2020-07-02"]);
    }

    #[test]
    fn test_deserialize_published_at_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 7, 8)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        for raw in [
            "2020-07-08T10:00:00",
            "2020-07-08 10:00:00",
            "2020-07-08T10:00:00Z",
            "2020-07-08T10:00:00+07:00",
            "2020-07-08T10:00:00.000+07:00",
        ] {
            let json = MINIMAL.replace(
                "\"rank\": 3,",
                &format!("\"rank\": 3, \"publishedAt\": \"{}\",", raw),
            );
            let record: VideoRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record.published_at, Some(expected), "{}", raw);
        }
    }

    #[test]
    fn test_deserialize_published_at_null_and_invalid() {
        let json = MINIMAL.replace("\"rank\": 3,", "\"rank\": 3, \"published_at\": null,");
        let record: VideoRecord = serde_json::from_str(&json).unwrap();
        assert!(record.published_at.is_none());

        let json = MINIMAL.replace(
            "\"rank\": 3,",
            "\"rank\": 3, \"published_at\": \"yesterday\",",
        );
        assert!(serde_json::from_str::<VideoRecord>(&json).is_err());
    }

    #[test]
    fn test_tag_list() {
        let mut record: VideoRecord = serde_json::from_str(MINIMAL).unwrap();
        record.tags = "kpop|blackpink| music video ".to_string();
        assert_eq!(record.tag_list(), vec!["kpop", "blackpink", "music video"]);

        record.tags = NO_TAGS.to_string();
        assert!(record.tag_list().is_empty());

        record.tags = String::new();
        assert!(record.tag_list().is_empty());
    }
}
