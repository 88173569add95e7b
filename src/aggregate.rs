use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::lookup::PlayerLookup;

pub const NO_ARTICLES_LABEL: &str = "No articles found";
pub const UNKNOWN_DATE_LABEL: &str = "Unknown date range";

/// One news article as handed over by the fetch layer. Only the title is
/// needed for matching; the date feeds the range label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCount {
    pub player_label: String,
    pub count: usize,
}

/// Summary over one article collection, recomputed in full on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_article_count: usize,
    pub date_range_label: String,
    pub articles_with_mentions: usize,
    pub ranked_mentions: Vec<MentionCount>,
}

const RANKING_LIMIT: usize = 10;

/// Count player mentions across an article collection.
///
/// A mention is one article whose title matched a player at least once, so
/// counts are per-article rather than per-occurrence. Rankings are sorted by
/// count descending, ties kept in first-seen order, and capped at the top 10.
/// With the lookup not yet loaded this degrades to zero mentions but still
/// reports the article count and date range.
pub fn aggregate(articles: &[Article], lookup: &PlayerLookup) -> AggregateStats {
    if articles.is_empty() {
        return AggregateStats {
            total_article_count: 0,
            date_range_label: NO_ARTICLES_LABEL.to_string(),
            articles_with_mentions: 0,
            ranked_mentions: Vec::new(),
        };
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    let mut articles_with_mentions = 0usize;

    for article in articles {
        let matched = lookup.check_headline(&article.title);
        if matched.is_empty() {
            continue;
        }
        articles_with_mentions += 1;
        for player in &matched {
            let label = player.label();
            match counts.get_mut(&label) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(label.clone(), 1);
                    first_seen.push(label);
                }
            }
        }
    }

    let mut ranked: Vec<MentionCount> = first_seen
        .into_iter()
        .map(|label| {
            let count = counts.get(&label).copied().unwrap_or(0);
            MentionCount {
                player_label: label,
                count,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(RANKING_LIMIT);

    AggregateStats {
        total_article_count: articles.len(),
        date_range_label: date_range_label(articles),
        articles_with_mentions,
        ranked_mentions: ranked,
    }
}

/// Label for the calendar span covered by the articles: a single date when
/// oldest and newest fall on the same day, otherwise "<oldest> - <newest>".
/// Articles whose dates don't parse are ignored; if none parse the label is
/// "Unknown date range".
fn date_range_label(articles: &[Article]) -> String {
    let mut dates: Vec<NaiveDate> = articles
        .iter()
        .filter_map(|a| parse_article_date(&a.date))
        .collect();
    dates.sort();

    let (Some(oldest), Some(newest)) = (dates.first(), dates.last()) else {
        return UNKNOWN_DATE_LABEL.to_string();
    };
    if oldest == newest {
        newest.format("%Y-%m-%d").to_string()
    } else {
        format!("{} - {}", oldest.format("%Y-%m-%d"), newest.format("%Y-%m-%d"))
    }
}

/// Accepts the date shapes the news API hands out: plain dates, RFC 3339
/// timestamps, and the "T"-separated form without an offset.
pub fn parse_article_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
