use crate::aggregate::{parse_article_date, Article};
use crate::lookup::PlayerLookup;

/// Articles collected across successive fetches, deduplicated by title and
/// kept newest-first. Owned and mutated by a single caller between
/// aggregation calls; aggregation itself never mutates it.
#[derive(Debug, Clone, Default)]
pub struct ArticleCollection {
    articles: Vec<Article>,
}

impl ArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append articles not already present (by exact title), then restore
    /// newest-first order. Returns how many were actually added.
    pub fn push_unique(&mut self, incoming: &[Article]) -> usize {
        let mut added = 0usize;
        for article in incoming {
            if self.articles.iter().any(|a| a.title == article.title) {
                continue;
            }
            self.articles.push(article.clone());
            added += 1;
        }
        if added > 0 {
            self.sort_newest_first();
        }
        added
    }

    /// The `n` most recent articles (the collapsed view); `recent(usize::MAX)`
    /// is effectively the expanded view.
    pub fn recent(&self, n: usize) -> &[Article] {
        &self.articles[..n.min(self.articles.len())]
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    fn sort_newest_first(&mut self) {
        // Unparseable dates sink to the end; ties keep insertion order.
        self.articles
            .sort_by(|a, b| parse_article_date(&b.date).cmp(&parse_article_date(&a.date)));
    }
}

/// Keep only articles whose title contains the keyword, case-insensitively.
/// An empty keyword keeps everything.
pub fn filter_by_keyword(articles: &[Article], keyword: &str) -> Vec<Article> {
    if keyword.is_empty() {
        return articles.to_vec();
    }
    let needle = keyword.to_lowercase();
    articles
        .iter()
        .filter(|a| a.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keep only articles whose headline matches at least one of the selected
/// player labels (`"<name> (<team>)"`).
pub fn filter_by_players(
    articles: &[Article],
    selected_labels: &[String],
    lookup: &PlayerLookup,
) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| {
            lookup
                .check_headline(&a.title)
                .iter()
                .any(|p| selected_labels.iter().any(|l| *l == p.label()))
        })
        .cloned()
        .collect()
}
