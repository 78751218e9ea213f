use super::similarity::partial_ratio;
use super::tables::CoachTables;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Minimum partial similarity for a keyword to claim its category.
pub const MATCH_THRESHOLD: f64 = 80.0;

/// Category picked for a piece of free text and the keyword that earned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub category: String,
    pub keyword: String,
    pub score: f64,
}

/// Maps free-text product descriptions onto catalog categories.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    tables: Arc<CoachTables>,
}

impl CategoryResolver {
    pub fn new(tables: Arc<CoachTables>) -> Self {
        Self { tables }
    }

    /// Returns the best-scoring category at or above the threshold.
    ///
    /// Keywords are visited in table order and a candidate only replaces the
    /// running best when it scores strictly higher, so on equal scores the
    /// category registered first wins.
    pub fn resolve(&self, free_text: &str) -> Option<CategoryMatch> {
        let normalized = free_text.to_lowercase();
        let mut best: Option<CategoryMatch> = None;

        for entry in self.tables.keywords.iter() {
            for keyword in &entry.keywords {
                let score = partial_ratio(keyword, &normalized);
                if score < MATCH_THRESHOLD {
                    continue;
                }
                let improves = best.as_ref().map_or(true, |current| score > current.score);
                if improves {
                    best = Some(CategoryMatch {
                        category: entry.category.clone(),
                        keyword: keyword.clone(),
                        score,
                    });
                }
            }
        }

        match &best {
            Some(found) => debug!(
                category = %found.category,
                keyword = %found.keyword,
                score = found.score,
                "resolved product category"
            ),
            None => debug!(input_len = free_text.len(), "no product category above threshold"),
        }

        best
    }
}
