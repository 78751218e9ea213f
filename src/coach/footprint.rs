use super::error::CoachError;
use super::picker::Picker;
use super::resolver::CategoryMatch;
use super::tables::{Alternative, CoachTables, Dimension, EmissionTable};
use crate::config::CoachConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Chosen label per quiz dimension.
pub type Answers = BTreeMap<Dimension, String>;

/// Raw sums below this land in the top tier.
pub const TOP_TIER_CEILING: f64 = 2.5;
/// Raw sums below this (and not top tier) are good.
pub const GOOD_CEILING: f64 = 4.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    TopTier,
    Good,
    NeedsImprovement,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score < TOP_TIER_CEILING {
            Self::TopTier
        } else if score < GOOD_CEILING {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn praise(self) -> &'static str {
        match self {
            Self::TopTier => "Wow! You are in the top 5% eco-conscious people! 🌟",
            Self::Good => "Good job! You're doing well! 💪",
            Self::NeedsImprovement => "There's room for improvement! 🌱",
        }
    }
}

/// Outcome of a completed quiz. `carbon_score` is the unscaled weight sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub carbon_score: f64,
    pub tier: Tier,
    pub praise: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResult {
    pub category: String,
    pub carbon_score: f64,
    pub quantity: u32,
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeOutcome {
    Ahead,
    Trails,
    Tie,
}

impl ChallengeOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ahead => "You are more eco-friendly! 🌟",
            Self::Trails => "Your friend is more eco-conscious. 💪",
            Self::Tie => "Same footprint. Team effort! 🤝",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeResult {
    pub outcome: ChallengeOutcome,
    pub message: String,
    /// How far the user trails, as a share of their own score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_percent: Option<f64>,
}

/// Stateless scorer over the shared emission, tip, and catalog tables.
#[derive(Debug, Clone)]
pub struct FootprintEvaluator {
    tables: Arc<CoachTables>,
    tips_per_dimension: usize,
}

impl FootprintEvaluator {
    pub fn new(tables: Arc<CoachTables>, config: CoachConfig) -> Self {
        Self {
            tables,
            tips_per_dimension: config.tips_per_dimension,
        }
    }

    /// Sums the weight of every answer and attaches tips for each chosen label.
    pub fn evaluate<P>(&self, answers: &Answers, picker: &P) -> Result<ScoreResult, CoachError>
    where
        P: Picker + ?Sized,
    {
        let chosen = checked_answers(&self.tables.emissions, answers)?;
        let raw: f64 = chosen.iter().map(|(_, _, weight)| weight).sum();
        let tier = Tier::from_score(raw);

        let mut tips = Vec::new();
        for (dimension, label, _) in &chosen {
            let candidates = self.tables.tips.tips(*dimension, label);
            let picked = picker.pick_distinct(candidates.len(), self.tips_per_dimension);
            tips.extend(picked.into_iter().map(|index| candidates[index].clone()));
        }

        Ok(ScoreResult {
            carbon_score: round_to(raw, 2),
            tier,
            praise: tier.praise().to_string(),
            tips,
        })
    }

    /// Catalog entry for a resolved category, scaled by `quantity`.
    ///
    /// All alternatives are returned in catalog order; no relative-improvement
    /// filter is applied.
    pub fn lookup_product(
        &self,
        found: Option<&CategoryMatch>,
        quantity: u32,
    ) -> Option<ProductResult> {
        let found = found?;
        let entry = self.tables.catalog.get(&found.category)?;
        let factor = f64::from(quantity);

        Some(ProductResult {
            category: found.category.clone(),
            carbon_score: round_to(entry.carbon_score * factor, 2),
            quantity,
            alternatives: entry
                .alternatives
                .iter()
                .map(|alternative| Alternative {
                    carbon_score: round_to(alternative.carbon_score * factor, 2),
                    ..alternative.clone()
                })
                .collect(),
        })
    }

    /// Lower footprints win. The trailing gap is measured against `my_score`;
    /// a zero `my_score` reports a full 100% gap instead of dividing.
    pub fn compare(&self, my_score: f64, friend_score: f64) -> ChallengeResult {
        let (outcome, gap_percent) = if my_score < friend_score {
            (ChallengeOutcome::Ahead, None)
        } else if my_score > friend_score {
            let gap = if my_score == 0.0 {
                100.0
            } else {
                round_to((my_score - friend_score) / my_score * 100.0, 1)
            };
            (ChallengeOutcome::Trails, Some(gap))
        } else {
            (ChallengeOutcome::Tie, None)
        };

        ChallengeResult {
            outcome,
            message: outcome.message().to_string(),
            gap_percent,
        }
    }
}

/// Checks every dimension in quiz order and returns `(dimension, label, weight)`.
fn checked_answers<'a>(
    emissions: &EmissionTable,
    answers: &'a Answers,
) -> Result<Vec<(Dimension, &'a str, f64)>, CoachError> {
    Dimension::ordered()
        .into_iter()
        .map(|dimension| -> Result<_, CoachError> {
            let label = answers
                .get(&dimension)
                .ok_or(CoachError::MissingAnswer { dimension })?;
            let weight = emissions
                .weight(dimension, label)
                .ok_or_else(|| CoachError::InvalidChoice {
                    dimension,
                    label: label.clone(),
                })?;
            Ok((dimension, label.as_str(), weight))
        })
        .collect()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
