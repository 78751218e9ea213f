use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::error::CoachError;
use super::footprint::{ChallengeResult, FootprintEvaluator, ProductResult, ScoreResult};
use super::picker::{choose, Picker};
use super::quiz::QuizView;
use super::request::{CoachPayload, CoachRequest};
use super::resolver::CategoryResolver;
use super::tables::CoachTables;
use crate::config::CoachConfig;

const DEFAULT_FALLBACK: &str = "Hmm, I didn't quite get that. Could you try another input? 🌱";

/// Product lookup echoed back with the text the client sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub product: String,
    #[serde(flatten)]
    pub result: ProductResult,
}

/// Body returned for a handled request, serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CoachReply {
    Quiz(QuizView),
    Score(ScoreResult),
    Product(ProductView),
    Challenge(ChallengeResult),
    Message { message: String },
}

/// Service composing the category resolver, footprint evaluator, and picker.
pub struct CoachService<P> {
    tables: Arc<CoachTables>,
    resolver: CategoryResolver,
    evaluator: FootprintEvaluator,
    picker: Arc<P>,
}

impl<P> CoachService<P>
where
    P: Picker + 'static,
{
    pub fn new(tables: Arc<CoachTables>, config: CoachConfig, picker: Arc<P>) -> Self {
        Self {
            resolver: CategoryResolver::new(tables.clone()),
            evaluator: FootprintEvaluator::new(tables.clone(), config),
            tables,
            picker,
        }
    }

    pub fn tables(&self) -> &CoachTables {
        &self.tables
    }

    /// Validate a raw payload at the boundary, then answer it.
    pub fn respond(&self, payload: CoachPayload) -> Result<CoachReply, CoachError> {
        let request = CoachRequest::from_payload(payload, &self.tables.emissions)?;
        self.handle(request)
    }

    pub fn handle(&self, request: CoachRequest) -> Result<CoachReply, CoachError> {
        let mode = request.mode();
        let reply = match request {
            CoachRequest::Quiz => {
                CoachReply::Quiz(QuizView::from_emissions(&self.tables.emissions))
            }
            CoachRequest::Calculate(answers) => {
                let result = self.evaluator.evaluate(&answers, self.picker.as_ref())?;
                debug!(score = result.carbon_score, tier = ?result.tier, "footprint scored");
                CoachReply::Score(result)
            }
            CoachRequest::Product { text, quantity } => {
                let found = self.resolver.resolve(&text);
                match self.evaluator.lookup_product(found.as_ref(), quantity) {
                    Some(result) => CoachReply::Product(ProductView {
                        product: text,
                        result,
                    }),
                    None => CoachReply::Message {
                        message: self.fallback_message(),
                    },
                }
            }
            CoachRequest::Challenge {
                my_score,
                friend_score,
            } => CoachReply::Challenge(self.evaluator.compare(my_score, friend_score)),
        };

        info!(mode, "coach request handled");
        Ok(reply)
    }

    /// One of the configured fallback messages, chosen through the picker.
    pub fn fallback_message(&self) -> String {
        choose(self.picker.as_ref(), &self.tables.fallback_messages)
            .cloned()
            .unwrap_or_else(|| DEFAULT_FALLBACK.to_string())
    }
}
