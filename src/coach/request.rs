use super::error::CoachError;
use super::footprint::Answers;
use super::tables::{Dimension, EmissionTable};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Longest product text accepted for category matching, in characters.
pub const MAX_PRODUCT_CHARS: usize = 500;

/// Any JSON object posted to `/mcp/carbon_score`.
///
/// Fields are only read, and type-checked, by the mode that needs them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CoachPayload {
    fields: Map<String, Value>,
}

impl CoachPayload {
    /// Parses a request body. Anything but a JSON object is malformed.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// A present, non-null field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        present(&self.fields, name)
    }
}

impl From<Map<String, Value>> for CoachPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// A validated request. Each variant carries only what its mode needs.
#[derive(Debug, Clone, PartialEq)]
pub enum CoachRequest {
    Quiz,
    Calculate(Answers),
    Product { text: String, quantity: u32 },
    Challenge { my_score: f64, friend_score: f64 },
}

impl CoachRequest {
    /// Validates `payload` against the emission table before any scoring runs.
    pub fn from_payload(
        payload: CoachPayload,
        emissions: &EmissionTable,
    ) -> Result<Self, CoachError> {
        let mode = match payload.field("mode") {
            None => return Err(CoachError::MissingMode),
            Some(Value::String(mode)) => mode.trim().to_lowercase(),
            Some(other) => return Err(CoachError::UnknownMode(other.to_string())),
        };

        match mode.as_str() {
            "" => Err(CoachError::MissingMode),
            "quiz" => Ok(Self::Quiz),
            "calculate" => calculate_answers(&payload, emissions).map(Self::Calculate),
            "product" => {
                let text = match payload.field("product") {
                    Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
                    _ => return Err(CoachError::MissingProduct),
                };
                if text.chars().count() > MAX_PRODUCT_CHARS {
                    return Err(CoachError::ProductTooLong {
                        limit: MAX_PRODUCT_CHARS,
                    });
                }
                let quantity = match payload.field("quantity") {
                    None => 1,
                    Some(value) => value
                        .as_u64()
                        .and_then(|quantity| u32::try_from(quantity).ok())
                        .filter(|quantity| *quantity >= 1)
                        .ok_or(CoachError::InvalidQuantity)?,
                };
                Ok(Self::Product { text, quantity })
            }
            "challenge" => {
                let (Some(my_score), Some(friend_score)) =
                    (payload.field("my_score"), payload.field("friend_score"))
                else {
                    return Err(CoachError::MissingScores);
                };
                Ok(Self::Challenge {
                    my_score: checked_score("my_score", my_score)?,
                    friend_score: checked_score("friend_score", friend_score)?,
                })
            }
            other => Err(CoachError::UnknownMode(other.to_string())),
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Calculate(_) => "calculate",
            Self::Product { .. } => "product",
            Self::Challenge { .. } => "challenge",
        }
    }
}

/// Reads the three answers in quiz order, preferring a nested `answers` object.
/// Blank strings count as missing.
fn calculate_answers(
    payload: &CoachPayload,
    emissions: &EmissionTable,
) -> Result<Answers, CoachError> {
    let source = match payload.field("answers") {
        Some(Value::Object(nested)) => nested,
        _ => &payload.fields,
    };

    let mut answers = Answers::new();
    for dimension in Dimension::ordered() {
        let label = match present(source, dimension.key()) {
            None => return Err(CoachError::MissingAnswer { dimension }),
            Some(Value::String(label)) if label.trim().is_empty() => {
                return Err(CoachError::MissingAnswer { dimension });
            }
            Some(Value::String(label)) => label.clone(),
            Some(other) => other.to_string(),
        };
        if !emissions.contains(dimension, &label) {
            return Err(CoachError::InvalidChoice { dimension, label });
        }
        answers.insert(dimension, label);
    }
    Ok(answers)
}

fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

fn checked_score(field: &'static str, value: &Value) -> Result<f64, CoachError> {
    value
        .as_f64()
        .filter(|score| score.is_finite() && *score >= 0.0)
        .ok_or(CoachError::InvalidScore { field })
}
