use super::tables::{Dimension, EmissionTable};
use serde::Serialize;

const INTRO: &str = "🌍 Welcome to EcoFit Carbon Coach! Let's find out your digital footprint with a few simple questions.";
const NOTE: &str = "After completing, we'll show your footprint and tips tailored just for you! 🌱";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub id: Dimension,
    pub text: &'static str,
    pub options: Vec<String>,
}

/// Question sheet for the footprint quiz; options mirror the emission table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizView {
    pub intro: &'static str,
    pub questions: Vec<QuizQuestion>,
    pub note: &'static str,
}

impl QuizView {
    pub fn from_emissions(emissions: &EmissionTable) -> Self {
        let questions = Dimension::ordered()
            .into_iter()
            .map(|dimension| QuizQuestion {
                id: dimension,
                text: dimension.question(),
                options: emissions
                    .labels(dimension)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect();

        Self {
            intro: INTRO,
            questions,
            note: NOTE,
        }
    }
}
