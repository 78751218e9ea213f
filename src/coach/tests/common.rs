use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

use crate::coach::{
    Answers, CategoryKeywordTable, CoachPayload, CoachService, CoachTables, Dimension,
    EmissionTable, FirstPicker, Picker,
};
use crate::config::CoachConfig;

/// Always takes the last candidate, the mirror image of [`FirstPicker`].
pub(super) struct LastPicker;

impl Picker for LastPicker {
    fn pick(&self, len: usize) -> usize {
        len - 1
    }
}

pub(super) fn standard_tables() -> Arc<CoachTables> {
    Arc::new(CoachTables::standard())
}

pub(super) fn tables_with_keywords(keywords: CategoryKeywordTable) -> Arc<CoachTables> {
    Arc::new(CoachTables {
        keywords,
        ..CoachTables::standard()
    })
}

pub(super) fn tables_with_emissions(emissions: EmissionTable) -> Arc<CoachTables> {
    Arc::new(CoachTables {
        emissions,
        ..CoachTables::standard()
    })
}

pub(super) fn build_service() -> CoachService<FirstPicker> {
    CoachService::new(
        standard_tables(),
        CoachConfig::default(),
        Arc::new(FirstPicker),
    )
}

pub(super) fn answers(transport: &str, shopping: &str, electronics: &str) -> Answers {
    Answers::from([
        (Dimension::Transport, transport.to_string()),
        (Dimension::Shopping, shopping.to_string()),
        (Dimension::ElectronicsFrequency, electronics.to_string()),
    ])
}

pub(super) fn payload(value: Value) -> CoachPayload {
    serde_json::from_value(value).expect("payload deserializes")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
