use super::common::*;
use crate::coach::{CoachError, CoachRequest, Dimension, MAX_PRODUCT_CHARS};
use serde_json::json;

fn parse(value: serde_json::Value) -> Result<CoachRequest, CoachError> {
    CoachRequest::from_payload(payload(value), &standard_tables().emissions)
}

#[test]
fn mode_is_case_insensitive_and_required() {
    assert_eq!(parse(json!({ "mode": "QUIZ" })), Ok(CoachRequest::Quiz));
    assert_eq!(parse(json!({})), Err(CoachError::MissingMode));
    assert_eq!(parse(json!({ "mode": "  " })), Err(CoachError::MissingMode));
    assert_eq!(
        parse(json!({ "mode": "Dance" })),
        Err(CoachError::UnknownMode("dance".to_string()))
    );
}

#[test]
fn calculate_accepts_flat_fields() {
    let request = parse(json!({
        "mode": "calculate",
        "transport": "Bus",
        "shopping": "Home & Living",
        "electronics_freq": "Rarely",
    }))
    .expect("flat answers valid");

    assert_eq!(
        request,
        CoachRequest::Calculate(answers("Bus", "Home & Living", "Rarely"))
    );
}

#[test]
fn nested_answers_take_precedence_over_flat_fields() {
    let request = parse(json!({
        "mode": "calculate",
        "transport": "Car",
        "answers": {
            "transport": "Walking",
            "shopping": "Groceries & Food",
            "electronics_freq": "Every 2-3 years",
        },
    }))
    .expect("nested answers valid");

    assert_eq!(
        request,
        CoachRequest::Calculate(answers("Walking", "Groceries & Food", "Every 2-3 years"))
    );
}

#[test]
fn calculate_rejects_missing_and_blank_answers() {
    assert_eq!(
        parse(json!({ "mode": "calculate", "transport": "Car", "shopping": "Home & Living" })),
        Err(CoachError::MissingAnswer {
            dimension: Dimension::ElectronicsFrequency
        })
    );
    assert_eq!(
        parse(json!({
            "mode": "calculate",
            "transport": "",
            "shopping": "Home & Living",
            "electronics_freq": "Rarely",
        })),
        Err(CoachError::MissingAnswer {
            dimension: Dimension::Transport
        })
    );
}

#[test]
fn calculate_rejects_unknown_labels_at_the_boundary() {
    assert_eq!(
        parse(json!({
            "mode": "calculate",
            "transport": "Car",
            "shopping": "Yachts",
            "electronics_freq": "Rarely",
        })),
        Err(CoachError::InvalidChoice {
            dimension: Dimension::Shopping,
            label: "Yachts".to_string()
        })
    );
}

#[test]
fn product_requires_text_and_positive_quantity() {
    assert_eq!(
        parse(json!({ "mode": "product", "product": "old iPhone" })),
        Ok(CoachRequest::Product {
            text: "old iPhone".to_string(),
            quantity: 1
        })
    );
    assert_eq!(
        parse(json!({ "mode": "product", "product": "jeans", "quantity": 2 })),
        Ok(CoachRequest::Product {
            text: "jeans".to_string(),
            quantity: 2
        })
    );
    assert_eq!(
        parse(json!({ "mode": "product" })),
        Err(CoachError::MissingProduct)
    );
    assert_eq!(
        parse(json!({ "mode": "product", "product": "" })),
        Err(CoachError::MissingProduct)
    );
    assert_eq!(
        parse(json!({ "mode": "product", "product": "jeans", "quantity": 0 })),
        Err(CoachError::InvalidQuantity)
    );
}

#[test]
fn challenge_requires_both_non_negative_scores() {
    assert_eq!(
        parse(json!({ "mode": "challenge", "my_score": 3, "friend_score": 7.5 })),
        Ok(CoachRequest::Challenge {
            my_score: 3.0,
            friend_score: 7.5
        })
    );
    assert_eq!(
        parse(json!({ "mode": "challenge", "my_score": 3 })),
        Err(CoachError::MissingScores)
    );
    assert_eq!(
        parse(json!({ "mode": "challenge", "my_score": -1, "friend_score": 2 })),
        Err(CoachError::InvalidScore { field: "my_score" })
    );
}

#[test]
fn field_types_are_checked_only_by_the_mode_that_reads_them() {
    assert_eq!(
        parse(json!({ "mode": "quiz", "product": 123, "my_score": "high" })),
        Ok(CoachRequest::Quiz)
    );
    assert_eq!(
        parse(json!({ "mode": "product", "product": "jeans", "quantity": -1 })),
        Err(CoachError::InvalidQuantity)
    );
    assert_eq!(
        parse(json!({ "mode": "product", "product": "jeans", "quantity": 1.5 })),
        Err(CoachError::InvalidQuantity)
    );
    assert_eq!(
        parse(json!({ "mode": "product", "product": "jeans", "quantity": null })),
        Ok(CoachRequest::Product {
            text: "jeans".to_string(),
            quantity: 1
        })
    );
    assert_eq!(
        parse(json!({ "mode": "challenge", "my_score": 4, "friend_score": "7" })),
        Err(CoachError::InvalidScore {
            field: "friend_score"
        })
    );
    assert_eq!(
        parse(json!({ "mode": 3 })),
        Err(CoachError::UnknownMode("3".to_string()))
    );
}

#[test]
fn product_text_length_is_capped() {
    let longest = "a".repeat(MAX_PRODUCT_CHARS);
    assert!(parse(json!({ "mode": "product", "product": longest })).is_ok());

    let too_long = "a".repeat(MAX_PRODUCT_CHARS + 1);
    assert_eq!(
        parse(json!({ "mode": "product", "product": too_long })),
        Err(CoachError::ProductTooLong {
            limit: MAX_PRODUCT_CHARS
        })
    );
}
