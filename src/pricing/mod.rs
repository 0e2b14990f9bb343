//! Point budget and platform fee quotes for survey creation.
//!
//! The tier boundaries and rounding must match the platform's own fee
//! validation exactly, or a locally quoted survey gets rejected server-side.

use serde::Serialize;

/// Fixed base price of the survey product, in points.
pub const BASE_SURVEY_PRICE: f64 = 3000.0;

/// Breakdown of the points required to commission a survey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointQuote {
    /// Total points charged up front: reward pool plus platform fee.
    pub total: i64,
    /// Platform fee derived from both rate tiers.
    pub fee: i64,
    /// Rate tier selected by the question count.
    pub point_per_question: f64,
    /// Rate tier selected by the response cap.
    pub point_per_response: f64,
}

impl PointQuote {
    /// The all-zero quote returned for degenerate inputs.
    pub const ZERO: Self = Self {
        total: 0,
        fee: 0,
        point_per_question: 0.0,
        point_per_response: 0.0,
    };
}

/// Quote the point budget for a prospective survey.
///
/// Pure and total: degenerate shapes (no questions, no response slots, or a
/// negative reward) yield [`PointQuote::ZERO`] instead of an error.
pub fn point_quote(question_cnt: i64, max_response: i64, reward: f64) -> PointQuote {
    if question_cnt <= 0 || max_response <= 0 || reward < 0.0 {
        return PointQuote::ZERO;
    }

    let point_per_question = question_rate(question_cnt);
    let point_per_response = response_rate(max_response);

    let fee = (point_per_question * point_per_response * BASE_SURVEY_PRICE).round() as i64;
    let total = (max_response as f64 * reward + fee as f64).round() as i64;

    PointQuote {
        total,
        fee,
        point_per_question,
        point_per_response,
    }
}

/// Per-question rate tier; upper bounds are inclusive.
fn question_rate(question_cnt: i64) -> f64 {
    match question_cnt {
        ..=10 => 1.0,
        11..=30 => 1.3,
        31..=60 => 1.6,
        61..=100 => 1.8,
        _ => 2.0,
    }
}

/// Per-response rate tier; upper bounds are inclusive.
fn response_rate(max_response: i64) -> f64 {
    match max_response {
        ..=10 => 1.0,
        11..=100 => 1.3,
        101..=500 => 1.6,
        501..=1000 => 1.8,
        _ => 2.0,
    }
}
