use formpoint::pricing::{point_quote, PointQuote};
use proptest::prelude::*;

#[test]
fn degenerate_shapes_quote_zero() {
    assert_eq!(point_quote(0, 50, 100.0), PointQuote::ZERO);
    assert_eq!(point_quote(-3, 50, 100.0), PointQuote::ZERO);
    assert_eq!(point_quote(5, 0, 100.0), PointQuote::ZERO);
    assert_eq!(point_quote(5, -1, 100.0), PointQuote::ZERO);
    assert_eq!(point_quote(5, 50, -0.5), PointQuote::ZERO);
}

#[test]
fn small_survey_matches_reference() {
    let quote = point_quote(5, 50, 100.0);
    assert_eq!(quote.point_per_question, 1.0);
    assert_eq!(quote.point_per_response, 1.3);
    assert_eq!(quote.fee, 3900);
    assert_eq!(quote.total, 8900);
}

#[test]
fn zero_reward_survey_charges_fee_only() {
    let quote = point_quote(35, 600, 0.0);
    assert_eq!(quote.point_per_question, 1.6);
    assert_eq!(quote.point_per_response, 1.8);
    assert_eq!(quote.fee, 8640);
    assert_eq!(quote.total, 8640);
}

#[test]
fn question_tier_boundaries_are_inclusive() {
    assert_eq!(point_quote(10, 10, 0.0).point_per_question, 1.0);
    assert_eq!(point_quote(11, 10, 0.0).point_per_question, 1.3);
    assert_eq!(point_quote(30, 10, 0.0).point_per_question, 1.3);
    assert_eq!(point_quote(31, 10, 0.0).point_per_question, 1.6);
    assert_eq!(point_quote(60, 10, 0.0).point_per_question, 1.6);
    assert_eq!(point_quote(61, 10, 0.0).point_per_question, 1.8);
    assert_eq!(point_quote(100, 10, 0.0).point_per_question, 1.8);
    assert_eq!(point_quote(101, 10, 0.0).point_per_question, 2.0);
}

#[test]
fn response_tier_boundaries_are_inclusive() {
    assert_eq!(point_quote(1, 10, 0.0).point_per_response, 1.0);
    assert_eq!(point_quote(1, 11, 0.0).point_per_response, 1.3);
    assert_eq!(point_quote(1, 100, 0.0).point_per_response, 1.3);
    assert_eq!(point_quote(1, 101, 0.0).point_per_response, 1.6);
    assert_eq!(point_quote(1, 500, 0.0).point_per_response, 1.6);
    assert_eq!(point_quote(1, 501, 0.0).point_per_response, 1.8);
    assert_eq!(point_quote(1, 1000, 0.0).point_per_response, 1.8);
    assert_eq!(point_quote(1, 1001, 0.0).point_per_response, 2.0);
}

proptest! {
    #[test]
    fn any_degenerate_input_is_zero(
        question_cnt in -1000i64..=0,
        max_response in -1000i64..=2000,
        reward in -500.0f64..500.0,
    ) {
        prop_assert_eq!(point_quote(question_cnt, max_response, reward), PointQuote::ZERO);
    }

    #[test]
    fn total_is_reward_pool_plus_fee(
        question_cnt in 1i64..=300,
        max_response in 1i64..=3000,
        reward in 0.0f64..1000.0,
    ) {
        let quote = point_quote(question_cnt, max_response, reward);
        let rates = [1.0, 1.3, 1.6, 1.8, 2.0];
        prop_assert!(rates.contains(&quote.point_per_question));
        prop_assert!(rates.contains(&quote.point_per_response));
        let fee = (quote.point_per_question * quote.point_per_response * 3000.0).round() as i64;
        prop_assert_eq!(quote.fee, fee);
        let total = (max_response as f64 * reward + fee as f64).round() as i64;
        prop_assert_eq!(quote.total, total);
    }
}
