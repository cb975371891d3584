//! Cutting table coverage: every allowed row, the vòng gate and the chained
//! penalty flow through the ledger.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::combinations::{detect_combination, CardCombination};
use crate::domain::cutting::{can_cut, CutChain, CutResult, CutRule};
use crate::domain::heo_tracking::{self, SingleHeoTrackingState};
use crate::domain::penalty::{
    initialize_penalty_tracking, player_net_penalty_score, record_cutting_with_transfer,
};
use crate::domain::rules::PlayerId;
use crate::domain::vong::{self, VongState};
use crate::errors::domain::ValidationKind;
use crate::errors::error_code::ErrorCode;

const THREE_PAIRS_LOW: &[&str] = &["3S", "3C", "4S", "4C", "5S", "5C"];
const THREE_PAIRS_HIGH: &[&str] = &["8D", "8H", "9D", "9H", "TD", "TH"];
const FOUR_PAIRS_LOW: &[&str] = &["3D", "3H", "4D", "4H", "5D", "5H", "6D", "6H"];
const FOUR_PAIRS_HIGH: &[&str] = &["9S", "9C", "TS", "TC", "JS", "JC", "QS", "QC"];
const QUADS_SEVEN: &[&str] = &["7S", "7C", "7D", "7H"];
const QUADS_KING: &[&str] = &["KS", "KC", "KD", "KH"];

fn combo(tokens: &[&str]) -> CardCombination {
    let cards = try_parse_cards(tokens).expect("hardcoded valid card tokens");
    detect_combination(&cards).expect("hardcoded valid combination")
}

/// Four players, player 0 leads, nobody else has acted yet.
fn fresh_vong() -> VongState {
    vong::initialize(4, 0).unwrap()
}

/// Four players, player 0 leads, players 2 and 3 passed: player 1 has vòng.
fn vong_for_player_one() -> VongState {
    let s = vong::mark_player_played(&fresh_vong(), 2).unwrap();
    vong::mark_player_played(&s, 3).unwrap()
}

fn heo_run(tokens: &[&str]) -> SingleHeoTrackingState {
    tokens
        .iter()
        .fold(heo_tracking::initialize(4).unwrap(), |s, tok| {
            heo_tracking::record_play(&s, &combo(&[*tok]))
        })
}

fn no_heos() -> SingleHeoTrackingState {
    heo_tracking::initialize(4).unwrap()
}

fn cut(
    cutter: &[&str],
    target: &[&str],
    vong_state: &VongState,
    player: PlayerId,
    tracking: &SingleHeoTrackingState,
) -> CutResult {
    can_cut(&combo(cutter), &combo(target), vong_state, player, tracking).unwrap()
}

fn assert_rejected(result: &CutResult, code: ErrorCode) {
    assert!(!result.can_cut, "expected rejection {code}, got {result:?}");
    assert_eq!(result.error_code, Some(code));
    assert!(result.reason.as_deref().is_some_and(|r| !r.is_empty()));
    assert_eq!(result.penalty_points, None);
}

fn assert_allowed(result: &CutResult, rule: CutRule, penalty: u32, heo_count: usize) {
    assert!(result.can_cut, "expected {rule:?}, got {result:?}");
    assert_eq!(result.rule, Some(rule));
    assert_eq!(result.penalty_points, Some(penalty));
    assert_eq!(result.heo_count, Some(heo_count));
    assert_eq!(result.error_code, None);
}

#[test]
fn triple_heo_is_immune_to_every_cutter() {
    let target = ["2S", "2C", "2D"];
    let vong_state = vong_for_player_one();
    for cutter in [THREE_PAIRS_HIGH, FOUR_PAIRS_HIGH, QUADS_KING] {
        let result = cut(cutter, &target, &vong_state, 1, &no_heos());
        assert_rejected(&result, ErrorCode::ThreeHeoImmune);
    }
}

#[test]
fn only_power_combinations_cut() {
    let vong_state = vong_for_player_one();
    let tracking = heo_run(&["2H"]);
    for cutter in [
        &["AS"][..],
        &["AS", "AH"],
        &["AS", "AC", "AH"],
        &["3S", "4S", "5S", "6S"],
        &["3S", "3C", "4S", "4C", "5S", "5C", "6S", "6C", "7S", "7C"],
    ] {
        let result = cut(cutter, &["2H"], &vong_state, 1, &tracking);
        assert_rejected(&result, ErrorCode::CannotCut);
    }
}

#[test]
fn three_pairs_need_vong() {
    let tracking = heo_run(&["2H"]);
    let without = cut(THREE_PAIRS_LOW, &["2H"], &fresh_vong(), 1, &tracking);
    assert_rejected(&without, ErrorCode::VongRequired);

    let with = cut(THREE_PAIRS_LOW, &["2H"], &vong_for_player_one(), 1, &tracking);
    assert_allowed(&with, CutRule::ThreePairsOverHeos, 2, 1);
}

#[test]
fn four_of_kind_needs_vong() {
    let tracking = heo_run(&["2S"]);
    let without = cut(QUADS_SEVEN, &["2S"], &fresh_vong(), 1, &tracking);
    assert_rejected(&without, ErrorCode::VongRequired);

    let with = cut(QUADS_SEVEN, &["2S"], &vong_for_player_one(), 1, &tracking);
    assert_allowed(&with, CutRule::FourOfKindOverHeos, 1, 1);
}

#[test]
fn four_pairs_never_need_vong() {
    let tracking = heo_run(&["2D"]);
    let result = cut(FOUR_PAIRS_LOW, &["2D"], &fresh_vong(), 1, &tracking);
    assert_allowed(&result, CutRule::FourPairsOverHeo, 2, 1);

    let over_quads = cut(FOUR_PAIRS_LOW, QUADS_KING, &fresh_vong(), 1, &no_heos());
    assert_allowed(&over_quads, CutRule::FourPairsOverFourOfKind, 4, 0);
}

#[test]
fn heo_run_penalty_sums_every_tracked_heo() {
    let tracking = heo_run(&["2S", "2D", "2H"]);
    let result = cut(THREE_PAIRS_LOW, &["2H"], &vong_for_player_one(), 1, &tracking);
    assert_allowed(&result, CutRule::ThreePairsOverHeos, 5, 3);

    let quads = cut(QUADS_SEVEN, &["2H"], &vong_for_player_one(), 1, &tracking);
    assert_allowed(&quads, CutRule::FourOfKindOverHeos, 5, 3);
}

#[test]
fn untracked_heo_counts_alone() {
    // Tracker does not end with the target: only the target itself is cut
    let tracking = heo_run(&["2S"]);
    let result = cut(THREE_PAIRS_LOW, &["2H"], &vong_for_player_one(), 1, &tracking);
    assert_allowed(&result, CutRule::ThreePairsOverHeos, 2, 1);
}

#[test]
fn four_pairs_cut_exactly_one_single_heo() {
    let tracking = heo_run(&["2C", "2H"]);
    let result = cut(FOUR_PAIRS_LOW, &["2H"], &fresh_vong(), 1, &tracking);
    assert_rejected(&result, ErrorCode::InvalidCutTarget);
}

#[test]
fn four_pairs_cut_pair_of_heos() {
    let result = cut(FOUR_PAIRS_LOW, &["2D", "2H"], &fresh_vong(), 1, &no_heos());
    assert_allowed(&result, CutRule::FourPairsOverPairOfHeos, 4, 0);

    let mixed = cut(FOUR_PAIRS_LOW, &["2S", "2H"], &fresh_vong(), 1, &no_heos());
    assert_allowed(&mixed, CutRule::FourPairsOverPairOfHeos, 3, 0);

    let three = cut(THREE_PAIRS_HIGH, &["2D", "2H"], &vong_for_player_one(), 1, &no_heos());
    assert_rejected(&three, ErrorCode::InvalidCutTarget);

    let quads = cut(QUADS_KING, &["2D", "2H"], &vong_for_player_one(), 1, &no_heos());
    assert_rejected(&quads, ErrorCode::InvalidCutTarget);
}

#[test]
fn three_pairs_cut_only_lower_three_pairs() {
    let vong_state = vong_for_player_one();
    let up = cut(THREE_PAIRS_HIGH, THREE_PAIRS_LOW, &vong_state, 1, &no_heos());
    assert_allowed(&up, CutRule::ThreePairsOverThreePairs, 4, 0);

    let down = cut(THREE_PAIRS_LOW, THREE_PAIRS_HIGH, &vong_state, 1, &no_heos());
    assert_rejected(&down, ErrorCode::CutTargetNotLower);

    let quads = cut(THREE_PAIRS_HIGH, QUADS_SEVEN, &vong_state, 1, &no_heos());
    assert_rejected(&quads, ErrorCode::InvalidCutTarget);

    let four_pairs = cut(THREE_PAIRS_HIGH, FOUR_PAIRS_LOW, &vong_state, 1, &no_heos());
    assert_rejected(&four_pairs, ErrorCode::InvalidCutTarget);
}

#[test]
fn four_of_kind_table() {
    let vong_state = vong_for_player_one();
    // three pairs of any rank
    let any = cut(QUADS_SEVEN, THREE_PAIRS_HIGH, &vong_state, 1, &no_heos());
    assert_allowed(&any, CutRule::FourOfKindOverThreePairs, 4, 0);

    let up = cut(QUADS_KING, QUADS_SEVEN, &vong_state, 1, &no_heos());
    assert_allowed(&up, CutRule::FourOfKindOverFourOfKind, 4, 0);

    let down = cut(QUADS_SEVEN, QUADS_KING, &vong_state, 1, &no_heos());
    assert_rejected(&down, ErrorCode::CutTargetNotLower);

    let four_pairs = cut(QUADS_KING, FOUR_PAIRS_LOW, &vong_state, 1, &no_heos());
    assert_rejected(&four_pairs, ErrorCode::InvalidCutTarget);
}

#[test]
fn four_pairs_table() {
    let v = fresh_vong();
    let over_three = cut(FOUR_PAIRS_LOW, THREE_PAIRS_HIGH, &v, 1, &no_heos());
    assert_allowed(&over_three, CutRule::FourPairsOverThreePairs, 4, 0);

    let up = cut(FOUR_PAIRS_HIGH, FOUR_PAIRS_LOW, &v, 1, &no_heos());
    assert_allowed(&up, CutRule::FourPairsOverFourPairs, 4, 0);

    let down = cut(FOUR_PAIRS_LOW, FOUR_PAIRS_HIGH, &v, 1, &no_heos());
    assert_rejected(&down, ErrorCode::CutTargetNotLower);
}

#[test]
fn ordinary_targets_cannot_be_cut() {
    let v = vong_for_player_one();
    for target in [
        &["AH"][..],
        &["KS", "KH"],
        &["3S", "4S", "5S"],
        &["9S", "9C", "9D"],
    ] {
        for cutter in [THREE_PAIRS_LOW, FOUR_PAIRS_LOW, QUADS_SEVEN] {
            let result = cut(cutter, target, &v, 1, &no_heos());
            assert_rejected(&result, ErrorCode::InvalidCutTarget);
        }
    }
}

#[test]
fn bad_player_index_is_an_error() {
    let err = can_cut(
        &combo(FOUR_PAIRS_LOW),
        &combo(&["2H"]),
        &fresh_vong(),
        4,
        &no_heos(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::PlayerIndexOutOfRange);
}

#[test]
fn trackers_for_different_table_sizes_are_an_error() {
    let three_player_heos = heo_tracking::initialize(3).unwrap();
    let err = can_cut(
        &combo(FOUR_PAIRS_LOW),
        &combo(&["2H"]),
        &fresh_vong(),
        1,
        &three_player_heos,
    )
    .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::InvalidPlayerCount);
}

#[test]
fn oversized_heo_run_is_an_error() {
    let heos = try_parse_cards(["2S", "2C", "2D", "2H", "2H"]).unwrap();
    let tracking = SingleHeoTrackingState::from_parts(4, heos).unwrap();
    let err = can_cut(
        &combo(THREE_PAIRS_LOW),
        &combo(&["2H"]),
        &vong_for_player_one(),
        1,
        &tracking,
    )
    .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::TooManyTrackedHeos);
}

#[test]
fn cut_result_serializes_camel_case() {
    let result = cut(FOUR_PAIRS_LOW, &["2D"], &fresh_vong(), 1, &heo_run(&["2D"]));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "canCut": true,
            "penaltyPoints": 2,
            "heoCount": 1,
            "rule": "FOUR_PAIRS_OVER_HEO"
        })
    );

    let rejected = cut(FOUR_PAIRS_LOW, &["2S", "2C", "2D"], &fresh_vong(), 1, &no_heos());
    let json = serde_json::to_value(&rejected).unwrap();
    assert_eq!(json["canCut"], false);
    assert_eq!(json["errorCode"], "THREE_HEO_IMMUNE");
    assert!(json.get("penaltyPoints").is_none());
}

#[test]
fn chained_cut_passes_collected_penalty_down() {
    // Player 0 plays 2H, player 1 cuts with three pairs, player 2 cuts player 1
    // with four pairs and collects the base penalty plus what player 1 held.
    let tracking = heo_run(&["2H"]);
    let first = cut(THREE_PAIRS_LOW, &["2H"], &vong_for_player_one(), 1, &tracking);
    let first_penalty = first.penalty_points.unwrap();

    let chain = CutChain::default();
    let ledger = initialize_penalty_tracking(4).unwrap();
    let ledger =
        record_cutting_with_transfer(&ledger, 0, 1, first_penalty, chain.inherited_for(0))
            .unwrap();
    let chain = chain.record(1, first_penalty);
    assert_eq!(chain.owner(), Some(1));
    assert_eq!(chain.carried(), 2);

    // The standing cut is a new contest led by player 1
    let contest = vong::reset(&fresh_vong(), 1).unwrap();
    let second = cut(FOUR_PAIRS_HIGH, THREE_PAIRS_LOW, &contest, 2, &no_heos());
    assert_allowed(&second, CutRule::FourPairsOverThreePairs, 4, 0);

    let inherited = chain.inherited_for(1);
    assert_eq!(inherited, 2);
    assert_eq!(chain.inherited_for(0), 0);
    let ledger = record_cutting_with_transfer(
        &ledger,
        1,
        2,
        second.penalty_points.unwrap(),
        inherited,
    )
    .unwrap();
    let chain = chain.record(2, 4 + inherited);

    assert_eq!(player_net_penalty_score(&ledger, 0), Ok(-2));
    assert_eq!(player_net_penalty_score(&ledger, 1), Ok(2 - 6));
    assert_eq!(player_net_penalty_score(&ledger, 2), Ok(6));
    assert_eq!(player_net_penalty_score(&ledger, 3), Ok(0));
    assert_eq!(chain.inherited_for(2), 6);
}
