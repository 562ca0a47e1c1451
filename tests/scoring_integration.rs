//! End-to-end scoring tests over the public API.
//!
//! Each case walks the full pipeline (parse, decompose, catalog walk)
//! and pins the exact total and matched-pattern list, including the
//! quirks that fall out of evaluating meld patterns against a
//! seven-pairs decomposition with no melds.

use guobiao_engine::{parse_hand, score, Context, RuleId, ScoreResult};

fn score_text(text: &str) -> ScoreResult {
    let hand = parse_hand(text).unwrap();
    score(&hand, &Context::default()).unwrap()
}

fn achieved(result: &ScoreResult) -> Vec<(RuleId, u32)> {
    result.achieved.clone()
}

#[test]
fn seven_shifted_pairs_totals_100() {
    // 1m-7m pairs. The meld-shape patterns quantify over an empty meld
    // list, so the pung, outside-hand, and all-chow patterns all match
    // vacuously alongside the 88-point pair run.
    let result = score_text("1m1m2m2m3m3m4m4m5m5m6m6m7m7m");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::SevenShiftedPairs, 1),
            (RuleId::AllPungs, 1),
            (RuleId::OutsideHand, 1),
            (RuleId::AllChows, 1),
        ]
    );
    assert_eq!(result.total_score, 100);
}

#[test]
fn mixed_seven_pairs_totals_40() {
    let result = score_text("1m1m7m7m3p3p9p9p5s5sEEPP");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::SevenPairs, 1),
            (RuleId::AllPungs, 1),
            (RuleId::AllTypes, 1),
            (RuleId::OutsideHand, 1),
        ]
    );
    assert_eq!(result.total_score, 40);
}

#[test]
fn seven_pairs_shape_beats_meld_split() {
    // 234s x4 + EE also splits into four runs and a pair, but the
    // seven-pairs check runs first, so the run patterns never see melds.
    let result = score_text("2s3s4s2s3s4s2s3s4s2s3s4sEE");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::SevenPairs, 1),
            (RuleId::AllPungs, 1),
            (RuleId::HalfFlush, 1),
            (RuleId::OutsideHand, 1),
        ]
    );
    assert_eq!(result.total_score, 40);
}

#[test]
fn nine_gates_totals_exactly_88() {
    // Completed on the 5m. Everything else the hand touches is listed
    // in the nine-gates suppression set.
    let result = score_text("1m1m1m2m3m4m5m5m6m7m8m9m9m9m");
    assert!(result.is_winning());
    assert_eq!(achieved(&result), vec![(RuleId::NineGates, 1)]);
    assert_eq!(result.total_score, 88);
}

#[test]
fn all_green_totals_118() {
    let result = score_text("2s2s2s3s3s3s4s4s4s6s6s6sFF");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::AllGreen, 1),
            (RuleId::PureShiftedPungs, 1),
            (RuleId::AllPungs, 1),
        ]
    );
    assert_eq!(result.total_score, 118);
}

#[test]
fn full_flush_with_pure_straight_totals_42() {
    let result = score_text("1m2m3m4m5m6m7m8m9m5m6m7m2m2m");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::FullFlush, 1),
            (RuleId::PureStraight, 1),
            (RuleId::AllChows, 1),
        ]
    );
    assert_eq!(result.total_score, 42);
}

#[test]
fn three_suited_terminal_chows_totals_16() {
    let result = score_text("1m2m3m7m8m9m1p2p3p7p8p9p5s5s");
    assert!(result.is_winning());
    assert_eq!(achieved(&result), vec![(RuleId::ThreeSuitedTerminalChows, 1)]);
    assert_eq!(result.total_score, 16);
}

#[test]
fn upper_tiles_with_chow_pairings_totals_35() {
    // 789m 789m 789p 789s + 99s: the mixed triple chow counts once via
    // drop-one matching, the identical manzu runs pair up once.
    let result = score_text("7m8m9m7m8m9m7p8p9p7s8s9s9s9s");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::UpperTiles, 1),
            (RuleId::MixedTripleChow, 1),
            (RuleId::AllChows, 1),
            (RuleId::PureDoubleChow, 1),
        ]
    );
    assert_eq!(result.total_score, 35);
}

#[test]
fn greedy_split_scores_shifted_pungs_not_triple_chow() {
    // 123m x3 decomposes as 111m 222m 333m first, so the hand scores the
    // pung ladder instead of the identical-run pattern.
    let result = score_text("1m1m1m2m2m2m3m3m3m7s8s9sPP");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::PureShiftedPungs, 1),
            (RuleId::PungOfTerminalsOrHonors, 1),
            (RuleId::OneVoidedSuit, 1),
        ]
    );
    assert_eq!(result.total_score, 26);
}

#[test]
fn chow_pair_counters_use_multiplicities() {
    // 234m 234m 567m 999p EE: one identical-run pairing, two short
    // straights (each 234m against 567m).
    let result = score_text("2m3m4m2m3m4m5m6m7m9p9p9pEE");
    assert!(result.is_winning());
    assert_eq!(
        achieved(&result),
        vec![
            (RuleId::PureDoubleChow, 1),
            (RuleId::ShortStraight, 2),
            (RuleId::PungOfTerminalsOrHonors, 1),
            (RuleId::OneVoidedSuit, 1),
        ]
    );
    assert_eq!(result.total_score, 5);
}

#[test]
fn knitted_tiles_score_without_winning_shape() {
    // Canonical suit assignment.
    let canonical = score_text("1m4m7m2p5p8p3s6s9sESWNP");
    assert!(!canonical.is_winning());
    assert_eq!(
        achieved(&canonical),
        vec![(RuleId::LesserHonorsAndKnittedTiles, 1)]
    );
    assert_eq!(canonical.total_score, 12);

    // Permuted suit assignment still fits.
    let permuted = score_text("1m4m7m3p6p9p2s5s8sESWNF");
    assert_eq!(permuted.total_score, 12);

    // 8s breaks the 3-6-9 class; nothing matches and the hand does not
    // win, so the sentinel applies.
    let broken = score_text("1m4m7m2p5p8p3s6s8sESWNP");
    assert_eq!(broken.total_score, -1);
    assert!(broken.achieved.is_empty());
}

#[test]
fn little_three_dragons_needs_dragon_pair() {
    // Two dragon pungs with a suited pair score the pung patterns only.
    let no_pair = score_text("PPPFFF1m2m3m4p5p6p9s9s");
    assert!(!achieved(&no_pair)
        .iter()
        .any(|&(id, _)| id == RuleId::LittleThreeDragons));

    // Swapping the pair to the third dragon completes the pattern.
    let with_pair = score_text("PPPFFF1m2m3m4p5p6pCC");
    assert!(achieved(&with_pair)
        .iter()
        .any(|&(id, _)| id == RuleId::LittleThreeDragons));
    assert!(!achieved(&with_pair)
        .iter()
        .any(|&(id, _)| id == RuleId::TwoDragonPungs));
    assert!(!achieved(&with_pair)
        .iter()
        .any(|&(id, _)| id == RuleId::DragonPung));
}

#[test]
fn serialized_result_round_trips() {
    let result = score_text("1m1m1m2m3m4m5p6p7p9s9sEEE");
    let json = serde_json::to_string(&result).unwrap();
    let back: ScoreResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
