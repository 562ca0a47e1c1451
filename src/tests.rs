#[cfg(test)]
mod unit_tests {
    use crate::decompose::decompose;
    use crate::errors::GuobiaoError;
    use crate::parser::{format_hand, parse_hand};
    use crate::rules::{rule, MatchOutcome, RuleId, CATALOG, NUM_RULES};
    use crate::score::{score, ScoreResult};
    use crate::tile::Tile;
    use crate::types::{Context, HuResult, MeldKind, Wind};
    use crate::wait::compute_wait;

    fn tiles(text: &str) -> Vec<Tile> {
        parse_hand(text).unwrap()
    }

    fn ids(tiles: &[Tile]) -> Vec<u8> {
        tiles.iter().map(|t| t.id()).collect()
    }

    fn achieved_ids(result: &ScoreResult) -> Vec<RuleId> {
        result.achieved.iter().map(|&(id, _)| id).collect()
    }

    // ---- parser ----

    #[test]
    fn test_parse_digit_runs() {
        let hand = tiles("123m456p789s");
        assert_eq!(ids(&hand), vec![0, 1, 2, 12, 13, 14, 24, 25, 26]);
    }

    #[test]
    fn test_parse_honors() {
        let hand = tiles("ESWNPFC");
        assert_eq!(ids(&hand), vec![27, 28, 29, 30, 31, 32, 33]);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let hand = tiles("11m  EE\n55p");
        assert_eq!(ids(&hand), vec![0, 0, 27, 27, 13, 13]);
    }

    #[test]
    fn test_parse_preserves_order() {
        // Parsing does not sort; normalization happens at scoring time.
        let hand = tiles("9m1mE1p");
        assert_eq!(ids(&hand), vec![8, 0, 27, 9]);
    }

    #[test]
    fn test_parse_trailing_digits() {
        let err = parse_hand("123m45").unwrap_err();
        assert!(matches!(err, GuobiaoError::Parse { .. }));
    }

    #[test]
    fn test_parse_suit_without_digits() {
        assert!(parse_hand("m").is_err());
        assert!(parse_hand("123mp").is_err());
    }

    #[test]
    fn test_parse_digits_before_honor() {
        assert!(parse_hand("1E").is_err());
    }

    #[test]
    fn test_parse_unknown_character() {
        assert!(parse_hand("123x").is_err());
        // Zero is not a valid rank digit.
        assert!(parse_hand("0m").is_err());
    }

    #[test]
    fn test_format_groups_suits() {
        let hand = tiles("1m2m3m1p2p3pEE");
        assert_eq!(format_hand(&hand), "123m123pEE");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        for text in ["123m456p789sEEPP", "11122233m99sFFC", "ESWN55m123s12p"] {
            assert_eq!(format_hand(&tiles(text)), text, "roundtrip for {text}");
        }
    }

    // ---- decomposition ----

    #[test]
    fn test_decompose_standard_hand() {
        // 111m 234m 567p EEE + 99s pair
        let hand = tiles("1m1m1m2m3m4m5p6p7p9s9sEEE");
        let result = decompose(&hand).unwrap();
        let d = match result {
            HuResult::Winning(d) => d,
            HuResult::NotWinning => panic!("hand should win"),
        };
        assert_eq!(d.melds.len(), 4);
        assert_eq!(d.melds[0].kind, MeldKind::Triplet);
        assert_eq!(d.melds[0].low().name(), "1m");
        assert_eq!(d.melds[1].kind, MeldKind::Run);
        assert_eq!(d.melds[1].low().name(), "2m");
        assert_eq!(d.melds[2].kind, MeldKind::Run);
        assert_eq!(d.melds[2].low().name(), "5p");
        assert_eq!(d.melds[3].kind, MeldKind::Triplet);
        assert_eq!(d.melds[3].low().name(), "E");
        assert_eq!(ids(&d.pair), vec![26, 26]);
    }

    #[test]
    fn test_decompose_seven_pairs() {
        let hand = tiles("1m1m3m3m5p5p7p7p9s9sEEFF");
        let result = decompose(&hand).unwrap();
        let d = match result {
            HuResult::Winning(d) => d,
            HuResult::NotWinning => panic!("hand should win"),
        };
        assert!(d.is_seven_pairs());
        assert!(d.melds.is_empty());
        assert_eq!(d.pair.len(), 14);
    }

    #[test]
    fn test_decompose_seven_pairs_allows_four_of_a_kind() {
        // Four 1m count as two pairs of the same kind.
        let hand = tiles("1m1m1m1m5p5p7p7p9s9sEEFF");
        let result = decompose(&hand).unwrap();
        assert!(result.is_winning());
        match result {
            HuResult::Winning(d) => assert!(d.is_seven_pairs()),
            HuResult::NotWinning => unreachable!(),
        }
    }

    #[test]
    fn test_decompose_backtracks_through_pair_choices() {
        // The greedy pair-first attempts on 1m and 2m both dead-end; the
        // search must fall back to triplets before finding 789m + 99m.
        let hand = tiles("1m1m1m2m2m2m3m3m3m7m8m9m9m9m");
        assert!(decompose(&hand).unwrap().is_winning());
    }

    #[test]
    fn test_decompose_prefers_triplets_over_triple_run() {
        // 123m 123m 123m also splits as 111m 222m 333m; the histogram
        // search finds the triplet form first.
        let hand = tiles("1m1m1m2m2m2m3m3m3m7s8s9sPP");
        let result = decompose(&hand).unwrap();
        let d = match result {
            HuResult::Winning(d) => d,
            HuResult::NotWinning => panic!("hand should win"),
        };
        let kinds: Vec<MeldKind> = d.melds.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MeldKind::Triplet,
                MeldKind::Triplet,
                MeldKind::Triplet,
                MeldKind::Run
            ]
        );
    }

    #[test]
    fn test_decompose_not_winning() {
        let hand = tiles("1m1m2m3p4p6p7p9p1s2s3s4sEE");
        assert_eq!(decompose(&hand).unwrap(), HuResult::NotWinning);
    }

    #[test]
    fn test_decompose_wrong_size() {
        let hand = tiles("1m2m3m");
        let err = decompose(&hand).unwrap_err();
        assert_eq!(
            err,
            GuobiaoError::InvalidHandSize {
                expected: 14,
                actual: 3
            }
        );
    }

    // ---- waits ----

    #[test]
    fn test_wait_single_tile() {
        // 123m 456m 789m 123p + lone 5s waits only on its pair.
        let hand = tiles("1m2m3m4m5m6m7m8m9m1p2p3p5s");
        let waits = compute_wait(&hand).unwrap();
        assert_eq!(ids(&waits), vec![22]);
    }

    #[test]
    fn test_wait_nine_gates_full() {
        // The pure nine gates shape waits on every rank of its suit.
        let hand = tiles("1m1m1m2m3m4m5m6m7m8m9m9m9m");
        let waits = compute_wait(&hand).unwrap();
        assert_eq!(ids(&waits), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_wait_seven_pairs() {
        let hand = tiles("1m1m4m4m2p2p5p5p3s3sEEP");
        let waits = compute_wait(&hand).unwrap();
        assert_eq!(ids(&waits), vec![31]);
    }

    #[test]
    fn test_wait_none() {
        let hand = tiles("1m4m7m2p5p8p3s6s9sESWN");
        let waits = compute_wait(&hand).unwrap();
        assert!(waits.is_empty());
    }

    #[test]
    fn test_wait_wrong_size() {
        let hand = tiles("1m2m3m4m5m6m7m8m9m1p2p3p5s5s");
        let err = compute_wait(&hand).unwrap_err();
        assert_eq!(
            err,
            GuobiaoError::InvalidHandSize {
                expected: 13,
                actual: 14
            }
        );
    }

    // ---- scoring ----

    #[test]
    fn test_score_big_four_winds() {
        // EEE SSS WWW NNN 11m: big four winds plus the terminal-and-honor
        // and half-flush patterns; the wind pung patterns are suppressed.
        let result = score(&tiles("EEESSSWWWNNN1m1m"), &Context::default()).unwrap();
        assert!(result.is_winning());
        assert_eq!(result.total_score, 126);
        let matched = achieved_ids(&result);
        assert_eq!(
            matched,
            vec![
                RuleId::BigFourWinds,
                RuleId::AllTerminalsAndHonors,
                RuleId::HalfFlush
            ]
        );
        assert!(!matched.contains(&RuleId::BigThreeWinds));
        assert!(!matched.contains(&RuleId::AllPungs));
        assert!(!matched.contains(&RuleId::PrevalentWind));
        assert!(!matched.contains(&RuleId::SeatWind));
        assert!(!matched.contains(&RuleId::PungOfTerminalsOrHonors));
    }

    #[test]
    fn test_score_no_pattern_is_minus_one() {
        let result = score(&tiles("1m1m2m3p4p6p7p9p1s2s3s4sEE"), &Context::default()).unwrap();
        assert!(!result.is_winning());
        assert_eq!(result.total_score, -1);
        assert!(result.achieved.is_empty());
    }

    #[test]
    fn test_score_thirteen_orphans_without_winning_shape() {
        // No meld decomposition exists, but the pattern is structural.
        let result = score(&tiles("1m1m9m1p9p1s9sESWNPFC"), &Context::default()).unwrap();
        assert!(!result.is_winning());
        assert_eq!(result.total_score, 88);
        assert_eq!(achieved_ids(&result), vec![RuleId::ThirteenOrphans]);
    }

    #[test]
    fn test_score_winning_hand_can_total_zero() {
        // 222m 456p 234s 678s EE matches nothing, but it wins, so the
        // not-winning sentinel must not apply.
        let result = score(&tiles("2m2m2m4p5p6p2s3s4s6s7s8sEE"), &Context::default()).unwrap();
        assert!(result.is_winning());
        assert_eq!(result.total_score, 0);
        assert!(result.achieved.is_empty());
    }

    #[test]
    fn test_score_wind_context() {
        let hand = tiles("EEE1m2m3m4p5p6p7s8s9s5s5s");
        // East round, East seat: both wind patterns fire on the EEE pung.
        let both = score(&hand, &Context::default()).unwrap();
        assert_eq!(both.total_score, 12);
        assert_eq!(
            achieved_ids(&both),
            vec![RuleId::MixedStraight, RuleId::PrevalentWind, RuleId::SeatWind]
        );

        // Seat moved to South: only the round wind matches.
        let seat_south = Context {
            seat_wind: Wind::South,
            ..Context::default()
        };
        let round_only = score(&hand, &seat_south).unwrap();
        assert_eq!(round_only.total_score, 10);
        assert!(!achieved_ids(&round_only).contains(&RuleId::SeatWind));

        // Neither wind matches: the EEE pung falls through to the
        // terminal-or-honor pung pattern.
        let south_south = Context {
            round_wind: Wind::South,
            seat_wind: Wind::South,
            ..Context::default()
        };
        let neither = score(&hand, &south_south).unwrap();
        assert_eq!(neither.total_score, 9);
        assert!(achieved_ids(&neither).contains(&RuleId::PungOfTerminalsOrHonors));
    }

    #[test]
    fn test_score_dragon_pung_multiplicity() {
        // PPP FFF 123m 456p 99m: two dragon pungs score both the paired
        // pattern and the per-pung pattern twice.
        let result = score(&tiles("PPPFFF1m2m3m4p5p6p9m9m"), &Context::default()).unwrap();
        assert_eq!(result.total_score, 11);
        assert_eq!(
            result.achieved,
            vec![
                (RuleId::TwoDragonPungs, 1),
                (RuleId::DragonPung, 2),
                (RuleId::OneVoidedSuit, 1)
            ]
        );
    }

    #[test]
    fn test_score_declared_kongs() {
        let hand = tiles("EEE1m2m3m4p5p6p7s8s9s5s5s");
        let one_kong = Context {
            declared_kongs: 1,
            round_wind: Wind::South,
            seat_wind: Wind::North,
            ..Context::default()
        };
        let result = score(&hand, &one_kong).unwrap();
        assert!(achieved_ids(&result).contains(&RuleId::MeldedKong));
        assert!(!achieved_ids(&result).contains(&RuleId::TwoMeldedKongs));
    }

    #[test]
    fn test_score_normalizes_hand() {
        let result = score(&tiles("9s9sEEE1m2m3m5p6p7p1m1m1m"), &Context::default()).unwrap();
        let sorted_ids = ids(&result.normalized_hand);
        let mut expected = sorted_ids.clone();
        expected.sort_unstable();
        assert_eq!(sorted_ids, expected);
    }

    #[test]
    fn test_score_wrong_size() {
        let err = score(&tiles("1m2m3m"), &Context::default()).unwrap_err();
        assert!(matches!(err, GuobiaoError::InvalidHandSize { .. }));
    }

    // ---- catalog integrity ----

    #[test]
    fn test_catalog_positions_match_ids() {
        assert_eq!(CATALOG.len(), NUM_RULES);
        for (i, entry) in CATALOG.iter().enumerate() {
            assert_eq!(entry.id.index(), i, "entry {} out of place", entry.name);
        }
    }

    #[test]
    fn test_catalog_scores_descend() {
        for pair in CATALOG.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{} ({}) listed after {} ({})",
                pair[1].name,
                pair[1].score,
                pair[0].name,
                pair[0].score
            );
        }
    }

    #[test]
    fn test_catalog_no_self_suppression() {
        for entry in CATALOG.iter() {
            assert!(
                !entry.suppresses.contains(&entry.id),
                "{} suppresses itself",
                entry.name
            );
        }
    }

    #[test]
    fn test_rule_lookup() {
        assert_eq!(rule(RuleId::BigFourWinds).name, "大四喜");
        assert_eq!(rule(RuleId::SevenPairs).score, 24);
        assert_eq!(RuleId::SelfDrawn.display_name(), "自摸");
        assert_eq!(RuleId::SelfDrawn.index(), NUM_RULES - 1);
    }

    #[test]
    fn test_match_outcome_helpers() {
        assert_eq!(MatchOutcome::when(false), MatchOutcome::NoMatch);
        assert_eq!(MatchOutcome::when(true), MatchOutcome::Match(1));
        assert_eq!(MatchOutcome::times(0), MatchOutcome::NoMatch);
        assert_eq!(MatchOutcome::times(3), MatchOutcome::Match(3));
    }

    // ---- types ----

    #[test]
    fn test_wind_tiles() {
        assert_eq!(Wind::East.tile().name(), "E");
        assert_eq!(Wind::South.tile().name(), "S");
        assert_eq!(Wind::West.tile().name(), "W");
        assert_eq!(Wind::North.tile().name(), "N");
    }

    #[test]
    fn test_default_context() {
        let ctx = Context::default();
        assert_eq!(ctx.declared_kongs, 0);
        assert_eq!(ctx.round_wind, Wind::East);
        assert_eq!(ctx.seat_wind, Wind::East);
        assert_eq!(ctx.flower_count, 0);
    }

    #[test]
    fn test_tile_roundtrip_through_serde() {
        let hand = tiles("1m9m5pESWC");
        let json = serde_json::to_string(&hand).unwrap();
        let back: Vec<Tile> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hand);
    }
}
