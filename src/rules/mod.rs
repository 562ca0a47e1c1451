//! The fan catalog: eighty scoring patterns evaluated against a hand.
//!
//! The catalog is a static table ordered by descending base score, with
//! ties keeping their traditional listing order. Each entry carries the
//! pattern predicate and the set of patterns it suppresses when it
//! matches. Patterns whose conditions depend on table state the engine
//! does not track (win source, concealment, wait shape, kong visibility)
//! are present but never match.

mod predicates;

use serde::{Deserialize, Serialize};

use crate::tile::{Tile, NUM_TILE_TYPES};
use crate::types::{tile_counts, Context, HuResult, Meld};

// ---------------------------------------------------------------------------
// Evaluation view
// ---------------------------------------------------------------------------

/// Precomputed view of one hand evaluation, shared by every predicate.
///
/// `melds` and `pair` are borrowed from the decomposition when the hand
/// wins and are empty otherwise. A seven-pairs win has no melds and all
/// fourteen tiles in `pair`.
pub struct Eval<'a> {
    /// The hand in canonical id order.
    pub tiles: &'a [Tile],
    /// Per-kind histogram of `tiles`.
    pub counts: [u8; NUM_TILE_TYPES],
    pub hu: &'a HuResult,
    pub melds: &'a [Meld],
    pub pair: &'a [Tile],
    pub ctx: &'a Context,
}

impl<'a> Eval<'a> {
    pub fn new(tiles: &'a [Tile], hu: &'a HuResult, ctx: &'a Context) -> Self {
        let (melds, pair): (&[Meld], &[Tile]) = match hu {
            HuResult::Winning(d) => (&d.melds, &d.pair),
            HuResult::NotWinning => (&[], &[]),
        };
        Eval {
            tiles,
            counts: tile_counts(tiles),
            hu,
            melds,
            pair,
            ctx,
        }
    }

    #[inline]
    pub fn winning(&self) -> bool {
        self.hu.is_winning()
    }
}

// ---------------------------------------------------------------------------
// Match outcome
// ---------------------------------------------------------------------------

/// Result of one predicate: no match, or a match with a multiplier.
/// Boolean patterns always match with multiplier 1; counted patterns
/// (pungs of a class, chow pairings, kongs) match once per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    NoMatch,
    Match(u32),
}

impl MatchOutcome {
    #[inline]
    pub fn when(cond: bool) -> Self {
        if cond {
            MatchOutcome::Match(1)
        } else {
            MatchOutcome::NoMatch
        }
    }

    #[inline]
    pub fn times(n: u32) -> Self {
        if n == 0 {
            MatchOutcome::NoMatch
        } else {
            MatchOutcome::Match(n)
        }
    }
}

// ---------------------------------------------------------------------------
// Rule identifiers
// ---------------------------------------------------------------------------

/// Stable identifiers for the eighty catalog patterns. Discriminants are
/// the catalog positions, so `CATALOG[id as usize].id == id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RuleId {
    BigFourWinds = 0,
    BigThreeDragons = 1,
    AllGreen = 2,
    NineGates = 3,
    FourKongs = 4,
    SevenShiftedPairs = 5,
    ThirteenOrphans = 6,
    AllTerminals = 7,
    LittleFourWinds = 8,
    LittleThreeDragons = 9,
    AllHonors = 10,
    FourConcealedPungs = 11,
    PureTerminalChows = 12,
    QuadrupleChow = 13,
    FourPureShiftedPungs = 14,
    FourPureShiftedChows = 15,
    ThreeKongs = 16,
    AllTerminalsAndHonors = 17,
    SevenPairs = 18,
    GreaterHonorsAndKnittedTiles = 19,
    AllEvenPungs = 20,
    FullFlush = 21,
    PureTripleChow = 22,
    PureShiftedPungs = 23,
    UpperTiles = 24,
    MiddleTiles = 25,
    LowerTiles = 26,
    PureStraight = 27,
    ThreeSuitedTerminalChows = 28,
    PureShiftedChows = 29,
    AllFives = 30,
    TriplePung = 31,
    ThreeConcealedPungs = 32,
    LesserHonorsAndKnittedTiles = 33,
    KnittedStraight = 34,
    UpperFour = 35,
    LowerFour = 36,
    BigThreeWinds = 37,
    MixedStraight = 38,
    ReversibleTiles = 39,
    MixedTripleChow = 40,
    MixedShiftedPungs = 41,
    ChickenHand = 42,
    LastTileDraw = 43,
    LastTileClaim = 44,
    OutWithReplacementTile = 45,
    RobbingTheKong = 46,
    AllPungs = 47,
    HalfFlush = 48,
    MixedShiftedChows = 49,
    AllTypes = 50,
    MeldedHand = 51,
    TwoConcealedKongs = 52,
    TwoDragonPungs = 53,
    OutsideHand = 54,
    FullyConcealedHand = 55,
    TwoMeldedKongs = 56,
    LastTile = 57,
    DragonPung = 58,
    PrevalentWind = 59,
    SeatWind = 60,
    ConcealedHand = 61,
    AllChows = 62,
    TileHog = 63,
    DoublePung = 64,
    TwoConcealedPungs = 65,
    ConcealedKong = 66,
    AllSimples = 67,
    PureDoubleChow = 68,
    MixedDoubleChow = 69,
    ShortStraight = 70,
    TwoTerminalChows = 71,
    PungOfTerminalsOrHonors = 72,
    MeldedKong = 73,
    OneVoidedSuit = 74,
    NoHonorTiles = 75,
    EdgeWait = 76,
    ClosedWait = 77,
    SingleWait = 78,
    SelfDrawn = 79,
}

/// Number of catalog entries.
pub const NUM_RULES: usize = 80;

impl RuleId {
    /// Catalog position of this pattern.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Traditional display name of this pattern.
    pub fn display_name(self) -> &'static str {
        CATALOG[self.index()].name
    }
}

// ---------------------------------------------------------------------------
// The catalog
// ---------------------------------------------------------------------------

/// One catalog entry: a pattern, its base score, and the patterns it
/// suppresses by name when it matches.
pub struct Rule {
    pub id: RuleId,
    pub name: &'static str,
    pub score: u32,
    pub check: fn(&Eval) -> MatchOutcome,
    pub suppresses: &'static [RuleId],
}

/// Looks up a catalog entry by id.
#[inline]
pub fn rule(id: RuleId) -> &'static Rule {
    &CATALOG[id.index()]
}

pub static CATALOG: [Rule; NUM_RULES] = [
    Rule {
        id: RuleId::BigFourWinds,
        name: "大四喜",
        score: 88,
        check: predicates::big_four_winds,
        suppresses: &[
            RuleId::BigThreeWinds,
            RuleId::AllPungs,
            RuleId::PrevalentWind,
            RuleId::SeatWind,
            RuleId::PungOfTerminalsOrHonors,
        ],
    },
    Rule {
        id: RuleId::BigThreeDragons,
        name: "大三元",
        score: 88,
        check: predicates::big_three_dragons,
        suppresses: &[
            RuleId::TwoDragonPungs,
            RuleId::DragonPung,
            RuleId::PungOfTerminalsOrHonors,
        ],
    },
    Rule {
        id: RuleId::AllGreen,
        name: "绿一色",
        score: 88,
        check: predicates::all_green,
        suppresses: &[RuleId::HalfFlush],
    },
    Rule {
        id: RuleId::NineGates,
        name: "九莲宝灯",
        score: 88,
        check: predicates::nine_gates,
        suppresses: &[
            RuleId::FullFlush,
            RuleId::FullyConcealedHand,
            RuleId::ConcealedHand,
            RuleId::NoHonorTiles,
            RuleId::PungOfTerminalsOrHonors,
        ],
    },
    Rule {
        id: RuleId::FourKongs,
        name: "四杠",
        score: 88,
        check: predicates::four_kongs,
        suppresses: &[RuleId::AllPungs, RuleId::SingleWait],
    },
    Rule {
        id: RuleId::SevenShiftedPairs,
        name: "连七对",
        score: 88,
        check: predicates::seven_shifted_pairs,
        suppresses: &[
            RuleId::FullFlush,
            RuleId::SevenPairs,
            RuleId::FullyConcealedHand,
            RuleId::ConcealedHand,
            RuleId::NoHonorTiles,
            RuleId::SingleWait,
        ],
    },
    Rule {
        id: RuleId::ThirteenOrphans,
        name: "十三幺",
        score: 88,
        check: predicates::thirteen_orphans,
        suppresses: &[
            RuleId::AllTerminalsAndHonors,
            RuleId::AllTypes,
            RuleId::FullyConcealedHand,
            RuleId::ConcealedHand,
            RuleId::SingleWait,
        ],
    },
    Rule {
        id: RuleId::AllTerminals,
        name: "清幺九",
        score: 64,
        check: predicates::all_terminals,
        suppresses: &[
            RuleId::AllPungs,
            RuleId::OutsideHand,
            RuleId::DoublePung,
            RuleId::PungOfTerminalsOrHonors,
            RuleId::NoHonorTiles,
        ],
    },
    Rule {
        id: RuleId::LittleFourWinds,
        name: "小四喜",
        score: 64,
        check: predicates::little_four_winds,
        suppresses: &[RuleId::BigThreeWinds, RuleId::PungOfTerminalsOrHonors],
    },
    Rule {
        id: RuleId::LittleThreeDragons,
        name: "小三元",
        score: 64,
        check: predicates::little_three_dragons,
        suppresses: &[
            RuleId::TwoDragonPungs,
            RuleId::DragonPung,
            RuleId::PungOfTerminalsOrHonors,
        ],
    },
    Rule {
        id: RuleId::AllHonors,
        name: "字一色",
        score: 64,
        check: predicates::all_honors,
        suppresses: &[
            RuleId::AllPungs,
            RuleId::OutsideHand,
            RuleId::PungOfTerminalsOrHonors,
        ],
    },
    Rule {
        id: RuleId::FourConcealedPungs,
        name: "四暗刻",
        score: 64,
        check: predicates::unmodeled,
        suppresses: &[
            RuleId::AllPungs,
            RuleId::FullyConcealedHand,
            RuleId::ConcealedHand,
        ],
    },
    Rule {
        id: RuleId::PureTerminalChows,
        name: "一色双龙会",
        score: 64,
        check: predicates::pure_terminal_chows,
        suppresses: &[
            RuleId::SevenPairs,
            RuleId::FullFlush,
            RuleId::AllChows,
            RuleId::PureDoubleChow,
            RuleId::TwoTerminalChows,
            RuleId::NoHonorTiles,
        ],
    },
    Rule {
        id: RuleId::QuadrupleChow,
        name: "一色四同顺",
        score: 48,
        check: predicates::quadruple_chow,
        suppresses: &[
            RuleId::PureTripleChow,
            RuleId::PureShiftedPungs,
            RuleId::TileHog,
            RuleId::PureDoubleChow,
        ],
    },
    Rule {
        id: RuleId::FourPureShiftedPungs,
        name: "一色四节高",
        score: 48,
        check: predicates::four_pure_shifted_pungs,
        suppresses: &[
            RuleId::PureTripleChow,
            RuleId::PureShiftedPungs,
            RuleId::AllPungs,
        ],
    },
    Rule {
        id: RuleId::FourPureShiftedChows,
        name: "一色四步高",
        score: 32,
        check: predicates::four_pure_shifted_chows,
        suppresses: &[
            RuleId::PureShiftedChows,
            RuleId::ShortStraight,
            RuleId::TwoTerminalChows,
        ],
    },
    Rule {
        id: RuleId::ThreeKongs,
        name: "三杠",
        score: 32,
        check: predicates::three_kongs,
        suppresses: &[],
    },
    Rule {
        id: RuleId::AllTerminalsAndHonors,
        name: "混幺九",
        score: 32,
        check: predicates::all_terminals_and_honors,
        suppresses: &[
            RuleId::AllPungs,
            RuleId::OutsideHand,
            RuleId::PungOfTerminalsOrHonors,
        ],
    },
    Rule {
        id: RuleId::SevenPairs,
        name: "七对",
        score: 24,
        check: predicates::seven_pairs,
        suppresses: &[RuleId::ConcealedHand, RuleId::SingleWait],
    },
    Rule {
        id: RuleId::GreaterHonorsAndKnittedTiles,
        name: "七星不靠",
        score: 24,
        check: predicates::unmodeled,
        suppresses: &[
            RuleId::LesserHonorsAndKnittedTiles,
            RuleId::AllTypes,
            RuleId::FullyConcealedHand,
            RuleId::ConcealedHand,
        ],
    },
    Rule {
        id: RuleId::AllEvenPungs,
        name: "全双刻",
        score: 24,
        check: predicates::all_even_pungs,
        suppresses: &[RuleId::AllPungs, RuleId::AllSimples, RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::FullFlush,
        name: "清一色",
        score: 24,
        check: predicates::full_flush,
        suppresses: &[RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::PureTripleChow,
        name: "一色三同顺",
        score: 24,
        check: predicates::pure_triple_chow,
        suppresses: &[RuleId::PureShiftedPungs, RuleId::PureDoubleChow],
    },
    Rule {
        id: RuleId::PureShiftedPungs,
        name: "一色三节高",
        score: 24,
        check: predicates::pure_shifted_pungs,
        suppresses: &[RuleId::PureTripleChow],
    },
    Rule {
        id: RuleId::UpperTiles,
        name: "全大",
        score: 24,
        check: predicates::upper_tiles,
        suppresses: &[RuleId::UpperFour, RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::MiddleTiles,
        name: "全中",
        score: 24,
        check: predicates::middle_tiles,
        suppresses: &[RuleId::AllSimples, RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::LowerTiles,
        name: "全小",
        score: 24,
        check: predicates::lower_tiles,
        suppresses: &[RuleId::LowerFour, RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::PureStraight,
        name: "清龙",
        score: 16,
        check: predicates::pure_straight,
        suppresses: &[RuleId::ShortStraight, RuleId::TwoTerminalChows],
    },
    Rule {
        id: RuleId::ThreeSuitedTerminalChows,
        name: "三色双龙会",
        score: 16,
        check: predicates::three_suited_terminal_chows,
        suppresses: &[
            RuleId::AllChows,
            RuleId::TwoTerminalChows,
            RuleId::MixedDoubleChow,
            RuleId::NoHonorTiles,
        ],
    },
    Rule {
        id: RuleId::PureShiftedChows,
        name: "一色三步高",
        score: 16,
        check: predicates::pure_shifted_chows,
        suppresses: &[],
    },
    Rule {
        id: RuleId::AllFives,
        name: "全带五",
        score: 16,
        check: predicates::all_fives,
        suppresses: &[RuleId::AllSimples, RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::TriplePung,
        name: "三同刻",
        score: 16,
        check: predicates::triple_pung,
        suppresses: &[RuleId::DoublePung],
    },
    Rule {
        id: RuleId::ThreeConcealedPungs,
        name: "三暗刻",
        score: 16,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::LesserHonorsAndKnittedTiles,
        name: "全不靠",
        score: 12,
        check: predicates::lesser_honors_and_knitted_tiles,
        suppresses: &[
            RuleId::AllTypes,
            RuleId::FullyConcealedHand,
            RuleId::ConcealedHand,
        ],
    },
    Rule {
        id: RuleId::KnittedStraight,
        name: "组合龙",
        score: 12,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::UpperFour,
        name: "大于五",
        score: 12,
        check: predicates::upper_four,
        suppresses: &[RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::LowerFour,
        name: "小于五",
        score: 12,
        check: predicates::lower_four,
        suppresses: &[RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::BigThreeWinds,
        name: "三风刻",
        score: 12,
        check: predicates::big_three_winds,
        suppresses: &[RuleId::PungOfTerminalsOrHonors],
    },
    Rule {
        id: RuleId::MixedStraight,
        name: "花龙",
        score: 8,
        check: predicates::mixed_straight,
        suppresses: &[],
    },
    Rule {
        id: RuleId::ReversibleTiles,
        name: "推不倒",
        score: 8,
        check: predicates::reversible_tiles,
        suppresses: &[RuleId::OneVoidedSuit],
    },
    Rule {
        id: RuleId::MixedTripleChow,
        name: "三色三同顺",
        score: 8,
        check: predicates::mixed_triple_chow,
        suppresses: &[RuleId::MixedDoubleChow],
    },
    Rule {
        id: RuleId::MixedShiftedPungs,
        name: "三色三节高",
        score: 8,
        check: predicates::mixed_shifted_pungs,
        suppresses: &[],
    },
    Rule {
        id: RuleId::ChickenHand,
        name: "无番和",
        score: 8,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::LastTileDraw,
        name: "妙手回春",
        score: 8,
        check: predicates::unmodeled,
        suppresses: &[RuleId::SelfDrawn],
    },
    Rule {
        id: RuleId::LastTileClaim,
        name: "海底捞月",
        score: 8,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::OutWithReplacementTile,
        name: "杠上开花",
        score: 8,
        check: predicates::unmodeled,
        suppresses: &[RuleId::SelfDrawn],
    },
    Rule {
        id: RuleId::RobbingTheKong,
        name: "抢杠和",
        score: 8,
        check: predicates::unmodeled,
        suppresses: &[RuleId::LastTile],
    },
    Rule {
        id: RuleId::AllPungs,
        name: "碰碰和",
        score: 6,
        check: predicates::all_pungs,
        suppresses: &[],
    },
    Rule {
        id: RuleId::HalfFlush,
        name: "混一色",
        score: 6,
        check: predicates::half_flush,
        suppresses: &[],
    },
    Rule {
        id: RuleId::MixedShiftedChows,
        name: "三色三步高",
        score: 6,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::AllTypes,
        name: "五门齐",
        score: 6,
        check: predicates::all_types,
        suppresses: &[],
    },
    Rule {
        id: RuleId::MeldedHand,
        name: "全求人",
        score: 6,
        check: predicates::unmodeled,
        suppresses: &[RuleId::SingleWait],
    },
    Rule {
        id: RuleId::TwoConcealedKongs,
        name: "双暗杠",
        score: 6,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::TwoDragonPungs,
        name: "双箭刻",
        score: 6,
        check: predicates::two_dragon_pungs,
        suppresses: &[RuleId::PungOfTerminalsOrHonors],
    },
    Rule {
        id: RuleId::OutsideHand,
        name: "全带幺",
        score: 4,
        check: predicates::outside_hand,
        suppresses: &[],
    },
    Rule {
        id: RuleId::FullyConcealedHand,
        name: "不求人",
        score: 4,
        check: predicates::unmodeled,
        suppresses: &[RuleId::SelfDrawn],
    },
    Rule {
        id: RuleId::TwoMeldedKongs,
        name: "双明杠",
        score: 4,
        check: predicates::two_melded_kongs,
        suppresses: &[],
    },
    Rule {
        id: RuleId::LastTile,
        name: "和绝张",
        score: 4,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::DragonPung,
        name: "箭刻",
        score: 2,
        check: predicates::dragon_pung,
        suppresses: &[RuleId::PungOfTerminalsOrHonors],
    },
    Rule {
        id: RuleId::PrevalentWind,
        name: "圈风刻",
        score: 2,
        check: predicates::prevalent_wind,
        suppresses: &[RuleId::PungOfTerminalsOrHonors],
    },
    Rule {
        id: RuleId::SeatWind,
        name: "门风刻",
        score: 2,
        check: predicates::seat_wind,
        suppresses: &[RuleId::PungOfTerminalsOrHonors],
    },
    Rule {
        id: RuleId::ConcealedHand,
        name: "门前清",
        score: 2,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::AllChows,
        name: "平和",
        score: 2,
        check: predicates::all_chows,
        suppresses: &[RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::TileHog,
        name: "四归一",
        score: 2,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::DoublePung,
        name: "双同刻",
        score: 2,
        check: predicates::double_pung,
        suppresses: &[],
    },
    Rule {
        id: RuleId::TwoConcealedPungs,
        name: "双暗刻",
        score: 2,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::ConcealedKong,
        name: "暗杠",
        score: 2,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::AllSimples,
        name: "断幺",
        score: 2,
        check: predicates::all_simples,
        suppresses: &[RuleId::NoHonorTiles],
    },
    Rule {
        id: RuleId::PureDoubleChow,
        name: "一般高",
        score: 1,
        check: predicates::pure_double_chow,
        suppresses: &[],
    },
    Rule {
        id: RuleId::MixedDoubleChow,
        name: "喜相逢",
        score: 1,
        check: predicates::mixed_double_chow,
        suppresses: &[],
    },
    Rule {
        id: RuleId::ShortStraight,
        name: "连六",
        score: 1,
        check: predicates::short_straight,
        suppresses: &[],
    },
    Rule {
        id: RuleId::TwoTerminalChows,
        name: "老少副",
        score: 1,
        check: predicates::two_terminal_chows,
        suppresses: &[],
    },
    Rule {
        id: RuleId::PungOfTerminalsOrHonors,
        name: "幺九刻",
        score: 1,
        check: predicates::pung_of_terminals_or_honors,
        suppresses: &[],
    },
    Rule {
        id: RuleId::MeldedKong,
        name: "明杠",
        score: 1,
        check: predicates::melded_kong,
        suppresses: &[],
    },
    Rule {
        id: RuleId::OneVoidedSuit,
        name: "缺一门",
        score: 1,
        check: predicates::one_voided_suit,
        suppresses: &[],
    },
    Rule {
        id: RuleId::NoHonorTiles,
        name: "无字",
        score: 1,
        check: predicates::no_honor_tiles,
        suppresses: &[],
    },
    Rule {
        id: RuleId::EdgeWait,
        name: "边张",
        score: 1,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::ClosedWait,
        name: "坎张",
        score: 1,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::SingleWait,
        name: "单钓",
        score: 1,
        check: predicates::unmodeled,
        suppresses: &[],
    },
    Rule {
        id: RuleId::SelfDrawn,
        name: "自摸",
        score: 1,
        check: predicates::unmodeled,
        suppresses: &[],
    },
];
