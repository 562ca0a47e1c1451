//! Predicate implementations for the fan catalog.
//!
//! Every predicate receives the shared [`Eval`] view. Meld-shape patterns
//! read the decomposition; tile-colour and rank-range patterns read the
//! raw tiles, so a couple of them (nine gates, thirteen orphans, the
//! knitted hand) can match without a winning split, as the traditional
//! rules intend.

use crate::tile::{
    Suit, Tile, EAST, GREEN_DRAGON, NORTH, RED_DRAGON, SOUTH, WEST, WHITE_DRAGON,
};
use crate::types::Meld;

use super::{Eval, MatchOutcome};

// ---------------------------------------------------------------------------
// Tile sets
// ---------------------------------------------------------------------------

/// 2s 3s 4s 6s 8s and the green dragon.
const GREEN_TILES: [u8; 6] = [19, 20, 21, 23, 25, GREEN_DRAGON];

/// Point-symmetric tiles: 1-5p, 8p, 9p, 2s, 4s, 5s, 6s, 8s, 9s, white dragon.
const REVERSIBLE_TILES: [u8; 14] =
    [9, 10, 11, 12, 13, 16, 17, 19, 21, 22, 23, 25, 26, WHITE_DRAGON];

/// The thirteen terminal and honor kinds.
const ORPHAN_KINDS: [u8; 13] = [
    0,
    8,
    9,
    17,
    18,
    26,
    EAST,
    SOUTH,
    WEST,
    NORTH,
    WHITE_DRAGON,
    GREEN_DRAGON,
    RED_DRAGON,
];

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Patterns that depend on table state the engine does not track (win
/// source, concealment, wait shape, kong visibility) never match.
pub(super) fn unmodeled(_: &Eval) -> MatchOutcome {
    MatchOutcome::NoMatch
}

fn has_triplet(e: &Eval, id: u8) -> bool {
    e.melds.iter().any(|m| m.is_triplet() && m.low().id() == id)
}

fn triplet_count(e: &Eval, pred: impl Fn(Tile) -> bool) -> u32 {
    e.melds
        .iter()
        .filter(|m| m.is_triplet() && pred(m.low()))
        .count() as u32
}

/// Start of a run as `(suit, rank)`; `None` for triplets.
fn run_start(m: &Meld) -> Option<(Suit, u8)> {
    if m.is_run() {
        m.low().suit().zip(m.low().number())
    } else {
        None
    }
}

/// Rank of a suited triplet as `(suit, rank)`; `None` for runs and honor
/// triplets.
fn pung_rank(m: &Meld) -> Option<(Suit, u8)> {
    if m.is_triplet() {
        m.low().suit().zip(m.low().number())
    } else {
        None
    }
}

/// True when every tile is suited and all share one suit.
fn single_suit(tiles: &[Tile]) -> bool {
    match tiles.first().and_then(|t| t.suit()) {
        Some(s) => tiles.iter().all(|t| t.suit() == Some(s)),
        None => false,
    }
}

/// Number of distinct suits among the suited tiles.
fn suit_count(tiles: &[Tile]) -> usize {
    let mut seen = [false; 3];
    for t in tiles {
        if let Some(s) = t.suit() {
            seen[s as usize] = true;
        }
    }
    seen.iter().filter(|&&b| b).count()
}

/// True when every tile has a rank in `lo..=hi`.
fn ranks_within(tiles: &[Tile], lo: u8, hi: u8) -> bool {
    tiles
        .iter()
        .all(|t| matches!(t.number(), Some(n) if n >= lo && n <= hi))
}

/// Tries every way of keeping three of the melds, preserving their order.
fn some_three(melds: &[Meld], pred: impl Fn(&Meld, &Meld, &Meld) -> bool) -> bool {
    for skip in 0..melds.len() {
        let mut kept = melds
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, m)| m);
        if let (Some(a), Some(b), Some(c)) = (kept.next(), kept.next(), kept.next()) {
            if pred(a, b, c) {
                return true;
            }
        }
    }
    false
}

/// Counts unordered meld pairs satisfying `pred`.
fn meld_pair_count(melds: &[Meld], pred: impl Fn(&Meld, &Meld) -> bool) -> u32 {
    let mut n = 0;
    for i in 0..melds.len() {
        for j in (i + 1)..melds.len() {
            if pred(&melds[i], &melds[j]) {
                n += 1;
            }
        }
    }
    n
}

// ---------------------------------------------------------------------------
// 88-point patterns
// ---------------------------------------------------------------------------

pub(super) fn big_four_winds(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && (EAST..=NORTH).all(|id| has_triplet(e, id)))
}

pub(super) fn big_three_dragons(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && (WHITE_DRAGON..=RED_DRAGON).all(|id| has_triplet(e, id)))
}

pub(super) fn all_green(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && e.tiles.iter().all(|t| GREEN_TILES.contains(&t.id()))
            && e.counts[GREEN_DRAGON as usize] > 0,
    )
}

pub(super) fn nine_gates(e: &Eval) -> MatchOutcome {
    // Structural check on the raw tiles: 1112345678999 of one suit plus
    // one extra tile of that suit, winning split not required.
    const PATTERN: [u8; 9] = [3, 1, 1, 1, 1, 1, 1, 1, 3];
    if !single_suit(e.tiles) {
        return MatchOutcome::NoMatch;
    }
    let start = match e.tiles.first().and_then(|t| t.suit()) {
        Some(s) => s.start() as usize,
        None => return MatchOutcome::NoMatch,
    };
    let ok = PATTERN
        .iter()
        .enumerate()
        .all(|(r, &need)| e.counts[start + r] >= need);
    MatchOutcome::when(ok)
}

pub(super) fn four_kongs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.ctx.declared_kongs == 4)
}

pub(super) fn seven_shifted_pairs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.melds.is_empty() && single_suit(e.tiles))
}

pub(super) fn thirteen_orphans(e: &Eval) -> MatchOutcome {
    // Structural: all thirteen orphan kinds present. The fourteenth tile
    // is unconstrained.
    MatchOutcome::when(ORPHAN_KINDS.iter().all(|&id| e.counts[id as usize] > 0))
}

// ---------------------------------------------------------------------------
// 64- to 32-point patterns
// ---------------------------------------------------------------------------

pub(super) fn all_terminals(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.tiles.iter().all(|t| t.is_terminal()))
}

pub(super) fn little_four_winds(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && triplet_count(e, |t| t.is_wind()) == 3
            && e.pair.iter().all(|t| t.is_wind()),
    )
}

pub(super) fn little_three_dragons(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && triplet_count(e, |t| t.is_dragon()) == 2
            && e.pair.iter().all(|t| t.is_dragon()),
    )
}

pub(super) fn all_honors(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.tiles.iter().all(|t| t.is_honor()))
}

pub(super) fn pure_terminal_chows(e: &Eval) -> MatchOutcome {
    if !e.winning() || e.melds.len() != 4 || !single_suit(e.tiles) {
        return MatchOutcome::NoMatch;
    }
    let starts: Vec<Option<u8>> = e
        .melds
        .iter()
        .map(|m| run_start(m).map(|(_, r)| r))
        .collect();
    MatchOutcome::when(
        starts == [Some(1), Some(1), Some(7), Some(7)]
            && e.pair.iter().all(|t| t.number() == Some(5)),
    )
}

pub(super) fn quadruple_chow(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && single_suit(e.tiles)
            && e.melds.len() == 4
            && e.melds
                .iter()
                .all(|m| m.is_run() && m.low() == e.melds[0].low()),
    )
}

pub(super) fn four_pure_shifted_pungs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && single_suit(e.tiles)
            && e.melds.len() == 4
            && e.melds.iter().all(|m| m.is_triplet())
            && e.melds
                .windows(2)
                .all(|w| w[1].low().id() == w[0].low().id() + 1),
    )
}

pub(super) fn four_pure_shifted_chows(e: &Eval) -> MatchOutcome {
    if !(e.winning()
        && single_suit(e.tiles)
        && e.melds.len() == 4
        && e.melds.iter().all(|m| m.is_run()))
    {
        return MatchOutcome::NoMatch;
    }
    // Melds come out of the decomposition in ascending order, so a
    // uniform upward shift shows up as equal successive deltas.
    let d = e.melds[1].low().id() - e.melds[0].low().id();
    MatchOutcome::when(
        (d == 1 || d == 2)
            && e.melds[2].low().id() == e.melds[1].low().id() + d
            && e.melds[3].low().id() == e.melds[2].low().id() + d,
    )
}

pub(super) fn three_kongs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.ctx.declared_kongs == 3)
}

pub(super) fn all_terminals_and_honors(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.tiles.iter().all(|t| t.is_terminal_or_honor()))
}

// ---------------------------------------------------------------------------
// 24- to 16-point patterns
// ---------------------------------------------------------------------------

pub(super) fn seven_pairs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.melds.is_empty())
}

pub(super) fn all_even_pungs(e: &Eval) -> MatchOutcome {
    let even = |t: Tile| matches!(t.number(), Some(n) if n % 2 == 0);
    MatchOutcome::when(
        e.winning()
            && e.melds.iter().all(|m| m.is_triplet() && even(m.low()))
            && e.pair.iter().all(|&t| even(t)),
    )
}

pub(super) fn full_flush(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && single_suit(e.tiles))
}

pub(super) fn pure_triple_chow(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && some_three(e.melds, |a, b, c| {
                a.is_run() && b.is_run() && c.is_run() && a.low() == b.low() && b.low() == c.low()
            }),
    )
}

pub(super) fn pure_shifted_pungs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && some_three(e.melds, |a, b, c| {
                match (pung_rank(a), pung_rank(b), pung_rank(c)) {
                    (Some((sa, ra)), Some((sb, rb)), Some((sc, rc))) => {
                        sa == sb && sb == sc && rb == ra + 1 && rc == rb + 1
                    }
                    _ => false,
                }
            }),
    )
}

pub(super) fn upper_tiles(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && ranks_within(e.tiles, 7, 9))
}

pub(super) fn middle_tiles(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && ranks_within(e.tiles, 4, 6))
}

pub(super) fn lower_tiles(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && ranks_within(e.tiles, 1, 3))
}

pub(super) fn pure_straight(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && some_three(e.melds, |a, b, c| {
                match (run_start(a), run_start(b), run_start(c)) {
                    (Some((sa, 1)), Some((sb, 4)), Some((sc, 7))) => sa == sb && sb == sc,
                    _ => false,
                }
            }),
    )
}

pub(super) fn three_suited_terminal_chows(e: &Eval) -> MatchOutcome {
    if !e.winning() || e.melds.len() != 4 {
        return MatchOutcome::NoMatch;
    }
    let starts: Vec<Option<(Suit, u8)>> = e.melds.iter().map(run_start).collect();
    match (starts[0], starts[1], starts[2], starts[3]) {
        (Some((sa, 1)), Some((sb, 7)), Some((sc, 1)), Some((sd, 7)))
            if sa == sb && sc == sd && sa != sc =>
        {
            MatchOutcome::when(e.pair.iter().all(|t| {
                t.number() == Some(5) && t.suit().map_or(false, |s| s != sa && s != sc)
            }))
        }
        _ => MatchOutcome::NoMatch,
    }
}

pub(super) fn pure_shifted_chows(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && some_three(e.melds, |a, b, c| {
                match (run_start(a), run_start(b), run_start(c)) {
                    (Some((sa, ra)), Some((sb, rb)), Some((sc, rc)))
                        if sa == sb && sb == sc =>
                    {
                        let d1 = rb - ra;
                        let d2 = rc - rb;
                        d1 == d2 && (d1 == 1 || d1 == 2)
                    }
                    _ => false,
                }
            }),
    )
}

pub(super) fn all_fives(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && e.melds
                .iter()
                .all(|m| m.tiles.iter().any(|t| t.number() == Some(5)))
            && e.pair.iter().all(|t| t.number() == Some(5)),
    )
}

pub(super) fn triple_pung(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && some_three(e.melds, |a, b, c| {
                match (pung_rank(a), pung_rank(b), pung_rank(c)) {
                    (Some((_, ra)), Some((_, rb)), Some((_, rc))) => ra == rb && rb == rc,
                    _ => false,
                }
            }),
    )
}

// ---------------------------------------------------------------------------
// 12- to 8-point patterns
// ---------------------------------------------------------------------------

pub(super) fn lesser_honors_and_knitted_tiles(e: &Eval) -> MatchOutcome {
    // Structural: fourteen distinct kinds whose suited part fits a
    // knitted split, ranks 147/258/369 spread over three different suits.
    const CLASSES: [[u8; 3]; 3] = [[1, 4, 7], [2, 5, 8], [3, 6, 9]];
    const SUIT_ORDERS: [[Suit; 3]; 6] = [
        [Suit::Manzu, Suit::Pinzu, Suit::Souzu],
        [Suit::Manzu, Suit::Souzu, Suit::Pinzu],
        [Suit::Pinzu, Suit::Manzu, Suit::Souzu],
        [Suit::Pinzu, Suit::Souzu, Suit::Manzu],
        [Suit::Souzu, Suit::Manzu, Suit::Pinzu],
        [Suit::Souzu, Suit::Pinzu, Suit::Manzu],
    ];
    if e.counts.iter().any(|&c| c > 1) {
        return MatchOutcome::NoMatch;
    }
    let fits = SUIT_ORDERS.iter().any(|order| {
        e.tiles.iter().all(|t| match (t.suit(), t.number()) {
            (Some(s), Some(n)) => match order.iter().position(|&o| o == s) {
                Some(k) => CLASSES[k].contains(&n),
                None => false,
            },
            _ => true,
        })
    });
    MatchOutcome::when(fits)
}

pub(super) fn upper_four(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && ranks_within(e.tiles, 6, 9))
}

pub(super) fn lower_four(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && ranks_within(e.tiles, 1, 4))
}

pub(super) fn big_three_winds(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && triplet_count(e, |t| t.is_wind()) >= 3)
}

pub(super) fn mixed_straight(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    let m = e.melds;
    let found = (0..m.len()).any(|i| {
        (0..m.len()).any(|j| {
            (0..m.len()).any(|k| {
                i != j
                    && j != k
                    && i != k
                    && match (run_start(&m[i]), run_start(&m[j]), run_start(&m[k])) {
                        (Some((si, 1)), Some((sj, 4)), Some((sk, 7))) => {
                            si != sj && sj != sk && si != sk
                        }
                        _ => false,
                    }
            })
        })
    });
    MatchOutcome::when(found)
}

pub(super) fn reversible_tiles(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && e.tiles
                .iter()
                .all(|t| REVERSIBLE_TILES.contains(&t.id())),
    )
}

pub(super) fn mixed_triple_chow(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && some_three(e.melds, |a, b, c| {
                match (run_start(a), run_start(b), run_start(c)) {
                    (Some((sa, ra)), Some((sb, rb)), Some((sc, rc))) => {
                        ra == rb && rb == rc && sa != sb && sb != sc && sa != sc
                    }
                    _ => false,
                }
            }),
    )
}

pub(super) fn mixed_shifted_pungs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && some_three(e.melds, |a, b, c| {
                match (pung_rank(a), pung_rank(b), pung_rank(c)) {
                    (Some((sa, ra)), Some((sb, rb)), Some((sc, rc)))
                        if sa != sb && sb != sc && sa != sc =>
                    {
                        let mut r = [ra, rb, rc];
                        r.sort_unstable();
                        r[1] == r[0] + 1 && r[2] == r[1] + 1
                    }
                    _ => false,
                }
            }),
    )
}

// ---------------------------------------------------------------------------
// 6- to 4-point patterns
// ---------------------------------------------------------------------------

pub(super) fn all_pungs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.melds.iter().all(|m| m.is_triplet()))
}

pub(super) fn half_flush(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning() && suit_count(e.tiles) == 1 && e.tiles.iter().any(|t| t.is_honor()),
    )
}

pub(super) fn all_types(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && suit_count(e.tiles) == 3
            && e.tiles.iter().any(|t| t.is_wind())
            && e.tiles.iter().any(|t| t.is_dragon()),
    )
}

pub(super) fn two_dragon_pungs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && triplet_count(e, |t| t.is_dragon()) == 2)
}

pub(super) fn outside_hand(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && e.melds
                .iter()
                .all(|m| m.tiles.iter().all(|t| t.is_terminal_or_honor())),
    )
}

pub(super) fn two_melded_kongs(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.ctx.declared_kongs == 2)
}

// ---------------------------------------------------------------------------
// 2- to 1-point patterns
// ---------------------------------------------------------------------------

pub(super) fn dragon_pung(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(triplet_count(e, |t| t.is_dragon()))
}

pub(super) fn prevalent_wind(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    let wind = e.ctx.round_wind.tile();
    MatchOutcome::times(triplet_count(e, |t| t == wind))
}

pub(super) fn seat_wind(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    let wind = e.ctx.seat_wind.tile();
    MatchOutcome::times(triplet_count(e, |t| t == wind))
}

pub(super) fn all_chows(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(
        e.winning()
            && e.melds.iter().all(|m| m.is_run())
            && e.pair.iter().all(|t| t.is_suited()),
    )
}

pub(super) fn double_pung(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(meld_pair_count(e.melds, |a, b| {
        match (pung_rank(a), pung_rank(b)) {
            (Some((_, ra)), Some((_, rb))) => ra == rb,
            _ => false,
        }
    }))
}

pub(super) fn all_simples(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && ranks_within(e.tiles, 2, 8))
}

pub(super) fn pure_double_chow(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(meld_pair_count(e.melds, |a, b| {
        a.is_run() && b.is_run() && a.low() == b.low()
    }))
}

pub(super) fn mixed_double_chow(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(meld_pair_count(e.melds, |a, b| {
        match (run_start(a), run_start(b)) {
            (Some((sa, ra)), Some((sb, rb))) => ra == rb && sa != sb,
            _ => false,
        }
    }))
}

pub(super) fn short_straight(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(meld_pair_count(e.melds, |a, b| {
        match (run_start(a), run_start(b)) {
            (Some((sa, ra)), Some((sb, rb))) => {
                sa == sb && (i16::from(ra) - i16::from(rb)).abs() == 3
            }
            _ => false,
        }
    }))
}

pub(super) fn two_terminal_chows(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(meld_pair_count(e.melds, |a, b| {
        match (run_start(a), run_start(b)) {
            (Some((sa, ra)), Some((sb, rb))) => {
                sa == sb && (i16::from(ra) - i16::from(rb)).abs() == 6
            }
            _ => false,
        }
    }))
}

pub(super) fn pung_of_terminals_or_honors(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(triplet_count(e, |t| t.is_terminal_or_honor()))
}

pub(super) fn melded_kong(e: &Eval) -> MatchOutcome {
    if !e.winning() {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::times(u32::from(e.ctx.declared_kongs))
}

pub(super) fn one_voided_suit(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && suit_count(e.tiles) == 2)
}

pub(super) fn no_honor_tiles(e: &Eval) -> MatchOutcome {
    MatchOutcome::when(e.winning() && e.tiles.iter().all(|t| t.is_suited()))
}
