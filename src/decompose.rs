//! Winning-shape detection for 14-tile hands.
//!
//! A hand wins as seven pairs or as four melds plus a pair. The meld
//! search works on a per-kind histogram and always consumes the lowest
//! occupied kind first, trying pair, then triplet, then run. The first
//! complete split found is returned; the search does not look for a
//! scoring-optimal alternative.

use crate::errors::{GuobiaoError, GuobiaoResult};
use crate::tile::{from_id, Tile, HONOR_START, NUM_SUIT_TILES, NUM_TILE_TYPES};
use crate::types::{sorted_tiles, tile_counts, Decomposition, HuResult, Meld, WINNING_HAND_SIZE};

/// Splits a 14-tile hand into a winning shape, if it has one.
///
/// The returned melds are in discovery order, ascending by tile id. For a
/// seven-pairs win the decomposition carries no melds and all fourteen
/// tiles sit in `pair`.
pub fn decompose(hand: &[Tile]) -> GuobiaoResult<HuResult> {
    if hand.len() != WINNING_HAND_SIZE {
        return Err(GuobiaoError::InvalidHandSize {
            expected: WINNING_HAND_SIZE,
            actual: hand.len(),
        });
    }

    let sorted = sorted_tiles(hand);

    if is_seven_pairs(&sorted) {
        return Ok(HuResult::Winning(Decomposition {
            melds: Vec::new(),
            pair: sorted,
        }));
    }

    let mut counts = tile_counts(&sorted);
    let mut melds = Vec::with_capacity(4);
    let mut pair = None;
    let won = search(&mut counts, WINNING_HAND_SIZE, &mut melds, &mut pair);
    match (won, pair) {
        (true, Some(p)) => Ok(HuResult::Winning(Decomposition {
            melds,
            pair: vec![p, p],
        })),
        _ => Ok(HuResult::NotWinning),
    }
}

/// Seven distinct-or-not pairs back to back in sorted order. Two pairs of
/// the same kind are allowed.
fn is_seven_pairs(sorted: &[Tile]) -> bool {
    sorted.chunks_exact(2).all(|c| c[0] == c[1])
}

/// Backtracking meld search over the histogram. `remaining` tracks how
/// many tiles the histogram still holds.
fn search(
    counts: &mut [u8; NUM_TILE_TYPES],
    remaining: usize,
    melds: &mut Vec<Meld>,
    pair: &mut Option<Tile>,
) -> bool {
    if remaining == 0 {
        return true;
    }
    if remaining == 1 {
        return false;
    }

    let k = match counts.iter().position(|&c| c > 0) {
        Some(k) => k,
        None => return false,
    };

    if remaining == 2 {
        if pair.is_none() && counts[k] == 2 {
            *pair = Some(from_id(k as u8));
            return true;
        }
        return false;
    }

    // Pair of the lowest kind, if the pair slot is still open.
    if pair.is_none() && counts[k] >= 2 {
        counts[k] -= 2;
        *pair = Some(from_id(k as u8));
        if search(counts, remaining - 2, melds, pair) {
            return true;
        }
        *pair = None;
        counts[k] += 2;
    }

    // Triplet of the lowest kind.
    if counts[k] >= 3 {
        counts[k] -= 3;
        melds.push(Meld::triplet(from_id(k as u8)));
        if search(counts, remaining - 3, melds, pair) {
            return true;
        }
        melds.pop();
        counts[k] += 3;
    }

    // Run starting at the lowest kind. Only suited kinds with rank 1-7
    // can start a run, which keeps k+1 and k+2 inside the same suit.
    if k < HONOR_START as usize && k % NUM_SUIT_TILES <= 6 && counts[k + 1] > 0 && counts[k + 2] > 0
    {
        counts[k] -= 1;
        counts[k + 1] -= 1;
        counts[k + 2] -= 1;
        melds.push(Meld::run([
            from_id(k as u8),
            from_id(k as u8 + 1),
            from_id(k as u8 + 2),
        ]));
        if search(counts, remaining - 3, melds, pair) {
            return true;
        }
        melds.pop();
        counts[k] += 1;
        counts[k + 1] += 1;
        counts[k + 2] += 1;
    }

    false
}
