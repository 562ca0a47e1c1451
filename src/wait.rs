//! Waiting-tile computation for 13-tile ready hands.

use crate::decompose::decompose;
use crate::errors::{GuobiaoError, GuobiaoResult};
use crate::tile::{from_id, Tile, NUM_TILE_TYPES};
use crate::types::READY_HAND_SIZE;

/// Returns every tile kind that completes the 13-tile hand, in id order.
///
/// A hand with no winning completion yields an empty list. The hand is
/// not required to be plausible beyond its length; each of the 34 kinds
/// is tried as the fourteenth tile.
pub fn compute_wait(hand: &[Tile]) -> GuobiaoResult<Vec<Tile>> {
    if hand.len() != READY_HAND_SIZE {
        return Err(GuobiaoError::InvalidHandSize {
            expected: READY_HAND_SIZE,
            actual: hand.len(),
        });
    }

    let mut waits = Vec::new();
    let mut candidate = hand.to_vec();
    for id in 0..NUM_TILE_TYPES as u8 {
        let tile = from_id(id);
        candidate.push(tile);
        if decompose(&candidate)?.is_winning() {
            waits.push(tile);
        }
        candidate.pop();
    }
    Ok(waits)
}
