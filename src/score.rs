//! Hand scoring: decompose the hand, walk the fan catalog, apply
//! suppression, and sum the matched pattern scores.

use serde::{Deserialize, Serialize};

use crate::decompose::decompose;
use crate::errors::GuobiaoResult;
use crate::rules::{Eval, MatchOutcome, RuleId, CATALOG, NUM_RULES};
use crate::tile::Tile;
use crate::types::{sorted_tiles, Context, HuResult};

/// Outcome of scoring one fourteen-tile hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Sum of matched pattern scores, or `-1` when the hand neither wins
    /// nor matches any structural pattern.
    pub total_score: i32,
    /// Matched patterns and their multiplicities, in catalog order.
    pub achieved: Vec<(RuleId, u32)>,
    /// The evaluated hand in canonical id order.
    pub normalized_hand: Vec<Tile>,
    /// The winning split, if one exists.
    pub hu_result: HuResult,
}

impl ScoreResult {
    /// True when the hand has a winning shape.
    #[inline]
    pub fn is_winning(&self) -> bool {
        self.hu_result.is_winning()
    }
}

/// Scores a fourteen-tile hand under `ctx`.
///
/// Patterns are tried in catalog order, highest base score first. A
/// match adds `score * multiplicity` to the total and suppresses the
/// patterns it subsumes for the rest of the walk. Structural patterns
/// evaluate even without a winning shape, so a hand like thirteen
/// orphans still scores; a hand with neither a winning shape nor a
/// structural match comes back as `-1`.
pub fn score(hand: &[Tile], ctx: &Context) -> GuobiaoResult<ScoreResult> {
    let sorted = sorted_tiles(hand);
    let hu = decompose(&sorted)?;

    let mut total: i32 = 0;
    let mut achieved: Vec<(RuleId, u32)> = Vec::new();
    let mut suppressed = [false; NUM_RULES];

    {
        let eval = Eval::new(&sorted, &hu, ctx);
        for rule in CATALOG.iter() {
            if suppressed[rule.id.index()] {
                continue;
            }
            if let MatchOutcome::Match(mult) = (rule.check)(&eval) {
                total += (rule.score * mult) as i32;
                for &sub in rule.suppresses {
                    suppressed[sub.index()] = true;
                }
                achieved.push((rule.id, mult));
            }
        }
    }

    if !hu.is_winning() && total == 0 {
        total = -1;
    }

    Ok(ScoreResult {
        total_score: total,
        achieved,
        normalized_hand: sorted,
        hu_result: hu,
    })
}
