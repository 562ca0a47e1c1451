//! Guobiao Mahjong scoring engine
//!
//! Decomposes fourteen-tile hands into melds and a pair, walks the
//! eighty-pattern fan catalog with suppression, and computes waits for
//! thirteen-tile hands. Hands travel as tile-id vectors or in the
//! compact notation accepted by [`parse_hand`].

pub mod decompose;
pub mod errors;
pub mod parser;
#[cfg(feature = "python")]
mod python;
pub mod rules;
pub mod score;
mod tests;
pub mod tile;
pub mod types;
pub mod wait;

pub use decompose::decompose;
pub use errors::{GuobiaoError, GuobiaoResult};
pub use parser::{format_hand, parse_hand};
pub use rules::{rule, MatchOutcome, Rule, RuleId, CATALOG, NUM_RULES};
pub use score::{score, ScoreResult};
pub use tile::{Suit, Tile, TILE_NAMES};
pub use types::{Context, Decomposition, HuResult, Meld, MeldKind, Wind};
pub use wait::compute_wait;
