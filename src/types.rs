#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tile::{Tile, EAST, NUM_TILE_TYPES};

/// Tiles in a complete winning hand.
pub const WINNING_HAND_SIZE: usize = 14;

/// Tiles in a ready hand awaiting its winning tile.
pub const READY_HAND_SIZE: usize = 13;

/// Represents wind directions, used for the round wind and the seat wind.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Wind {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Wind {
    /// The honor tile carrying this wind (E/S/W/N).
    #[inline]
    pub const fn tile(self) -> Tile {
        crate::tile::from_id(EAST + self as u8)
    }
}

impl From<u8> for Wind {
    fn from(val: u8) -> Self {
        match val % 4 {
            0 => Wind::East,
            1 => Wind::South,
            2 => Wind::West,
            3 => Wind::North,
            _ => unreachable!(),
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Wind {
    fn __hash__(&self) -> isize {
        *self as isize
    }
}

/// How a meld is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldKind {
    /// Three consecutive tiles of one suit.
    Run = 0,
    /// Three identical tiles.
    Triplet = 1,
}

/// A completed three-tile group inside a winning decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    /// The member tiles in ascending id order.
    pub tiles: [Tile; 3],
}

impl Meld {
    pub fn triplet(tile: Tile) -> Self {
        Meld {
            kind: MeldKind::Triplet,
            tiles: [tile; 3],
        }
    }

    pub fn run(tiles: [Tile; 3]) -> Self {
        Meld {
            kind: MeldKind::Run,
            tiles,
        }
    }

    /// Lowest member tile; for a triplet, the repeated tile itself.
    #[inline]
    pub fn low(&self) -> Tile {
        self.tiles[0]
    }

    #[inline]
    pub fn is_run(&self) -> bool {
        matches!(self.kind, MeldKind::Run)
    }

    #[inline]
    pub fn is_triplet(&self) -> bool {
        matches!(self.kind, MeldKind::Triplet)
    }
}

/// A successful split of a 14-tile hand into groups.
///
/// For a regular hand, `melds` holds four groups and `pair` the two pair
/// tiles. For seven pairs, `melds` is empty and `pair` holds all fourteen
/// tiles in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub melds: Vec<Meld>,
    pub pair: Vec<Tile>,
}

impl Decomposition {
    /// True when this decomposition is the seven-pairs shape.
    #[inline]
    pub fn is_seven_pairs(&self) -> bool {
        self.melds.is_empty()
    }
}

/// Outcome of testing a 14-tile hand for a winning shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HuResult {
    NotWinning,
    Winning(Decomposition),
}

impl HuResult {
    #[inline]
    pub fn is_winning(&self) -> bool {
        matches!(self, HuResult::Winning(_))
    }
}

/// Table state the pattern catalog consults beyond the fourteen tiles.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Number of kongs declared by the winner (0-4).
    pub declared_kongs: u8,
    pub round_wind: Wind,
    pub seat_wind: Wind,
    /// Number of flower tiles drawn (0-8).
    pub flower_count: u8,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            declared_kongs: 0,
            round_wind: Wind::East,
            seat_wind: Wind::East,
            flower_count: 0,
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Context {
    #[new]
    #[pyo3(signature = (declared_kongs=0, round_wind=None, seat_wind=None, flower_count=0))]
    fn py_new(
        declared_kongs: u8,
        round_wind: Option<Wind>,
        seat_wind: Option<Wind>,
        flower_count: u8,
    ) -> Self {
        Context {
            declared_kongs,
            round_wind: round_wind.unwrap_or(Wind::East),
            seat_wind: seat_wind.unwrap_or(Wind::East),
            flower_count,
        }
    }
}

/// Returns a copy of the hand in canonical id order.
pub fn sorted_tiles(tiles: &[Tile]) -> Vec<Tile> {
    let mut sorted = tiles.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Histogram of tile kinds, indexed by tile id.
pub(crate) fn tile_counts(tiles: &[Tile]) -> [u8; NUM_TILE_TYPES] {
    let mut counts = [0u8; NUM_TILE_TYPES];
    for t in tiles {
        counts[t.id() as usize] += 1;
    }
    counts
}
