//! Tile kind representation for the 34-tile Guobiao set.
//!
//! Provides the tile id system (0-33), suit and rank accessors, and the
//! stable display names shared by the hand parser and the fan catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{GuobiaoError, GuobiaoResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Total number of distinct tile kinds (0-33).
pub const NUM_TILE_TYPES: usize = 34;

/// Number of ranks per suited category (1-9).
pub const NUM_SUIT_TILES: usize = 9;

// Suit range starts (tile kind indices).
pub const MANZU_START: u8 = 0;
pub const PINZU_START: u8 = 9;
pub const SOUZU_START: u8 = 18;
pub const HONOR_START: u8 = 27;

// Named honor tile indices for readability.
pub const EAST: u8 = 27;
pub const SOUTH: u8 = 28;
pub const WEST: u8 = 29;
pub const NORTH: u8 = 30;
pub const WHITE_DRAGON: u8 = 31;
pub const GREEN_DRAGON: u8 = 32;
pub const RED_DRAGON: u8 = 33;

// ---------------------------------------------------------------------------
// Suit
// ---------------------------------------------------------------------------

/// The three numbered tile categories. Honor tiles carry no suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Manzu = 0,
    Pinzu = 1,
    Souzu = 2,
}

impl Suit {
    /// Returns the starting tile kind index for this suit.
    #[inline]
    pub const fn start(self) -> u8 {
        match self {
            Suit::Manzu => MANZU_START,
            Suit::Pinzu => PINZU_START,
            Suit::Souzu => SOUZU_START,
        }
    }
}

// ---------------------------------------------------------------------------
// Tile newtype
// ---------------------------------------------------------------------------

/// A tile kind in the range 0-33. Wraps a `u8` for type safety.
///
/// Ordering follows the raw id, which is also the canonical hand order:
/// manzu, pinzu, souzu by ascending rank, then winds E/S/W/N, then
/// dragons white/green/red.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile(u8);

impl Tile {
    /// Creates a `Tile` if `id` is in range 0..34.
    #[inline]
    pub const fn new(id: u8) -> Option<Self> {
        if id < NUM_TILE_TYPES as u8 {
            Some(Tile(id))
        } else {
            None
        }
    }

    /// Raw numeric id (0-33).
    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Which suit this tile belongs to, or `None` for honor tiles.
    #[inline]
    pub const fn suit(self) -> Option<Suit> {
        match self.0 {
            0..9 => Some(Suit::Manzu),
            9..18 => Some(Suit::Pinzu),
            18..27 => Some(Suit::Souzu),
            _ => None,
        }
    }

    /// 1-based rank within the suit (1-9), or `None` for honor tiles.
    #[inline]
    pub const fn number(self) -> Option<u8> {
        if self.0 < HONOR_START {
            Some((self.0 % NUM_SUIT_TILES as u8) + 1)
        } else {
            None
        }
    }

    /// True for 1 or 9 of any suit.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        if self.0 >= HONOR_START {
            return false;
        }
        let num = self.0 % NUM_SUIT_TILES as u8;
        num == 0 || num == 8
    }

    /// True for wind or dragon tiles (indices 27-33).
    #[inline]
    pub const fn is_honor(self) -> bool {
        self.0 >= HONOR_START
    }

    /// True for the four wind tiles (indices 27-30).
    #[inline]
    pub const fn is_wind(self) -> bool {
        self.0 >= EAST && self.0 <= NORTH
    }

    /// True for the three dragon tiles (indices 31-33).
    #[inline]
    pub const fn is_dragon(self) -> bool {
        self.0 >= WHITE_DRAGON
    }

    /// True for terminals or honors (yaojiu tiles).
    #[inline]
    pub const fn is_terminal_or_honor(self) -> bool {
        self.is_terminal() || self.is_honor()
    }

    /// True for manzu, pinzu, or souzu (not honors).
    #[inline]
    pub const fn is_suited(self) -> bool {
        self.0 < HONOR_START
    }

    /// Stable display name, e.g. `"5p"` or `"C"`.
    #[inline]
    pub fn name(self) -> &'static str {
        TILE_NAMES[self.0 as usize]
    }

    /// Looks up a tile kind by its display name.
    pub fn from_name(name: &str) -> GuobiaoResult<Self> {
        match TILE_NAMES.iter().position(|&n| n == name) {
            Some(idx) => Ok(Tile(idx as u8)),
            None => Err(GuobiaoError::InvalidTile {
                name: name.to_string(),
            }),
        }
    }

    /// Iterates over all 34 tile kinds in id order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..NUM_TILE_TYPES as u8).map(Tile)
    }
}

/// Builds a tile from an id already known to be in range. Internal index
/// loops over 0..34 use this instead of unwrapping `Tile::new`.
#[inline]
pub(crate) const fn from_id(id: u8) -> Tile {
    debug_assert!(id < NUM_TILE_TYPES as u8);
    Tile(id)
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({}={})", self.0, self.name())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Display names
// ---------------------------------------------------------------------------

/// Display names for tile kinds, indexable by tile id.
pub const TILE_NAMES: [&str; NUM_TILE_TYPES] = [
    "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", "1p", "2p", "3p", "4p", "5p", "6p", "7p",
    "8p", "9p", "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", "E", "S", "W", "N", "P", "F",
    "C",
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
