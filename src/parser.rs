//! Compact hand-notation parsing and formatting.
//!
//! Suited tiles are written as digit runs followed by a suit letter
//! (`"123m55p"`), honors as single uppercase letters (`E S W N P F C`).
//! Whitespace is ignored. `format_hand` is the inverse of `parse_hand`.

use crate::errors::{GuobiaoError, GuobiaoResult};
use crate::tile::{
    from_id, Suit, Tile, EAST, GREEN_DRAGON, MANZU_START, NORTH, PINZU_START, RED_DRAGON, SOUTH,
    SOUZU_START, WEST, WHITE_DRAGON,
};

pub fn parse_hand(text: &str) -> GuobiaoResult<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut pending_digits: Vec<u8> = Vec::new();

    for c in text.chars() {
        match c {
            '1'..='9' => {
                pending_digits.push(c as u8 - b'0');
            }
            'm' | 'p' | 's' => {
                if pending_digits.is_empty() {
                    return Err(GuobiaoError::Parse {
                        input: text.to_string(),
                        message: format!("suit letter '{c}' without preceding digits"),
                    });
                }
                let start = match c {
                    'm' => MANZU_START,
                    'p' => PINZU_START,
                    _ => SOUZU_START,
                };
                for d in pending_digits.drain(..) {
                    tiles.push(from_id(start + d - 1));
                }
            }
            'E' | 'S' | 'W' | 'N' | 'P' | 'F' | 'C' => {
                if !pending_digits.is_empty() {
                    return Err(GuobiaoError::Parse {
                        input: text.to_string(),
                        message: format!("pending digits before honor letter '{c}'"),
                    });
                }
                let id = match c {
                    'E' => EAST,
                    'S' => SOUTH,
                    'W' => WEST,
                    'N' => NORTH,
                    'P' => WHITE_DRAGON,
                    'F' => GREEN_DRAGON,
                    _ => RED_DRAGON,
                };
                tiles.push(from_id(id));
            }
            c if c.is_whitespace() => {}
            _ => {
                return Err(GuobiaoError::Parse {
                    input: text.to_string(),
                    message: format!("unrecognized character '{c}'"),
                });
            }
        }
    }

    if !pending_digits.is_empty() {
        return Err(GuobiaoError::Parse {
            input: text.to_string(),
            message: "Pending digits without suit".to_string(),
        });
    }

    Ok(tiles)
}

pub fn format_hand(tiles: &[Tile]) -> String {
    let mut out = String::new();
    let mut open: Option<Suit> = None;

    for &t in tiles {
        match (t.suit(), t.number()) {
            (Some(suit), Some(num)) => {
                if let Some(prev) = open {
                    if prev != suit {
                        out.push(suit_letter(prev));
                    }
                }
                out.push((b'0' + num) as char);
                open = Some(suit);
            }
            _ => {
                if let Some(prev) = open.take() {
                    out.push(suit_letter(prev));
                }
                out.push_str(t.name());
            }
        }
    }
    if let Some(prev) = open {
        out.push(suit_letter(prev));
    }
    out
}

fn suit_letter(suit: Suit) -> char {
    match suit {
        Suit::Manzu => 'm',
        Suit::Pinzu => 'p',
        Suit::Souzu => 's',
    }
}
