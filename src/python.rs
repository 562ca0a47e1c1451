//! Python bindings exposing the engine over hand notation strings.

use pyo3::prelude::*;

use crate::decompose::decompose;
use crate::parser::parse_hand;
use crate::rules::rule;
use crate::score::score;
use crate::types::{Context, HuResult, Wind};
use crate::wait::compute_wait;

/// Scores a fourteen-tile hand given in notation form.
///
/// Returns `(total_score, achieved)` where `achieved` pairs each matched
/// pattern's traditional name with its multiplicity.
#[pyfunction]
#[pyo3(signature = (hand, ctx=None))]
fn score_hand(hand: &str, ctx: Option<Context>) -> PyResult<(i32, Vec<(String, u32)>)> {
    let tiles = parse_hand(hand)?;
    let ctx = ctx.unwrap_or_default();
    let result = score(&tiles, &ctx)?;
    let achieved = result
        .achieved
        .iter()
        .map(|&(id, mult)| (rule(id).name.to_string(), mult))
        .collect();
    Ok((result.total_score, achieved))
}

/// Winning check for a fourteen-tile hand in notation form.
#[pyfunction]
fn is_winning_hand(hand: &str) -> PyResult<bool> {
    let tiles = parse_hand(hand)?;
    Ok(decompose(&tiles)?.is_winning())
}

/// Winning split of a fourteen-tile hand, or `None` when it does not win.
///
/// Returns `(melds, pair)` with tiles as notation names. A seven-pairs
/// win has no melds and all fourteen tiles in the pair slot.
#[pyfunction]
fn decompose_hand(hand: &str) -> PyResult<Option<(Vec<Vec<String>>, Vec<String>)>> {
    let tiles = parse_hand(hand)?;
    match decompose(&tiles)? {
        HuResult::Winning(d) => {
            let melds = d
                .melds
                .iter()
                .map(|m| m.tiles.iter().map(|t| t.name().to_string()).collect())
                .collect();
            let pair = d.pair.iter().map(|t| t.name().to_string()).collect();
            Ok(Some((melds, pair)))
        }
        HuResult::NotWinning => Ok(None),
    }
}

/// Tiles completing a thirteen-tile hand, as notation names.
#[pyfunction]
fn waits(hand: &str) -> PyResult<Vec<String>> {
    let tiles = parse_hand(hand)?;
    let wanted = compute_wait(&tiles)?;
    Ok(wanted.iter().map(|t| t.name().to_string()).collect())
}

#[pymodule]
fn guobiao_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Context>()?;
    m.add_class::<Wind>()?;
    m.add_function(wrap_pyfunction!(score_hand, m)?)?;
    m.add_function(wrap_pyfunction!(is_winning_hand, m)?)?;
    m.add_function(wrap_pyfunction!(decompose_hand, m)?)?;
    m.add_function(wrap_pyfunction!(waits, m)?)?;
    Ok(())
}
