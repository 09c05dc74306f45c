//! ASCII flight/impact timeline.
//!
//! Maps a shot distance and a target distance onto a fixed-width ruler:
//!
//! ```text
//!  /~~~~~~~~~~~~~~\
//! /--------+------T--\------+---------+---------|
//! ```
//!
//! Columns are 1-based throughout; column `n` is character offset `n - 1`.

use salvo_core::constants::{
    MIN_OVERTAKEN_TARGET_COLUMN, MIN_RULER_WIDTH, MIN_SHOT_COLUMN, MIN_TARGET_COLUMN,
};
use salvo_core::types::TimelineFrame;

const FLIGHT_GLYPH: char = '~';
const RULE_GLYPH: char = '-';
const TICK_GLYPH: char = '+';
const DESCENT_GLYPH: char = '\\';
const MISS_GLYPH: char = '\\';
const TARGET_GLYPH: char = 'T';
const HIT_GLYPH: char = '*';

/// Unmarked flight path: `" /~~~…"`.
pub fn flight_template(width: usize) -> Vec<char> {
    (0..width)
        .map(|i| match i {
            0 => ' ',
            1 => '/',
            _ => FLIGHT_GLYPH,
        })
        .collect()
}

/// Unmarked impact ruler: `"/--------+---------+…|"`.
///
/// `width` must be at least `MIN_RULER_WIDTH`.
pub fn impact_template(width: usize) -> Vec<char> {
    debug_assert!(width >= MIN_RULER_WIDTH, "ruler width {} too narrow", width);
    (0..width)
        .map(|i| {
            if i == 0 {
                '/'
            } else if i == width - 1 {
                '|'
            } else if i % 10 == 9 {
                TICK_GLYPH
            } else {
                RULE_GLYPH
            }
        })
        .collect()
}

/// Ruler columns `(shot, target)` for the two distances.
///
/// Distances are expected within `0..=max_distance`, and `width` must be
/// at least `MIN_RULER_WIDTH`.
pub fn impact_indices(
    shot_distance: f64,
    target_distance: f64,
    max_distance: f64,
    width: usize,
) -> (usize, usize) {
    debug_assert!(width >= MIN_RULER_WIDTH, "ruler width {} too narrow", width);
    let span = (width - 1) as f64;
    let column = |distance: f64| (distance / max_distance * span).round() as i64 + 1;

    let mut shot = column(shot_distance);
    let mut target = column(target_distance);

    // Never draw both markers in one column.
    if shot == target {
        shot = if shot_distance < target_distance || target >= width as i64 {
            target - 1
        } else {
            target + 1
        };
    }

    let min_shot = MIN_SHOT_COLUMN as i64;
    let min_target = MIN_TARGET_COLUMN as i64;
    let min_overtaken = MIN_OVERTAKEN_TARGET_COLUMN as i64;

    let shot_short = shot < min_shot;
    let target_short = target < min_target;
    if shot_short && target_short {
        if target < shot {
            // Shot overtook a target that is almost home.
            shot = min_shot;
            target = target.max(min_overtaken);
        } else {
            let shift = (min_shot - shot).max(min_target - target);
            shot += shift;
            target += shift;
        }
    } else if shot_short {
        shot = min_shot;
    } else if target_short {
        target = target.max(min_overtaken);
    }

    (shot as usize, target as usize)
}

/// Render the timeline for one shot.
pub fn render_timeline(
    shot_distance: f64,
    target_distance: f64,
    max_distance: f64,
    width: usize,
    hit: bool,
) -> TimelineFrame {
    let (shot_index, target_index) =
        impact_indices(shot_distance, target_distance, max_distance, width);

    let mut impact = impact_template(width);
    let descent_column = if hit {
        impact[target_index - 1] = HIT_GLYPH;
        target_index
    } else {
        impact[shot_index - 1] = MISS_GLYPH;
        impact[target_index - 1] = TARGET_GLYPH;
        shot_index
    };

    let mut flight = flight_template(width);
    let cut = descent_column - 2;
    flight[cut] = DESCENT_GLYPH;
    for glyph in flight.iter_mut().skip(cut + 1) {
        *glyph = ' ';
    }

    TimelineFrame {
        flight_line: flight.into_iter().collect(),
        impact_line: impact.into_iter().collect(),
        shot_index,
        target_index,
        hit,
    }
}
