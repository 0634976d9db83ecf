//! Playback adjustment.
//!
//! Flattens a curriculum into one ordered lecture sequence, drops everything
//! before an optional resume point, and converts raw runtimes to effective
//! runtimes at the learner's playback speed.

use crate::models::course::{CurriculumData, Unit, UnitId};
use crate::models::plan::Lecture;
use crate::scheduler::error::{ScheduleError, ScheduleResult};

/// Effective runtime of one unit at the given playback speed, truncated to
/// one decimal place.
fn effective_runtime(raw_seconds: u32, speed: f64) -> f64 {
    (f64::from(raw_seconds) / speed * 10.0).floor() / 10.0
}

/// Flatten a curriculum into speed-adjusted lectures.
///
/// The sections' unit ordering is preserved. When `start_unit_id` is
/// non-zero, the flat sequence is scanned left to right for the first unit
/// with that identifier and everything before it is dropped; the retained
/// units keep the numbering of their true position in the original section.
/// A `start_unit_id` that never occurs leaves the sequence untouched.
/// Lectures whose effective runtime comes out at or below zero are excluded.
///
/// # Arguments
///
/// * `curriculum` - The course's full curriculum
/// * `speed` - Playback speed multiplier, must be greater than 0
/// * `start_unit_id` - Unit to resume from; `UnitId(0)` means from the start
///
/// # Returns
///
/// The ordered lecture sequence, or `InvalidPlaybackSpeed` when `speed <= 0`.
pub fn adjust_playback(
    curriculum: &CurriculumData,
    speed: f64,
    start_unit_id: UnitId,
) -> ScheduleResult<Vec<Lecture>> {
    if speed <= 0.0 {
        return Err(ScheduleError::InvalidPlaybackSpeed { speed });
    }

    // Phase 1: flatten, keeping each unit's 1-based section number and
    // position within its original section.
    let flat: Vec<(usize, usize, &Unit)> = curriculum
        .curriculum
        .iter()
        .enumerate()
        .flat_map(|(section_idx, section)| {
            section
                .units
                .iter()
                .enumerate()
                .map(move |(unit_idx, unit)| (section_idx + 1, unit_idx + 1, unit))
        })
        .collect();

    // Phase 2: locate the resume point, then slice. Units before the first
    // occurrence are dropped; everything from it on is included
    // unconditionally.
    let resume_index = if start_unit_id.value() != 0 {
        flat.iter()
            .position(|(_, _, unit)| unit.id == start_unit_id)
            .unwrap_or(0)
    } else {
        0
    };

    let lectures = flat[resume_index..]
        .iter()
        .filter_map(|&(section_no, position, unit)| {
            let runtime_seconds = effective_runtime(unit.runtime, speed);
            if runtime_seconds <= 0.0 {
                return None;
            }
            Some(Lecture {
                unit_id: unit.id,
                title: format!("{}-{}. {}", section_no, position, unit.title),
                runtime_seconds,
            })
        })
        .collect();

    Ok(lectures)
}
