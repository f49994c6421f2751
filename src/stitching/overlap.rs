use std::collections::HashSet;

use crate::models::TimeFrame;

/// Greedily keep the highest scoring frames such that no two kept frames
/// share a timepoint. A frame that touches any claimed timepoint is dropped
/// entirely. Frames with equal scores keep their relative order.
///
/// Frames whose spans overlap without sharing an exact timepoint can both
/// survive.
pub fn remove_overlapping_timeframes(mut timeframes: Vec<TimeFrame>) -> Vec<TimeFrame> {
    // sort_by is stable
    timeframes.sort_by(|a, b| b.score().total_cmp(&a.score()));

    let mut claimed: HashSet<i64> = HashSet::new();
    let mut final_frames = Vec::new();

    for frame in timeframes {
        if is_claimed(&frame, &claimed) {
            continue;
        }
        claimed.extend(frame.timepoints());
        final_frames.push(frame);
    }

    final_frames
}

fn is_claimed(frame: &TimeFrame, claimed: &HashSet<i64>) -> bool {
    frame.timepoints().any(|tp| claimed.contains(&tp))
}
