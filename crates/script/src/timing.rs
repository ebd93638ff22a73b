//! Timing reconciliation: merge block durations with an optional
//! authoritative timeline.

use std::collections::HashMap;

use tracing::debug;

use studio_core::types::{ScriptBlock, TimelineSegment, TimestampInfo};

/// Compute per-block timestamps.
///
/// A non-empty timeline is used verbatim when it has a segment for every
/// block id in `blocks`; segments for block ids no longer present are
/// tolerated and ignored. A missing, empty, or incomplete timeline demotes
/// silently to cumulative layout, which assigns each block a start equal to
/// the running total of prior durations. The fallback is contiguous and
/// overlap-free by construction.
///
/// Never errors. Callers wanting a "using estimated timing" indicator
/// re-check timeline coverage themselves; the fallback is not signaled in
/// the return value.
pub fn reconcile(
    blocks: &[ScriptBlock],
    timeline: Option<&[TimelineSegment]>,
) -> HashMap<String, TimestampInfo> {
    if let Some(segments) = timeline {
        if !segments.is_empty() {
            let by_id: HashMap<&str, &TimelineSegment> = segments
                .iter()
                .map(|segment| (segment.block_id.as_str(), segment))
                .collect();

            if blocks.iter().all(|block| by_id.contains_key(block.id.as_str())) {
                return blocks
                    .iter()
                    .map(|block| {
                        let segment = by_id[block.id.as_str()];
                        let info = TimestampInfo {
                            start_minute: segment.start_minute,
                            end_minute: segment.end_minute,
                            duration_minutes: segment
                                .end_minute
                                .saturating_sub(segment.start_minute),
                        };
                        (block.id.clone(), info)
                    })
                    .collect();
            }
            debug!("timeline does not cover every script block, using cumulative layout");
        }
    }

    let mut elapsed = 0u32;
    blocks
        .iter()
        .map(|block| {
            let info = TimestampInfo {
                start_minute: elapsed,
                end_minute: elapsed + block.duration_minutes,
                duration_minutes: block.duration_minutes,
            };
            elapsed += block.duration_minutes;
            (block.id.clone(), info)
        })
        .collect()
}
