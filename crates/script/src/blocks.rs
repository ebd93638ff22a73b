//! Script block set guard: the export precondition for the 21-block script.

use studio_core::error::{StudioError, StudioResult};
use studio_core::types::{ScriptBlock, SCRIPT_BLOCK_COUNT};

/// Verify that `blocks` contains exactly the 21 required script blocks
/// `B01`..`B21`.
///
/// The exporter assumes this holds and does not re-check it; callers must
/// refuse to export when verification fails.
pub fn verify_block_set(blocks: &[ScriptBlock]) -> StudioResult<()> {
    if blocks.len() != SCRIPT_BLOCK_COUNT {
        return Err(StudioError::BlockSet(format!(
            "expected {} blocks, found {}",
            SCRIPT_BLOCK_COUNT,
            blocks.len()
        )));
    }

    for number in 1..=SCRIPT_BLOCK_COUNT {
        let expected = format!("B{:02}", number);
        if !blocks.iter().any(|block| block.id == expected) {
            return Err(StudioError::BlockSet(format!(
                "missing block {}",
                expected
            )));
        }
    }

    Ok(())
}
