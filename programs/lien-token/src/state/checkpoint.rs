use anchor_lang::prelude::*;

use crate::error::{LienError, LienResult};

/// Balance as of the last mutation within `term`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checkpoint {
    pub term: u64,
    pub balance: u64,
}

/// Overwrites the checkpoint for `term` if it is the latest one, otherwise appends.
/// Terms must be non-decreasing across calls.
pub fn record(history: &mut Vec<Checkpoint>, term: u64, balance: u64) -> LienResult<()> {
    match history.last_mut() {
        Some(last) if last.term == term => last.balance = balance,
        Some(last) if last.term > term => return Err(LienError::InvalidTerm),
        _ => history.push(Checkpoint { term, balance }),
    }
    Ok(())
}

/// Balance at the end of `term`. `baseline` answers for a history that was never written.
pub fn balance_at(history: &[Checkpoint], term: u64, baseline: u64) -> LienResult<u64> {
    if term == 0 {
        return Err(LienError::InvalidTerm);
    }
    if history.is_empty() {
        return Ok(baseline);
    }
    // Count of checkpoints with term' <= term.
    let idx = history.partition_point(|c| c.term <= term);
    Ok(if idx == 0 { 0 } else { history[idx - 1].balance })
}
