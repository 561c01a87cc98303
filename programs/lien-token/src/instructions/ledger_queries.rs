//! Read-only ledger queries, answered through return data.

use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::Ledger;

pub fn current_term(ctx: Context<LedgerQuery>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.ledger.term_of_time(now)?)
}

pub fn term_of_time(ctx: Context<LedgerQuery>, time: i64) -> Result<u64> {
    Ok(ctx.accounts.ledger.term_of_time(time)?)
}

pub fn start_of_term(ctx: Context<LedgerQuery>, term: u64) -> Result<i64> {
    Ok(ctx.accounts.ledger.start_of_term(term)?)
}

pub fn end_of_term(ctx: Context<LedgerQuery>, term: u64) -> Result<i64> {
    Ok(ctx.accounts.ledger.end_of_term(term)?)
}

pub fn total_supply_at_term_end(ctx: Context<LedgerQuery>, term: u64) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_supply_at(term)?)
}

pub fn total_remaining_grants(ctx: Context<LedgerQuery>) -> Result<u64> {
    Ok(ctx.accounts.ledger.total_remaining_grants)
}

#[derive(Accounts)]
pub struct LedgerQuery<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}
