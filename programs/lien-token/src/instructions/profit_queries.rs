//! Read-only profit and dividend queries. Holder, pool, record and term
//! accounts may not exist yet; a missing one reads as empty.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{
    DIVIDEND_RECORD_SEED, HOLDER_SEED, LEDGER_SEED, NATIVE_VAULT_SEED, PROFIT_POOL_SEED,
    TERM_PROFIT_SEED, TOKEN_VAULT_SEED,
};
use crate::error::LienError;
use crate::state::{profit_pool, DividendRecord, Holder, Ledger, ProfitPool, TermProfit};
use crate::utils::{accounts, custody};

pub fn unsettled_profit(ctx: Context<UnsettledProfit>, asset: Pubkey) -> Result<u64> {
    let ledger = &ctx.accounts.ledger;
    let current = ledger.term_of_time(Clock::get()?.unix_timestamp)?;
    let custody = custody::custody_balance(
        &asset,
        &ctx.accounts.native_vault.to_account_info(),
        ctx.accounts.token_vault.as_ref(),
    )?;
    match accounts::load_initialized::<ProfitPool>(&ctx.accounts.profit_pool)? {
        Some(pool) => Ok(pool.unsettled(custody, current, ledger.expiration)?),
        None => Ok(custody),
    }
}

pub fn profit_at(ctx: Context<ProfitAt>, _asset: Pubkey, term: u64) -> Result<u64> {
    require!(term > 0, LienError::InvalidTerm);
    recorded_profit(&ctx.accounts.term_profit)
}

pub fn dividend_at(
    ctx: Context<DividendAt>,
    _asset: Pubkey,
    owner: Pubkey,
    term: u64,
) -> Result<u64> {
    require!(term > 0, LienError::InvalidTerm);
    let profit = recorded_profit(&ctx.accounts.term_profit)?;
    let holder = Holder::load_or_empty(&ctx.accounts.holder, owner)?;
    Ok(profit_pool::dividend_share(
        profit,
        holder.balance_at(term)?,
        ctx.accounts.ledger.total_supply_at(term)?,
    )?)
}

pub fn unreceived_dividend(
    ctx: Context<UnreceivedDividend>,
    _asset: Pubkey,
    owner: Pubkey,
) -> Result<u64> {
    let ledger = &ctx.accounts.ledger;
    let current = ledger.term_of_time(Clock::get()?.unix_timestamp)?;
    let Some(pool) = accounts::load_initialized::<ProfitPool>(&ctx.accounts.profit_pool)? else {
        return Ok(0);
    };
    let last_received_term =
        accounts::load_initialized::<DividendRecord>(&ctx.accounts.dividend_record)?
            .map_or(0, |r| r.last_received_term);
    let holder = Holder::load_or_empty(&ctx.accounts.holder, owner)?;
    Ok(pool.unreceived(last_received_term, &holder, ledger, current)?)
}

fn recorded_profit(info: &AccountInfo) -> Result<u64> {
    Ok(accounts::load_initialized::<TermProfit>(info)?.map_or(0, |p| p.amount))
}

#[derive(Accounts)]
#[instruction(asset: Pubkey)]
pub struct UnsettledProfit<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: may not exist yet; decoded in the handler.
    #[account(seeds = [PROFIT_POOL_SEED, asset.as_ref()], bump)]
    pub profit_pool: UncheckedAccount<'info>,

    #[account(seeds = [NATIVE_VAULT_SEED], bump = ledger.native_vault_bump)]
    pub native_vault: SystemAccount<'info>,

    #[account(seeds = [TOKEN_VAULT_SEED, asset.as_ref()], bump)]
    pub token_vault: Option<Account<'info, TokenAccount>>,
}

#[derive(Accounts)]
#[instruction(asset: Pubkey, term: u64)]
pub struct ProfitAt<'info> {
    /// CHECK: may not exist yet; decoded in the handler.
    #[account(seeds = [TERM_PROFIT_SEED, asset.as_ref(), &term.to_le_bytes()], bump)]
    pub term_profit: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(asset: Pubkey, owner: Pubkey, term: u64)]
pub struct DividendAt<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: may not be opened yet; decoded in the handler.
    #[account(seeds = [HOLDER_SEED, owner.as_ref()], bump)]
    pub holder: UncheckedAccount<'info>,

    /// CHECK: may not exist yet; decoded in the handler.
    #[account(seeds = [TERM_PROFIT_SEED, asset.as_ref(), &term.to_le_bytes()], bump)]
    pub term_profit: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(asset: Pubkey, owner: Pubkey)]
pub struct UnreceivedDividend<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: may not be opened yet; decoded in the handler.
    #[account(seeds = [HOLDER_SEED, owner.as_ref()], bump)]
    pub holder: UncheckedAccount<'info>,

    /// CHECK: may not exist yet; decoded in the handler.
    #[account(seeds = [PROFIT_POOL_SEED, asset.as_ref()], bump)]
    pub profit_pool: UncheckedAccount<'info>,

    /// CHECK: may not exist yet; decoded in the handler.
    #[account(seeds = [DIVIDEND_RECORD_SEED, asset.as_ref(), owner.as_ref()], bump)]
    pub dividend_record: UncheckedAccount<'info>,
}
