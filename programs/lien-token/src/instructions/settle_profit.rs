use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{
    LEDGER_SEED, NATIVE_VAULT_SEED, PROFIT_POOL_SEED, TERM_PROFIT_SEED, TOKEN_VAULT_SEED,
};
use crate::error::LienError;
use crate::state::{Ledger, ProfitPool, TermProfit};
use crate::utils::custody;

/// Recognizes custody that is not owed to anyone as profit of the current term.
/// `term` must be the current term; it addresses the permanent `TermProfit` record.
pub fn settle_profit(ctx: Context<SettleProfit>, asset: Pubkey, term: u64) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let now = Clock::get()?.unix_timestamp;
    let current = ledger.term_of_time(now)?;
    require!(term == current, LienError::InvalidTerm);

    let custody = custody::custody_balance(
        &asset,
        &ctx.accounts.native_vault.to_account_info(),
        ctx.accounts.token_vault.as_ref(),
    )?;

    let pool = &mut ctx.accounts.profit_pool;
    pool.asset = asset;
    pool.bump = ctx.bumps.profit_pool;
    let amount = pool.settle(custody, current, ledger.expiration, ledger.window_capacity())?;

    let record = &mut ctx.accounts.term_profit;
    record.asset = asset;
    record.term = current;
    record.bump = ctx.bumps.term_profit;
    record.add(amount)?;

    emit!(ProfitSettled {
        asset,
        term: current,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset: Pubkey, term: u64)]
pub struct SettleProfit<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ProfitPool::space(ledger.window_capacity()),
        seeds = [PROFIT_POOL_SEED, asset.as_ref()],
        bump
    )]
    pub profit_pool: Account<'info, ProfitPool>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + TermProfit::SIZE,
        seeds = [TERM_PROFIT_SEED, asset.as_ref(), &term.to_le_bytes()],
        bump
    )]
    pub term_profit: Account<'info, TermProfit>,

    #[account(seeds = [NATIVE_VAULT_SEED], bump = ledger.native_vault_bump)]
    pub native_vault: SystemAccount<'info>,

    /// Required for SPL assets.
    #[account(seeds = [TOKEN_VAULT_SEED, asset.as_ref()], bump)]
    pub token_vault: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ProfitSettled {
    pub asset: Pubkey,
    pub term: u64,
    pub amount: u64,
}
