use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{
    DIVIDEND_RECORD_SEED, HOLDER_SEED, LEDGER_SEED, NATIVE_VAULT_SEED, PROFIT_POOL_SEED,
    TOKEN_VAULT_SEED,
};
use crate::state::{DividendRecord, Holder, Ledger, ProfitPool};
use crate::utils::custody::Payout;

/// Pays `recipient` every unreceived dividend of `asset` still inside the window.
/// Callable by anyone; funds only go to the recipient.
pub fn receive_dividend(ctx: Context<ReceiveDividend>, asset: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let current = ctx.accounts.ledger.term_of_time(now)?;
    let recipient = ctx.accounts.recipient.key();
    ctx.accounts
        .holder
        .open_if_new(recipient, ctx.bumps.holder);

    let record = &mut ctx.accounts.dividend_record;
    record.holder = recipient;
    record.asset = asset;
    record.bump = ctx.bumps.dividend_record;

    let pool = &mut ctx.accounts.profit_pool;
    pool.asset = asset;
    pool.bump = ctx.bumps.profit_pool;

    // Bookkeeping is final before any asset leaves custody.
    let amount = pool.receive(
        &mut record.last_received_term,
        &ctx.accounts.holder,
        &ctx.accounts.ledger,
        current,
    )?;

    let ledger_info = ctx.accounts.ledger.to_account_info();
    let native_vault_info = ctx.accounts.native_vault.to_account_info();
    let recipient_info = ctx.accounts.recipient.to_account_info();
    Payout {
        ledger: &ledger_info,
        ledger_bump: ctx.accounts.ledger.bump,
        native_vault: &native_vault_info,
        native_vault_bump: ctx.accounts.ledger.native_vault_bump,
        recipient: &recipient_info,
        token_vault: ctx.accounts.token_vault.as_deref(),
        recipient_token_account: ctx.accounts.recipient_token_account.as_deref(),
        token_program: ctx.accounts.token_program.as_ref(),
        system_program: &ctx.accounts.system_program,
    }
    .send(&asset, amount)?;

    emit!(DividendReceived {
        asset,
        recipient,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset: Pubkey)]
pub struct ReceiveDividend<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = Holder::space(0),
        seeds = [HOLDER_SEED, recipient.key().as_ref()],
        bump
    )]
    pub holder: Box<Account<'info, Holder>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ProfitPool::space(ledger.window_capacity()),
        seeds = [PROFIT_POOL_SEED, asset.as_ref()],
        bump
    )]
    pub profit_pool: Box<Account<'info, ProfitPool>>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + DividendRecord::SIZE,
        seeds = [DIVIDEND_RECORD_SEED, asset.as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub dividend_record: Box<Account<'info, DividendRecord>>,

    #[account(mut, seeds = [NATIVE_VAULT_SEED], bump = ledger.native_vault_bump)]
    pub native_vault: SystemAccount<'info>,

    /// Required for SPL assets, with the two accounts below.
    #[account(mut, seeds = [TOKEN_VAULT_SEED, asset.as_ref()], bump)]
    pub token_vault: Option<Box<Account<'info, TokenAccount>>>,

    #[account(mut)]
    pub recipient_token_account: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Option<Program<'info, Token>>,

    /// CHECK: dividend owner; native payouts land here. Bound to `holder` by seeds.
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct DividendReceived {
    pub asset: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
