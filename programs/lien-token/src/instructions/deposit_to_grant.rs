use anchor_lang::prelude::*;

use crate::constants::{GRANT_SEED, HOLDER_SEED, LEDGER_SEED};
use crate::error::LienError;
use crate::state::{grant, Holder, Ledger};
use crate::utils::accounts;

pub fn deposit_to_grant(
    ctx: Context<DepositToGrant>,
    beneficiary: Pubkey,
    id: u64,
    amount: u64,
) -> Result<()> {
    let depositor = ctx.accounts.depositor.key();
    // A self-deposit locks the beneficiary's own balance; nothing moves.
    require!(
        (depositor == beneficiary) == ctx.accounts.depositor_holder.is_none(),
        LienError::InvalidHolder
    );

    let grant_info = ctx.accounts.grant.to_account_info();
    let mut grant = grant::load(&grant_info, id, ctx.accounts.beneficiary_holder.last_grant_id)?;

    let now = Clock::get()?.unix_timestamp;
    grant.deposit(amount)?;
    ctx.accounts.ledger.fund_grant(
        ctx.accounts.depositor_holder.as_deref_mut(),
        &mut ctx.accounts.beneficiary_holder,
        amount,
        now,
    )?;
    accounts::store(&grant_info, &grant)?;

    emit!(GrantDeposited {
        depositor,
        beneficiary,
        id,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, id: u64)]
pub struct DepositToGrant<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, beneficiary.as_ref()],
        bump = beneficiary_holder.bump,
        realloc = Holder::space(beneficiary_holder.checkpoints.len() + 1),
        realloc::payer = depositor,
        realloc::zero = false,
    )]
    pub beneficiary_holder: Account<'info, Holder>,

    /// Omitted when the beneficiary funds its own grant.
    #[account(
        mut,
        seeds = [HOLDER_SEED, depositor.key().as_ref()],
        bump = depositor_holder.bump,
        realloc = Holder::space(depositor_holder.checkpoints.len() + 1),
        realloc::payer = depositor,
        realloc::zero = false,
    )]
    pub depositor_holder: Option<Account<'info, Holder>>,

    /// CHECK: grant slot; may be closed, decoded in the handler.
    #[account(
        mut,
        seeds = [GRANT_SEED, beneficiary.as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub grant: UncheckedAccount<'info>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct GrantDeposited {
    pub depositor: Pubkey,
    pub beneficiary: Pubkey,
    pub id: u64,
    pub amount: u64,
}
