//! Where each asset is held and how it leaves.
//! - native asset: lamports above the rent reserve of the `native_vault` PDA
//! - SPL asset: balance of the `token_vault` PDA for that mint, owned by the ledger

use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer as SystemTransfer},
};
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{LEDGER_SEED, NATIVE_ASSET, NATIVE_VAULT_SEED};
use crate::error::LienError;

pub fn is_native(asset: &Pubkey) -> bool {
    *asset == NATIVE_ASSET
}

pub fn custody_balance(
    asset: &Pubkey,
    native_vault: &AccountInfo,
    token_vault: Option<&Account<TokenAccount>>,
) -> Result<u64> {
    if is_native(asset) {
        let reserve = Rent::get()?.minimum_balance(0);
        return Ok(native_vault.lamports().saturating_sub(reserve));
    }
    let vault = token_vault.ok_or(LienError::MissingTokenAccounts)?;
    require_keys_eq!(vault.mint, *asset, LienError::InvalidTokenMint);
    Ok(vault.amount)
}

pub struct Payout<'a, 'info> {
    pub ledger: &'a AccountInfo<'info>,
    pub ledger_bump: u8,
    pub native_vault: &'a AccountInfo<'info>,
    pub native_vault_bump: u8,
    pub recipient: &'a AccountInfo<'info>,
    pub token_vault: Option<&'a Account<'info, TokenAccount>>,
    pub recipient_token_account: Option<&'a Account<'info, TokenAccount>>,
    pub token_program: Option<&'a Program<'info, Token>>,
    pub system_program: &'a Program<'info, System>,
}

impl<'a, 'info> Payout<'a, 'info> {
    /// Sends `amount` of `asset` out of custody. Callers finish their own
    /// bookkeeping first.
    pub fn send(&self, asset: &Pubkey, amount: u64) -> Result<()> {
        if is_native(asset) {
            return self.send_native(amount);
        }

        let vault = self.token_vault.ok_or(LienError::MissingTokenAccounts)?;
        let destination = self
            .recipient_token_account
            .ok_or(LienError::MissingTokenAccounts)?;
        let token_program = self.token_program.ok_or(LienError::MissingTokenAccounts)?;

        require_keys_eq!(vault.mint, *asset, LienError::InvalidTokenMint);
        require_keys_eq!(destination.mint, *asset, LienError::InvalidTokenMint);
        require_keys_eq!(
            destination.owner,
            *self.recipient.key,
            LienError::InvalidTokenAccount
        );

        if amount == 0 {
            return Ok(());
        }

        let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, &[self.ledger_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                Transfer {
                    from: vault.to_account_info(),
                    to: destination.to_account_info(),
                    authority: self.ledger.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }

    fn send_native(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        let signer_seeds: &[&[&[u8]]] = &[&[NATIVE_VAULT_SEED, &[self.native_vault_bump]]];
        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                SystemTransfer {
                    from: self.native_vault.clone(),
                    to: self.recipient.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
