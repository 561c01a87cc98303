//! Program-wide constants: PDA seeds and sizing limits.

use anchor_lang::prelude::*;

#[constant]
pub const LEDGER_SEED: &[u8] = b"ledger";

#[constant]
pub const HOLDER_SEED: &[u8] = b"holder";

#[constant]
pub const GRANT_SEED: &[u8] = b"grant";

#[constant]
pub const PROFIT_POOL_SEED: &[u8] = b"profit_pool";

#[constant]
pub const TERM_PROFIT_SEED: &[u8] = b"term_profit";

#[constant]
pub const DIVIDEND_RECORD_SEED: &[u8] = b"dividend";

#[constant]
pub const NATIVE_VAULT_SEED: &[u8] = b"native_vault";

#[constant]
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";

/// Asset id of the host's intrinsic asset (lamports).
pub const NATIVE_ASSET: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Upper bound on `expiration`; sizes the per-asset profit window.
pub const MAX_EXPIRATION: u64 = 32;

/// Serialized size of one `(term, balance)` checkpoint.
pub const CHECKPOINT_SIZE: usize = 8 + 8;
