use anchor_lang::prelude::*;

use crate::constants::CHECKPOINT_SIZE;
use crate::error::{LienError, LienResult};
use crate::state::checkpoint::{self, Checkpoint};
use crate::utils::accounts;

/// Per-owner ledger balance, grant lock and term checkpoint history.
#[account]
pub struct Holder {
    /// Wallet that controls this balance.
    pub owner: Pubkey,
    /// Live balance, including tokens still locked under grants.
    pub balance: u64,
    /// Sum of deposited-but-unclaimed amounts across this owner's grants.
    pub remaining_grant: u64,
    /// Last grant id allocated with this owner as beneficiary (0 = none).
    pub last_grant_id: u64,
    pub bump: u8,
    /// One entry per term in which the balance changed, strictly increasing.
    pub checkpoints: Vec<Checkpoint>,
}

impl Holder {
    pub fn space(checkpoints_len: usize) -> usize {
        8 + // discriminator
        32 + // owner
        8 + // balance
        8 + // remaining_grant
        8 + // last_grant_id
        1 + // bump
        4 + // checkpoints vector length prefix
        checkpoints_len * CHECKPOINT_SIZE
    }

    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            balance: 0,
            remaining_grant: 0,
            last_grant_id: 0,
            bump,
            checkpoints: Vec::new(),
        }
    }

    /// Reads a holder PDA. One that was never opened reads as an empty holder.
    pub fn load_or_empty(info: &AccountInfo, owner: Pubkey) -> Result<Self> {
        Ok(accounts::load_initialized::<Holder>(info)?.unwrap_or_else(|| Holder::new(owner, 0)))
    }

    /// Stamps identity onto an account just created by `init_if_needed`.
    pub fn open_if_new(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() && self.checkpoints.is_empty() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn spendable(&self) -> u64 {
        self.balance.saturating_sub(self.remaining_grant)
    }

    pub fn balance_at(&self, term: u64) -> LienResult<u64> {
        checkpoint::balance_at(&self.checkpoints, term, self.balance)
    }

    pub fn credit(&mut self, amount: u64, term: u64) -> LienResult<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LienError::MathOverflow)?;
        checkpoint::record(&mut self.checkpoints, term, self.balance)
    }

    /// Plain transfer/burn debit: raw balance first, then the grant lock.
    pub fn debit(&mut self, amount: u64, term: u64) -> LienResult<()> {
        if amount > self.balance {
            return Err(LienError::InsufficientBalance);
        }
        if amount > self.spendable() {
            return Err(LienError::ExceedsSpendable);
        }
        self.balance -= amount;
        checkpoint::record(&mut self.checkpoints, term, self.balance)
    }

    /// Grant deposits only see spendable balance and report it as plain insufficiency.
    pub fn ensure_spendable(&self, amount: u64) -> LienResult<()> {
        if amount > self.spendable() {
            return Err(LienError::InsufficientBalance);
        }
        Ok(())
    }

    pub fn lock(&mut self, amount: u64) -> LienResult<()> {
        let locked = self
            .remaining_grant
            .checked_add(amount)
            .ok_or(LienError::MathOverflow)?;
        if locked > self.balance {
            return Err(LienError::InsufficientBalance);
        }
        self.remaining_grant = locked;
        Ok(())
    }

    pub fn unlock(&mut self, amount: u64) -> LienResult<()> {
        self.remaining_grant = self
            .remaining_grant
            .checked_sub(amount)
            .ok_or(LienError::MathOverflow)?;
        Ok(())
    }

    pub fn next_grant_id(&self) -> u64 {
        self.last_grant_id.saturating_add(1)
    }

    pub fn allocate_grant_id(&mut self) -> LienResult<u64> {
        self.last_grant_id = self
            .last_grant_id
            .checked_add(1)
            .ok_or(LienError::MathOverflow)?;
        Ok(self.last_grant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::accounts::tests::RawAccount;

    fn holder(balance: u64) -> Holder {
        let mut h = Holder::new(Pubkey::new_unique(), 255);
        h.credit(balance, 1).unwrap();
        h
    }

    #[test]
    fn space_grows_with_checkpoints() {
        assert_eq!(Holder::space(0), 8 + 32 + 8 + 8 + 8 + 1 + 4);
        assert_eq!(Holder::space(3) - Holder::space(0), 3 * CHECKPOINT_SIZE);
    }

    #[test]
    fn debit_checks_balance_before_lock() {
        let mut h = holder(100);
        h.lock(60).unwrap();
        assert_eq!(h.spendable(), 40);

        assert!(matches!(h.debit(101, 1), Err(LienError::InsufficientBalance)));
        assert!(matches!(h.debit(41, 1), Err(LienError::ExceedsSpendable)));
        h.debit(40, 2).unwrap();
        assert_eq!(h.balance, 60);
        assert_eq!(h.spendable(), 0);
    }

    #[test]
    fn grant_funding_reports_insufficient_balance() {
        let mut h = holder(100);
        h.lock(90).unwrap();
        assert!(matches!(
            h.ensure_spendable(11),
            Err(LienError::InsufficientBalance)
        ));
        h.ensure_spendable(10).unwrap();
        h.ensure_spendable(0).unwrap();
    }

    #[test]
    fn mutations_checkpoint_per_term() {
        let mut h = holder(50);
        h.credit(10, 1).unwrap();
        h.debit(5, 3).unwrap();
        h.credit(1, 3).unwrap();

        assert_eq!(h.checkpoints.len(), 2);
        assert_eq!(h.balance_at(1).unwrap(), 60);
        assert_eq!(h.balance_at(2).unwrap(), 60);
        assert_eq!(h.balance_at(3).unwrap(), 56);
    }

    #[test]
    fn unlock_never_goes_negative() {
        let mut h = holder(10);
        h.lock(4).unwrap();
        assert!(matches!(h.unlock(5), Err(LienError::MathOverflow)));
        h.unlock(4).unwrap();
        assert_eq!(h.remaining_grant, 0);
    }

    #[test]
    fn grant_ids_are_sequential() {
        let mut h = holder(0);
        assert_eq!(h.next_grant_id(), 1);
        assert_eq!(h.allocate_grant_id().unwrap(), 1);
        assert_eq!(h.next_grant_id(), 2);
        assert_eq!(h.allocate_grant_id().unwrap(), 2);
    }

    #[test]
    fn unopened_holder_reads_as_empty() {
        let owner = Pubkey::new_unique();
        let h = Holder::load_or_empty(&RawAccount::empty().info(), owner).unwrap();
        assert_eq!(h.owner, owner);
        assert_eq!(h.balance_at(4).unwrap(), 0);
        assert_eq!(h.spendable(), 0);
        assert_eq!(h.remaining_grant, 0);
        assert_eq!(h.last_grant_id, 0);
    }

    #[test]
    fn opened_holder_is_decoded() {
        let mut stored = holder(40);
        stored.lock(15).unwrap();
        stored.allocate_grant_id().unwrap();
        let mut raw = RawAccount::holding(&stored);

        let h = Holder::load_or_empty(&raw.info(), Pubkey::new_unique()).unwrap();
        assert_eq!(h.owner, stored.owner);
        assert_eq!(h.spendable(), 25);
        assert_eq!(h.last_grant_id, 1);
        assert_eq!(h.balance_at(1).unwrap(), 40);
    }

    #[test]
    fn open_if_new_only_stamps_fresh_accounts() {
        let owner = Pubkey::new_unique();
        let mut fresh = Holder::new(Pubkey::default(), 0);
        fresh.open_if_new(owner, 253);
        assert_eq!(fresh.owner, owner);
        assert_eq!(fresh.bump, 253);

        let mut existing = holder(5);
        let original = existing.owner;
        existing.open_if_new(owner, 1);
        assert_eq!(existing.owner, original);
        assert_eq!(existing.bump, 255);
    }
}
