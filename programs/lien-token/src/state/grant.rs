use anchor_lang::prelude::*;

use crate::error::{LienError, LienResult};
use crate::utils::accounts;

/// Linear vesting lock on part of a beneficiary's balance.
#[account]
pub struct Grant {
    pub beneficiary: Pubkey,
    /// Paid the rent; refunded when the grant is closed.
    pub creator: Pubkey,
    pub id: u64,
    pub amount: u64,
    pub claimed: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub bump: u8,
}

impl Grant {
    pub const SIZE: usize =
        32 + // beneficiary
        32 + // creator
        8 +  // id
        8 +  // amount
        8 +  // claimed
        8 +  // start_time
        8 +  // end_time
        1;   // bump

    pub fn vested(&self, now: i64) -> LienResult<u64> {
        if now <= self.start_time {
            return Ok(0);
        }
        let duration = self
            .end_time
            .checked_sub(self.start_time)
            .ok_or(LienError::MathOverflow)?;
        if duration <= 0 {
            return Ok(self.amount);
        }
        let elapsed = (now - self.start_time).min(duration);
        let v = (self.amount as u128)
            .checked_mul(elapsed as u128)
            .ok_or(LienError::MathOverflow)?
            / duration as u128;
        u64::try_from(v).map_err(|_| LienError::MathOverflow)
    }

    pub fn claimable(&self, now: i64) -> LienResult<u64> {
        self.vested(now)?
            .checked_sub(self.claimed)
            .ok_or(LienError::MathOverflow)
    }

    pub fn deposit(&mut self, amount: u64) -> LienResult<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LienError::MathOverflow)?;
        Ok(())
    }

    /// Marks everything vested so far as claimed and returns the newly claimed amount.
    pub fn claim(&mut self, now: i64) -> LienResult<u64> {
        let claimable = self.claimable(now)?;
        self.claimed = self
            .claimed
            .checked_add(claimable)
            .ok_or(LienError::MathOverflow)?;
        Ok(claimable)
    }

    /// Fully vested and fully claimed; the slot can be closed.
    pub fn is_exhausted(&self, now: i64) -> bool {
        self.claimed == self.amount && now >= self.end_time
    }

    pub fn info(&self, now: i64) -> LienResult<GrantInfo> {
        Ok(GrantInfo {
            amount: self.amount,
            claimed: self.claimed,
            vested: self.vested(now)?,
            start_time: self.start_time,
            end_time: self.end_time,
        })
    }
}

/// Reads grant `id` from its PDA, reporting why the slot is unusable.
pub fn load(info: &AccountInfo, id: u64, last_grant_id: u64) -> Result<Grant> {
    let slot = accounts::load_initialized::<Grant>(info)?;
    check_slot(id, last_grant_id, slot.is_some())?;
    Ok(slot.ok_or(LienError::GrantAlreadyClaimed)?)
}

pub fn validate_end_time(end_time: i64, now: i64) -> LienResult<()> {
    if end_time <= now {
        return Err(LienError::InvalidEndTime);
    }
    Ok(())
}

/// Classifies a grant lookup: ids past the counter were never issued,
/// issued ids whose slot is gone were closed after a full claim.
pub fn check_slot(id: u64, last_grant_id: u64, slot_open: bool) -> LienResult<()> {
    if id == 0 || id > last_grant_id {
        return Err(LienError::GrantNotFound);
    }
    if !slot_open {
        return Err(LienError::GrantAlreadyClaimed);
    }
    Ok(())
}

/// Returned by `get_grant`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrantInfo {
    pub amount: u64,
    pub claimed: u64,
    pub vested: u64,
    pub start_time: i64,
    pub end_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::accounts::tests::RawAccount;

    fn grant(start: i64, end: i64) -> Grant {
        Grant {
            beneficiary: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            id: 1,
            amount: 0,
            claimed: 0,
            start_time: start,
            end_time: end,
            bump: 255,
        }
    }

    #[test]
    fn later_deposit_vests_from_grant_start() {
        let mut g = grant(0, 100);
        g.deposit(10).unwrap();
        g.deposit(90).unwrap();
        assert_eq!(g.vested(33).unwrap(), 33);
        assert_eq!(g.vested(0).unwrap(), 0);
        assert_eq!(g.vested(100).unwrap(), 100);
        assert_eq!(g.vested(1_000).unwrap(), 100);
    }

    #[test]
    fn vesting_is_monotonic_and_capped() {
        let mut g = grant(500, 577);
        g.deposit(1_000_003).unwrap();
        let mut prev = 0;
        for t in 480..700 {
            let v = g.vested(t).unwrap();
            assert!(v >= prev);
            assert!(v <= g.amount);
            prev = v;
        }
        assert_eq!(g.vested(577).unwrap(), g.amount);
    }

    #[test]
    fn claim_accumulates_and_exhausts() {
        let mut g = grant(0, 100);
        g.deposit(100).unwrap();

        assert_eq!(g.claim(25).unwrap(), 25);
        assert_eq!(g.claim(25).unwrap(), 0);
        assert_eq!(g.claim(60).unwrap(), 35);
        assert!(!g.is_exhausted(60));
        assert_eq!(g.claim(100).unwrap(), 40);
        assert_eq!(g.claimed, 100);
        assert!(g.is_exhausted(100));
    }

    #[test]
    fn empty_grant_is_exhausted_only_after_end() {
        let g = grant(0, 100);
        assert!(!g.is_exhausted(99));
        assert!(g.is_exhausted(100));
    }

    #[test]
    fn deposit_after_end_is_immediately_vested() {
        let mut g = grant(0, 100);
        g.deposit(10).unwrap();
        assert_eq!(g.claim(150).unwrap(), 10);
        g.deposit(5).unwrap();
        assert_eq!(g.claimable(150).unwrap(), 5);
    }

    #[test]
    fn end_time_must_be_future() {
        assert!(matches!(
            validate_end_time(10, 10),
            Err(LienError::InvalidEndTime)
        ));
        assert!(matches!(
            validate_end_time(9, 10),
            Err(LienError::InvalidEndTime)
        ));
        validate_end_time(11, 10).unwrap();
    }

    #[test]
    fn slot_lookup_distinguishes_missing_from_claimed() {
        assert!(matches!(check_slot(0, 3, false), Err(LienError::GrantNotFound)));
        assert!(matches!(check_slot(4, 3, true), Err(LienError::GrantNotFound)));
        assert!(matches!(
            check_slot(2, 3, false),
            Err(LienError::GrantAlreadyClaimed)
        ));
        check_slot(3, 3, true).unwrap();
    }

    #[test]
    fn slot_lookup_separates_unissued_from_closed() {
        let mut empty = RawAccount::empty();
        let not_found: Error = LienError::GrantNotFound.into();
        let claimed: Error = LienError::GrantAlreadyClaimed.into();

        // Beneficiary never opened: no ids issued.
        assert_eq!(load(&empty.info(), 1, 0).err().unwrap(), not_found);
        assert_eq!(load(&empty.info(), 3, 2).err().unwrap(), not_found);
        assert_eq!(load(&empty.info(), 2, 2).err().unwrap(), claimed);

        let mut open = RawAccount::holding(&grant(100, 200));
        assert_eq!(load(&open.info(), 1, 1).unwrap().end_time, 200);
    }
}
