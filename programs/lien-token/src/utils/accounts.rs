//! Manual load/store for PDAs whose absence carries meaning
//! (closed grant slots, never-settled terms, unopened holders).

use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};

use crate::error::LienError;

/// `None` when the account was never created or has been closed.
pub fn load_initialized<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.data_is_empty() || *info.owner != T::owner() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let mut buf: &[u8] = &data;
    Ok(Some(T::try_deserialize(&mut buf)?))
}

pub fn store<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    value.try_serialize(&mut writer)?;
    Ok(())
}

/// Grows `info` to `new_size` bytes, topping up rent from `payer`.
pub fn grow<'info>(
    info: &AccountInfo<'info>,
    new_size: usize,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    if info.data_len() >= new_size {
        return Ok(());
    }
    info.realloc(new_size, false)?;

    let top_up = Rent::get()?
        .minimum_balance(new_size)
        .saturating_sub(info.lamports());
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: info.clone(),
                },
            ),
            top_up,
        )?;
    }
    Ok(())
}

/// Drains rent to `destination` and hands the account back to the system program.
pub fn close<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let refunded = destination
        .lamports()
        .checked_add(info.lamports())
        .ok_or(LienError::MathOverflow)?;
    **destination.try_borrow_mut_lamports()? = refunded;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&anchor_lang::system_program::ID);
    info.realloc(0, false)?;
    Ok(())
}
