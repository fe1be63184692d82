use anchor_lang::prelude::*;

use crate::constants::{LP_BP, MAX_BPS, STAKERS_BP, TREASURY_BP};
use crate::errors::RouterError;

/// Floor share of `amount` at `bps` parts-per-10000, checked in the u64 domain.
fn bp_share(amount: u64, bps: u16) -> Result<u64> {
    let scaled = amount
        .checked_mul(bps as u64)
        .ok_or(RouterError::MathOverflow)?;
    Ok(scaled / MAX_BPS as u64)
}

/// Split `amount` across stakers / treasury / LP by basis points.
///
/// Each share is floored; the truncation remainder is assigned to the
/// stakers share so `stakers + treasury + lp == amount` holds exactly.
pub fn split_amount(
    amount: u64,
    stakers_bp: u16,
    treasury_bp: u16,
    lp_bp: u16,
) -> Result<(u64, u64, u64)> {
    let stakers_floor = bp_share(amount, stakers_bp)?;
    let treasury = bp_share(amount, treasury_bp)?;
    let lp = bp_share(amount, lp_bp)?;

    let floored = stakers_floor
        .checked_add(treasury)
        .and_then(|v| v.checked_add(lp))
        .ok_or(RouterError::MathOverflow)?;
    let remainder = amount
        .checked_sub(floored)
        .ok_or(RouterError::MathOverflow)?;
    let stakers = stakers_floor
        .checked_add(remainder)
        .ok_or(RouterError::MathOverflow)?;

    Ok((stakers, treasury, lp))
}

/// Split with the production ratio table.
pub fn compute_splits(amount: u64) -> Result<(u64, u64, u64)> {
    split_amount(amount, STAKERS_BP, TREASURY_BP, LP_BP)
}
