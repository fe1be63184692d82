//! Token-2022 fee router for the DEADS mint.
//!
//! Custodies transfer fees in a per-mint vault PDA and splits them
//! 65 / 17.5 / 17.5 across the staker pool, treasury, and LP pool.
//! `harvest_and_distribute` first pulls withheld fees out of caller-supplied
//! token accounts, then sweeps the full vault balance through the same split.
//!
//! Mint requirements (Token-2022):
//!   - TransferFeeConfig extension present
//!   - withdraw_withheld_authority = router PDA

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod state;

use instructions::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

declare_id!("DEADS3ucNHjN8iz3Cw65joYxgVdguNsjytHRqCs7QvzA");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Solana Deads Fee Router",
    project_url: "https://www.solanadeads.com",
    contacts: "email:admin@solanadeads.com,discord:solanadeads",
    policy: "https://www.solanadeads.com/security-policy",
    preferred_languages: "en",
    auditors: "None"
}

#[program]
pub mod deads_fee_router {
    use super::*;

    /// Create the per-mint router PDA and its custody vault.
    pub fn initialize_router(ctx: Context<InitializeRouter>) -> Result<()> {
        instructions::initialize_router(ctx)
    }

    /// Distribute a specific amount from the router vault.
    pub fn distribute_fees(ctx: Context<DistributeFees>, amount: u64, decimals: u8) -> Result<()> {
        instructions::distribute_fees(ctx, amount, decimals)
    }

    /// Harvest withheld fees from the supplied token accounts, then
    /// distribute the full vault balance. `remaining_accounts` is the list of
    /// fee-bearing token accounts and may be empty.
    pub fn harvest_and_distribute<'a, 'b, 'c, 'info>(
        ctx: Context<'a, 'b, 'c, 'info, HarvestAndDistribute<'info>>,
    ) -> Result<()> {
        instructions::harvest_and_distribute(ctx)
    }
}
