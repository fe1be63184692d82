use anchor_lang::prelude::*;

/// Emitted once per successful distribution.
/// The three shares sum to `total` exactly.
#[event]
pub struct FeeDistribution {
    pub stakers_amount: u64,
    pub treasury_amount: u64,
    pub lp_amount: u64,
    pub total: u64,
}

/// Emitted once per harvest run, whether or not anything was distributed.
/// `vault_after == vault_before + harvested - distributed`.
#[event]
pub struct HarvestRun {
    pub sources: u32,
    pub vault_before: u64,
    pub distributed: u64,
    pub vault_after: u64,
}
