use anchor_lang::prelude::*;

/// Per-mint router instance. Written once at initialization and never
/// mutated afterwards; the PDA itself signs all vault debits.
#[account]
#[derive(Default)]
pub struct Router {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Identity that initialized the router
    pub authority: Pubkey,
}

impl Router {
    pub const LEN: usize = 8 + // discriminator
        1 + // bump
        32; // authority
}
