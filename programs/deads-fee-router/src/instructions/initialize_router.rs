use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{constants::*, state::Router};

#[derive(Accounts)]
pub struct InitializeRouter<'info> {
    #[account(
        init,
        payer = authority,
        space = Router::LEN,
        seeds = [SEED_NAMESPACE, SEED_ROUTER, mint.key().as_ref()],
        bump
    )]
    pub router: Account<'info, Router>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// Program-owned custody vault. Created here so both distribution paths
    /// can assume it exists.
    #[account(
        init,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = router,
        associated_token::token_program = token_program
    )]
    pub router_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_router(ctx: Context<InitializeRouter>) -> Result<()> {
    let router = &mut ctx.accounts.router;
    router.bump = ctx.bumps.router;
    router.authority = ctx.accounts.authority.key();

    msg!(
        "Router initialized for mint {} with vault {}",
        ctx.accounts.mint.key(),
        ctx.accounts.router_vault.key()
    );

    Ok(())
}
