use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{constants::*, errors::RouterError, events::FeeDistribution, math, state::Router};

#[derive(Accounts)]
pub struct DistributeFees<'info> {
    #[account(
        seeds = [SEED_NAMESPACE, SEED_ROUTER, mint.key().as_ref()],
        bump = router.bump
    )]
    pub router: Account<'info, Router>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = router,
        associated_token::token_program = token_program
    )]
    pub router_vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: fixed owner; the wallet ATA is derived against it below
    #[account(address = TREASURY_OWNER)]
    pub treasury_owner: UncheckedAccount<'info>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = treasury_owner,
        associated_token::token_program = token_program
    )]
    pub treasury_wallet: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: fixed owner; the wallet ATA is derived against it below
    #[account(address = LP_OWNER)]
    pub lp_owner: UncheckedAccount<'info>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = lp_owner,
        associated_token::token_program = token_program
    )]
    pub lp_pool_wallet: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: fixed owner; the wallet ATA is derived against it below
    #[account(address = STAKERS_OWNER)]
    pub stakers_owner: UncheckedAccount<'info>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = stakers_owner,
        associated_token::token_program = token_program
    )]
    pub stakers_wallet: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn distribute_fees(ctx: Context<DistributeFees>, amount: u64, decimals: u8) -> Result<()> {
    // Transfer-fee withholding is a Token-2022 extension
    require_keys_eq!(
        ctx.accounts.token_program.key(),
        spl_token_2022::ID,
        RouterError::WrongTokenProgram
    );
    validate_distribution(
        amount,
        decimals,
        ctx.accounts.mint.decimals,
        ctx.accounts.router_vault.amount,
    )?;

    let mint_key = ctx.accounts.mint.key();
    let seeds = [
        SEED_NAMESPACE.as_ref(),
        SEED_ROUTER.as_ref(),
        mint_key.as_ref(),
        &[ctx.accounts.router.bump],
    ];
    let signer = &[&seeds[..]];

    transfer_split(
        &ctx.accounts.token_program,
        &ctx.accounts.router,
        &ctx.accounts.mint,
        &ctx.accounts.router_vault,
        &ctx.accounts.stakers_wallet,
        &ctx.accounts.treasury_wallet,
        &ctx.accounts.lp_pool_wallet,
        signer,
        amount,
    )
}

/// Precondition chain for an explicit-amount distribution. Checked in order:
/// dust floor, decimals freshness, vault coverage.
pub(crate) fn validate_distribution(
    amount: u64,
    decimals: u8,
    mint_decimals: u8,
    vault_balance: u64,
) -> Result<()> {
    require!(amount >= MIN_DISTRIBUTE, RouterError::ZeroAmount);
    require!(decimals == mint_decimals, RouterError::DecimalsMismatch);
    require!(vault_balance >= amount, RouterError::InsufficientVaultBalance);
    Ok(())
}

/// Split `amount` and move the three shares out of the vault, signed by the
/// router PDA. Emits `FeeDistribution` once all three transfers succeed.
#[allow(clippy::too_many_arguments)]
pub(crate) fn transfer_split<'info>(
    token_program: &Interface<'info, TokenInterface>,
    router: &Account<'info, Router>,
    mint: &InterfaceAccount<'info, Mint>,
    router_vault: &InterfaceAccount<'info, TokenAccount>,
    stakers_wallet: &InterfaceAccount<'info, TokenAccount>,
    treasury_wallet: &InterfaceAccount<'info, TokenAccount>,
    lp_pool_wallet: &InterfaceAccount<'info, TokenAccount>,
    signer: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let (stakers_amount, treasury_amount, lp_amount) = math::compute_splits(amount)?;
    let decimals = mint.decimals;

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: router_vault.to_account_info(),
                mint: mint.to_account_info(),
                to: stakers_wallet.to_account_info(),
                authority: router.to_account_info(),
            },
            signer,
        ),
        stakers_amount,
        decimals,
    )?;

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: router_vault.to_account_info(),
                mint: mint.to_account_info(),
                to: treasury_wallet.to_account_info(),
                authority: router.to_account_info(),
            },
            signer,
        ),
        treasury_amount,
        decimals,
    )?;

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: router_vault.to_account_info(),
                mint: mint.to_account_info(),
                to: lp_pool_wallet.to_account_info(),
                authority: router.to_account_info(),
            },
            signer,
        ),
        lp_amount,
        decimals,
    )?;

    emit!(FeeDistribution {
        stakers_amount,
        treasury_amount,
        lp_amount,
        total: amount,
    });

    Ok(())
}
