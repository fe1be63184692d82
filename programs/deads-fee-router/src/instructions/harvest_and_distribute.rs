use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use spl_token_2022::extension::transfer_fee::instruction as transfer_fee_ix;

use crate::{
    constants::*, errors::RouterError, events::HarvestRun,
    instructions::distribute_fees::transfer_split, state::Router,
};

#[derive(Accounts)]
pub struct HarvestAndDistribute<'info> {
    #[account(
        seeds = [SEED_NAMESPACE, SEED_ROUTER, mint.key().as_ref()],
        bump = router.bump
    )]
    pub router: Account<'info, Router>,

    /// Withheld fees are harvested onto the mint before the vault withdrawal.
    #[account(mut)]
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
    // remaining_accounts: fee-bearing token accounts to harvest from (may be empty)
}

pub fn harvest_and_distribute<'a, 'b, 'c, 'info>(
    ctx: Context<'a, 'b, 'c, 'info, HarvestAndDistribute<'info>>,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.token_program.key(),
        spl_token_2022::ID,
        RouterError::WrongTokenProgram
    );

    let mint_key = ctx.accounts.mint.key();

    // Every supplied source must be a token account of this mint under the
    // same token program, otherwise the whole batch is rejected up front.
    for source in ctx.remaining_accounts.iter() {
        require_keys_eq!(
            *source.owner,
            ctx.accounts.token_program.key(),
            RouterError::WrongTokenProgram
        );
        let data = source.try_borrow_data()?;
        let token_account = TokenAccount::try_deserialize(&mut &data[..])?;
        require_keys_eq!(token_account.mint, mint_key, RouterError::InvalidMintForSource);
    }

    let seeds = [
        SEED_NAMESPACE.as_ref(),
        SEED_ROUTER.as_ref(),
        mint_key.as_ref(),
        &[ctx.accounts.router.bump],
    ];
    let signer = &[&seeds[..]];

    let sources = ctx.remaining_accounts.len() as u32;
    let vault_before = ctx.accounts.router_vault.amount;

    // 1) Harvest withheld fees from the sources onto the mint.
    if !ctx.remaining_accounts.is_empty() {
        let mut harvest_ix = transfer_fee_ix::harvest_withheld_tokens_to_mint(
            &ctx.accounts.token_program.key(),
            &mint_key,
            &[],
        )?;
        for source in ctx.remaining_accounts.iter() {
            harvest_ix
                .accounts
                .push(AccountMeta::new(source.key(), false));
        }
        let mut harvest_infos = vec![ctx.accounts.mint.to_account_info()];
        harvest_infos.extend(ctx.remaining_accounts.iter().cloned());
        invoke_signed(&harvest_ix, &harvest_infos, signer)?;
    }

    // 2) Withdraw withheld fees from the mint into the vault. Runs even when
    //    the source list is empty so residue parked on the mint is swept.
    let withdraw_ix = transfer_fee_ix::withdraw_withheld_tokens_from_mint(
        &ctx.accounts.token_program.key(),
        &mint_key,
        &ctx.accounts.router_vault.key(),
        &ctx.accounts.router.key(),
        &[],
    )?;
    let withdraw_infos = [
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.router_vault.to_account_info(),
        ctx.accounts.router.to_account_info(),
    ];
    invoke_signed(&withdraw_ix, &withdraw_infos, signer)?;

    // 3) Distribute the entire vault balance, not just the harvested delta,
    //    so previously stranded residue is swept too.
    ctx.accounts.router_vault.reload()?;
    let distributable = ctx.accounts.router_vault.amount;

    let distributed = if distributable < MIN_DISTRIBUTE {
        // An idle harvest is not an error.
        msg!(
            "Vault balance {} below minimum {}, skipping distribution",
            distributable,
            MIN_DISTRIBUTE
        );
        0
    } else {
        transfer_split(
            &ctx.accounts.token_program,
            &ctx.accounts.router,
            &ctx.accounts.mint,
            &ctx.accounts.router_vault,
            &ctx.accounts.stakers_wallet,
            &ctx.accounts.treasury_wallet,
            &ctx.accounts.lp_pool_wallet,
            signer,
            distributable,
        )?;
        distributable
    };

    ctx.accounts.router_vault.reload()?;
    let vault_after = ctx.accounts.router_vault.amount;

    emit!(HarvestRun {
        sources,
        vault_before,
        distributed,
        vault_after,
    });

    Ok(())
}
