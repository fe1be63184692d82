use anchor_lang::prelude::*;
use spl_associated_token_account::get_associated_token_address_with_program_id;

use crate::constants::{SEED_NAMESPACE, SEED_ROUTER};

/// Router PDA for a mint.
pub fn router_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_NAMESPACE, SEED_ROUTER, mint.as_ref()], &crate::ID)
}

/// Custody vault: the router PDA's associated token account.
pub fn vault_address(router: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(router, mint, token_program)
}

/// Destination wallet: a fixed owner's associated token account.
pub fn destination_wallet(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LP_OWNER, STAKERS_OWNER, TREASURY_OWNER};

    #[test]
    fn derivation_is_idempotent() {
        let mint = Pubkey::new_unique();
        let (router_a, bump_a) = router_address(&mint);
        let (router_b, bump_b) = router_address(&mint);
        assert_eq!(router_a, router_b);
        assert_eq!(bump_a, bump_b);

        let vault_a = vault_address(&router_a, &mint, &spl_token_2022::ID);
        let vault_b = vault_address(&router_b, &mint, &spl_token_2022::ID);
        assert_eq!(vault_a, vault_b);
    }

    #[test]
    fn distinct_mints_get_distinct_routers() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();
        assert_ne!(router_address(&mint_a).0, router_address(&mint_b).0);
    }

    #[test]
    fn destination_wallets_are_distinct_per_owner() {
        let mint = Pubkey::new_unique();
        let treasury = destination_wallet(&TREASURY_OWNER, &mint, &spl_token_2022::ID);
        let lp = destination_wallet(&LP_OWNER, &mint, &spl_token_2022::ID);
        let stakers = destination_wallet(&STAKERS_OWNER, &mint, &spl_token_2022::ID);
        assert_ne!(treasury, lp);
        assert_ne!(treasury, stakers);
        assert_ne!(lp, stakers);
    }

    #[test]
    fn vault_differs_from_destination_wallets() {
        let mint = Pubkey::new_unique();
        let (router, _) = router_address(&mint);
        let vault = vault_address(&router, &mint, &spl_token_2022::ID);
        let treasury = destination_wallet(&TREASURY_OWNER, &mint, &spl_token_2022::ID);
        assert_ne!(vault, treasury);
    }
}
