use anchor_lang::prelude::*;

/// PDA seeds
pub const SEED_NAMESPACE: &[u8] = b"solanadeads";
pub const SEED_ROUTER: &[u8] = b"fee-router-v1";

/// Fixed destination owners (cluster-agnostic). The program derives the
/// actual wallet ATAs against these at runtime.
pub const TREASURY_OWNER: Pubkey =
    solana_program::pubkey!("26xcb2Ygdj47BSsXTgQf4QHQw38jxMaKbENHyzwkaQA8");
pub const LP_OWNER: Pubkey =
    solana_program::pubkey!("4zrLoUzDrTSohZ4ay6uuQM5fAPbyPSMi31hTRCaaQx7y");
pub const STAKERS_OWNER: Pubkey =
    solana_program::pubkey!("DeAdS9A5s2YpLzy4tAwMVTqCAa5HPQ4r1TL2p3CZLeCo");

/// Split ratios (basis points). The stakers share absorbs the truncation
/// remainder, so the three shares always sum to the distributed amount.
pub const STAKERS_BP: u16 = 6500; // 65.00%
pub const TREASURY_BP: u16 = 1750; // 17.50%
pub const LP_BP: u16 = 1750; // 17.50%
pub const MAX_BPS: u16 = 10_000;

// The table must cover the full amount.
const _: () = assert!(STAKERS_BP as u32 + TREASURY_BP as u32 + LP_BP as u32 == MAX_BPS as u32);

/// Dust guard: distributions below this many base units are skipped.
pub const MIN_DISTRIBUTE: u64 = 10;
