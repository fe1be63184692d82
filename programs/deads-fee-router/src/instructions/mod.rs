pub mod distribute_fees;
pub mod harvest_and_distribute;
pub mod initialize_router;

pub use distribute_fees::*;
pub use harvest_and_distribute::*;
pub use initialize_router::*;
