pub mod initialize;
pub mod open_holder;
pub mod open_vault;
pub mod transfer;
pub mod mint;
pub mod burn;
pub mod create_grant;
pub mod deposit_to_grant;
pub mod claim_vested_tokens;
pub mod get_grant;
pub mod settle_profit;
pub mod receive_dividend;
pub mod ledger_queries;
pub mod holder_queries;
pub mod profit_queries;

pub use initialize::*;
pub use open_holder::*;
pub use open_vault::*;
pub use transfer::*;
pub use mint::*;
pub use burn::*;
pub use create_grant::*;
pub use deposit_to_grant::*;
pub use claim_vested_tokens::*;
pub use get_grant::*;
pub use settle_profit::*;
pub use receive_dividend::*;
pub use ledger_queries::*;
pub use holder_queries::*;
pub use profit_queries::*;
