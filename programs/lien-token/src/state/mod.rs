pub mod checkpoint;
pub mod dividend_record;
pub mod grant;
pub mod holder;
pub mod ledger;
pub mod profit_pool;
pub mod term_profit;

pub use checkpoint::Checkpoint;
pub use dividend_record::DividendRecord;
pub use grant::{Grant, GrantInfo};
pub use holder::Holder;
pub use ledger::Ledger;
pub use profit_pool::{ProfitPool, WindowEntry};
pub use term_profit::TermProfit;
